//! Persisted user preferences
//!
//! One JSON object with one field, read at startup and overwritten wholesale
//! whenever the user sets a new transaction count. A missing file means
//! nothing has been configured yet; a corrupt file is logged and treated the
//! same way.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserPreferences {
    pub transaction_count: u32,
}

pub fn load_transaction_count(path: impl AsRef<Path>) -> u32 {
    let path = path.as_ref();
    if !path.exists() {
        return 0;
    }

    match fs::read_to_string(path)
        .map_err(anyhow::Error::new)
        .and_then(|raw| serde_json::from_str::<UserPreferences>(&raw).map_err(anyhow::Error::new))
    {
        Ok(prefs) => {
            info!(
                "✅ Loaded saved transaction count: {}",
                prefs.transaction_count
            );
            prefs.transaction_count
        }
        Err(e) => {
            warn!("⚠️ Error loading settings from {}: {}", path.display(), e);
            0
        }
    }
}

pub fn save_transaction_count(path: impl AsRef<Path>, count: u32) -> Result<()> {
    let prefs = UserPreferences {
        transaction_count: count,
    };
    let raw = serde_json::to_string(&prefs)?;
    fs::write(path.as_ref(), raw)
        .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
    info!("✅ Transaction count {} saved successfully", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("swapbot-prefs-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn round_trip() {
        let path = temp_path("roundtrip");
        save_transaction_count(&path, 7).unwrap();
        assert_eq!(load_transaction_count(&path), 7);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_defaults_to_zero() {
        assert_eq!(load_transaction_count(temp_path("missing")), 0);
    }

    #[test]
    fn corrupt_file_defaults_to_zero() {
        let path = temp_path("corrupt");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_transaction_count(&path), 0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_overwrites_previous_value() {
        let path = temp_path("overwrite");
        save_transaction_count(&path, 3).unwrap();
        save_transaction_count(&path, 11).unwrap();
        assert_eq!(load_transaction_count(&path), 11);
        fs::remove_file(&path).unwrap();
    }
}
