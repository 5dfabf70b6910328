//! Banner, menu, and interactive prompts
//!
//! The menu is plain stdout/stdin rather than tracing: it is the interactive
//! surface, not diagnostics.

use std::io::{self, Write};

const BANNER: &str = r#"
███████╗ █████╗ ████████╗███████╗██╗   ██║███╗   ███╗ █████╗
██╔════╝██╔══██╗╚══██╔══╝██╔════╝██║   ██║████╗ ████║██╔══██╗
███████╗███████║   ██║   ███████╗██║   ██║██╔████╔██║███████║
╚════██║██╔══██║   ██║   ╚════██║██║   ██║██║╚██╔╝██║██╔══██║
███████║██║  ██║   ██║   ███████║╚██████╔╝██║ ╚═╝ ██║██║  ██║
╚══════╝╚═╝  ╚═╝   ╚═╝   ╚══════╝ ╚═════╝ ╚═╝     ╚═╝╚═╝  ╚═╝
"#;

pub fn display_banner() {
    println!("{}", BANNER);
    println!("          Satsuma Swap Bot - Citrea Testnet");
    println!("{}", "-".repeat(50));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StartTransactions,
    SetTransactionCount,
    ManualSwap,
    Exit,
}

pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::StartTransactions),
        "2" => Some(MenuChoice::SetTransactionCount),
        "3" => Some(MenuChoice::ManualSwap),
        "4" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub fn display_menu() -> io::Result<Option<MenuChoice>> {
    println!();
    println!("  Satsuma Bot Menu");
    println!("  1. Start Transactions");
    println!("  2. Set Transaction Count");
    println!("  3. Manual Swap");
    println!("  4. Exit");
    let input = prompt("> Select option (1-4): ")?;
    Ok(parse_menu_choice(&input))
}

pub fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

/// Prompt until the user enters a positive integer.
pub fn prompt_positive_count(message: &str) -> io::Result<u32> {
    loop {
        let input = prompt(message)?;
        match input.trim().parse::<u32>() {
            Ok(count) if count > 0 => return Ok(count),
            _ => println!("- Invalid number entered. Please enter a positive number."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_parse() {
        assert_eq!(parse_menu_choice("1"), Some(MenuChoice::StartTransactions));
        assert_eq!(parse_menu_choice(" 4\n"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("5"), None);
        assert_eq!(parse_menu_choice("start"), None);
    }
}
