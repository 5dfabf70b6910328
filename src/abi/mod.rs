//! Contract interfaces used on-chain
//!
//! Only the entries the bot actually calls: the three ERC-20 functions,
//! the Algebra-style router's `exactInputSingle`, and the pool's
//! `getReserves`.

use alloy::sol;

sol! {
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address owner) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
    }

    struct ExactInputSingleParams {
        address tokenIn;
        address tokenOut;
        address deployer;
        address recipient;
        uint256 deadline;
        uint256 amountIn;
        uint256 amountOutMinimum;
        uint160 limitSqrtPrice;
    }

    interface ISwapRouter {
        function exactInputSingle(ExactInputSingleParams calldata params) external payable returns (uint256 amountOut);
    }

    interface IAlgebraPool {
        function getReserves() external view returns (uint128, uint128);
    }
}
