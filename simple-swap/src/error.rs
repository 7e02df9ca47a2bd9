use soroban_sdk::contracterror;

/// Failure codes for every refused pool operation.
///
/// All failures are total: a refused operation leaves reserves and token
/// balances exactly as they were.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The two pool assets must be distinct contracts.
    InvalidAsset = 1,
    /// Both liquidity amounts must be strictly positive.
    InsufficientLiquidityAmount = 2,
    /// The swap input amount must be strictly positive.
    InsufficientInputAmount = 3,
    /// The pool cannot pay swap output into its own custody.
    InvalidRecipient = 4,
    /// No quote is possible while either reserve is empty.
    InsufficientLiquidity = 5,
    /// The quoted output fell below the caller's minimum.
    InsufficientOutputAmount = 6,
}
