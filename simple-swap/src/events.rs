use soroban_sdk::{symbol_short, Address, Env};

/// Publishes a `LiquidityAdded` event for a committed deposit.
pub fn liquidity_added(e: &Env, provider: &Address, amount_a: i128, amount_b: i128) {
    let topics = (symbol_short!("liq_added"), provider.clone());
    e.events().publish(topics, (amount_a, amount_b));
}

/// Publishes a `Swap` event for a committed trade.
///
/// One side carries the input, the other the output; the unused side's
/// amounts are zero.
pub fn swap(
    e: &Env,
    caller: &Address,
    recipient: &Address,
    in_a: i128,
    in_b: i128,
    out_a: i128,
    out_b: i128,
) {
    let topics = (symbol_short!("swap"), caller.clone(), recipient.clone());
    e.events().publish(topics, (in_a, in_b, out_a, out_b));
}
