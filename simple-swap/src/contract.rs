use crate::error::Error;
use crate::events;
use crate::storage::*;
use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env};

/// Pulls tokens from an owner into pool custody.
///
/// The transfer requires the owner's authorization; if the ledger refuses it
/// (insufficient balance or missing authorization) the whole invocation
/// aborts and no pool state is committed.
fn pull(e: &Env, token: Address, from: &Address, amount: i128) {
    token::Client::new(e, &token).transfer(from, &e.current_contract_address(), &amount);
}

/// Pushes tokens from pool custody to a recipient address.
fn push(e: &Env, token: Address, to: &Address, amount: i128) {
    token::Client::new(e, &token).transfer(&e.current_contract_address(), to, &amount);
}

/// Executes one swap in either direction.
///
/// Validation happens before any token movement, and the post-trade reserves
/// are computed from the reserves captured here, never re-read after a
/// transfer. `sell_a` selects the direction: true sells token A for token B.
fn execute_swap(
    e: &Env,
    caller: &Address,
    amount_in: i128,
    min_amount_out: i128,
    recipient: &Address,
    sell_a: bool,
) -> Result<i128, Error> {
    if amount_in <= 0 {
        return Err(Error::InsufficientInputAmount);
    }
    // Output paid into the pool's own custody would diverge the reserve
    // counters from the actual holdings.
    if *recipient == e.current_contract_address() {
        return Err(Error::InvalidRecipient);
    }

    let (reserve_a, reserve_b) = (get_reserve_a(e), get_reserve_b(e));
    let (reserve_in, reserve_out) = if sell_a {
        (reserve_a, reserve_b)
    } else {
        (reserve_b, reserve_a)
    };
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(Error::InsufficientLiquidity);
    }

    let amount_out = SimpleSwap::quote(amount_in, reserve_in, reserve_out);
    if amount_out < min_amount_out {
        return Err(Error::InsufficientOutputAmount);
    }

    let (token_in, token_out) = if sell_a {
        (get_token_a(e), get_token_b(e))
    } else {
        (get_token_b(e), get_token_a(e))
    };
    pull(e, token_in, caller, amount_in);
    push(e, token_out, recipient, amount_out);

    if sell_a {
        put_reserve_a(e, reserve_in + amount_in);
        put_reserve_b(e, reserve_out - amount_out);
        events::swap(e, caller, recipient, amount_in, 0, 0, amount_out);
    } else {
        put_reserve_a(e, reserve_out - amount_out);
        put_reserve_b(e, reserve_in + amount_in);
        events::swap(e, caller, recipient, 0, amount_in, amount_out, 0);
    }

    Ok(amount_out)
}

#[contract]
pub struct SimpleSwap;

#[contractimpl]
impl SimpleSwap {
    /// Initializes the exchange pool over two distinct token contracts
    /// with both reserves at zero.
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `token_a` - The first token contract address
    /// * `token_b` - The second token contract address
    ///
    /// # Panics
    /// Panics with `InvalidAsset` if `token_a == token_b`
    pub fn __constructor(e: Env, token_a: Address, token_b: Address) {
        if token_a == token_b {
            panic_with_error!(&e, Error::InvalidAsset);
        }

        put_token_a(&e, token_a);
        put_token_b(&e, token_b);
        put_reserve_a(&e, 0);
        put_reserve_b(&e, 0);
    }

    /// Deposits both tokens into the shared reserve.
    ///
    /// Any ratio is accepted, including one that moves the effective price;
    /// there is no proportionality check against the existing reserves and
    /// no share accounting. Deposited liquidity cannot be withdrawn.
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `provider` - The address depositing tokens (must authorize)
    /// * `amount_a` - Amount of token A to deposit, strictly positive
    /// * `amount_b` - Amount of token B to deposit, strictly positive
    ///
    /// # Errors
    /// * `InsufficientLiquidityAmount` if either amount is zero or negative
    pub fn add_liquidity(
        e: Env,
        provider: Address,
        amount_a: i128,
        amount_b: i128,
    ) -> Result<(), Error> {
        // Depositor needs to authorize the transfers
        provider.require_auth();

        if amount_a <= 0 || amount_b <= 0 {
            return Err(Error::InsufficientLiquidityAmount);
        }

        let (reserve_a, reserve_b) = (get_reserve_a(&e), get_reserve_b(&e));

        pull(&e, get_token_a(&e), &provider, amount_a);
        pull(&e, get_token_b(&e), &provider, amount_b);

        put_reserve_a(&e, reserve_a + amount_a);
        put_reserve_b(&e, reserve_b + amount_b);

        events::liquidity_added(&e, &provider, amount_a, amount_b);
        Ok(())
    }

    /// Computes the output of a trade against the given reserves.
    ///
    /// No-fee constant product formula:
    /// `amount_out = amount_in * reserve_out / (reserve_in + amount_in)`,
    /// with the full product taken before the division so truncation can
    /// only favor the pool. Returns 0 for degenerate input (non-positive
    /// `amount_in` or `reserve_out`, negative `reserve_in`); never fails.
    pub fn quote(amount_in: i128, reserve_in: i128, reserve_out: i128) -> i128 {
        if amount_in <= 0 || reserve_in < 0 || reserve_out <= 0 {
            return 0;
        }
        // Denominator is strictly positive here, the division cannot trap
        amount_in * reserve_out / (reserve_in + amount_in)
    }

    /// Swaps an exact amount of token A for token B.
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `caller` - The address selling token A (must authorize)
    /// * `amount_in` - Exact amount of token A to sell, strictly positive
    /// * `min_amount_out` - Minimum acceptable amount of token B (slippage guard)
    /// * `recipient` - The address receiving the token B output
    ///
    /// # Returns
    /// The amount of token B paid to `recipient`
    ///
    /// # Errors
    /// * `InsufficientInputAmount` if `amount_in` is zero or negative
    /// * `InvalidRecipient` if `recipient` is the pool itself
    /// * `InsufficientLiquidity` if either reserve is empty
    /// * `InsufficientOutputAmount` if the quoted output is below `min_amount_out`
    pub fn swap_a_for_b(
        e: Env,
        caller: Address,
        amount_in: i128,
        min_amount_out: i128,
        recipient: Address,
    ) -> Result<i128, Error> {
        caller.require_auth();
        execute_swap(&e, &caller, amount_in, min_amount_out, &recipient, true)
    }

    /// Swaps an exact amount of token B for token A.
    ///
    /// Mirror of [`SimpleSwap::swap_a_for_b`] with the same validation,
    /// slippage guard and failure modes.
    pub fn swap_b_for_a(
        e: Env,
        caller: Address,
        amount_in: i128,
        min_amount_out: i128,
        recipient: Address,
    ) -> Result<i128, Error> {
        caller.require_auth();
        execute_swap(&e, &caller, amount_in, min_amount_out, &recipient, false)
    }

    /// Returns the current reserves of both tokens in the pool.
    pub fn get_reserves(e: Env) -> (i128, i128) {
        (get_reserve_a(&e), get_reserve_b(&e))
    }

    /// Returns the two token contract addresses the pool trades.
    pub fn get_tokens(e: Env) -> (Address, Address) {
        (get_token_a(&e), get_token_b(&e))
    }
}
