#![no_std]

mod contract;
mod error;
mod events;
mod storage;

pub use contract::SimpleSwap;
pub use error::Error;

use soroban_sdk::contractmeta;

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Two-asset constant product exchange"
);
