#![warn(clippy::missing_docs_in_private_items)]

//! Mediator state machine for a Raiden-style payment-channel network: a
//! deterministic, side-effect-free transition function that forwards a
//! hash-time-locked transfer from an upstream payer to a downstream payee.

/// State machine constants.
pub mod constants;
/// State machine errors.
pub mod errors;
/// State machine transitioners.
pub mod machine;
#[cfg(test)]
pub mod tests;
/// State machine types.
pub mod types;