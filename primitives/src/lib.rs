#![warn(clippy::missing_docs_in_private_items)]

//! Primitives crate defines the data types shared by the mediator state machine.

/// Base hashing functions.
pub mod hashing;
/// Base types, some of which are aliases from rust-web3.
pub mod types;