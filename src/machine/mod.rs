#![warn(clippy::missing_docs_in_private_items)]

/// Mediator state machine.
pub mod mediator;
/// Route bookkeeping.
pub mod routes;
/// Predicates shared across the mediator's handlers.
pub mod utils;
