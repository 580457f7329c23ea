#![warn(clippy::missing_docs_in_private_items)]

use raiden_mediator_primitives::types::BlockNumber;

/// Errors raised when the driver violates a precondition of the mediator
/// transition function. These never occur in response to a remote peer's
/// behavior (that is a byzantine observation, not a `MediationError`) — they
/// signal that the caller constructed an impossible state or delivered an
/// event out of order.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MediationError {
	/// A `Block` state change carried a block number behind a route's
	/// already-recorded close block.
	#[error("block {block_number} is behind the close block {close_block} recorded for this route")]
	CloseBlockAfterCurrentBlock {
		/// The block number the driver delivered.
		block_number: BlockNumber,
		/// The close block already recorded on the route.
		close_block: BlockNumber,
	},
	/// A locked transfer failed to satisfy its own invariants at construction.
	#[error("invalid locked transfer: {0}")]
	InvalidLockedTransfer(String),
	/// A route failed to satisfy its own invariants at construction.
	#[error("invalid route: {0}")]
	InvalidRoute(String),
}
