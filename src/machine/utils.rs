#![warn(clippy::missing_docs_in_private_items)]

use raiden_mediator_primitives::types::{
	Address,
	BlockNumber,
	RevealTimeout,
};

use crate::{
	constants::TRANSIT_MARGIN,
	errors::MediationError,
	types::{
		LockedTransfer,
		Route,
	},
};

/// A lock can still be claimed at `block` if it has not yet expired.
pub fn is_lock_valid(block: BlockNumber, transfer: &LockedTransfer) -> bool {
	block <= transfer.expiration
}

/// It is safe to keep waiting for an off-chain redemption of `transfer` at
/// `block` as long as the peer still has more than `reveal_timeout` blocks
/// left to react once we reveal the secret.
pub fn is_safe_to_wait(block: BlockNumber, transfer: &LockedTransfer, reveal_timeout: RevealTimeout) -> bool {
	block < transfer.expiration.saturating_sub(reveal_timeout)
}

/// A refund is only honored if it returns exactly what was sent out, on the
/// same hashlock, to the same eventual target, with a strictly smaller
/// expiration, and the refund did not come from the target itself (a target
/// has no reason to refund a transfer addressed to it).
pub fn is_valid_refund(original: &LockedTransfer, sender: Address, refund: &LockedTransfer) -> bool {
	sender != original.target &&
		original.identifier == refund.identifier &&
		original.amount == refund.amount &&
		original.hashlock == refund.hashlock &&
		original.target == refund.target &&
		original.expiration > refund.expiration
}

/// Blocks left in which a further hop can safely be forwarded, after
/// reserving `TRANSIT_MARGIN` against a last-block reveal.
///
/// Signed because the value is routinely checked against `<= 0` before any
/// further hop is attempted; it is transient arithmetic, not a block height.
pub fn get_timeout_blocks(
	payer_route: &Route,
	payer_transfer: &LockedTransfer,
	block: BlockNumber,
) -> Result<i64, MediationError> {
	let blocks_until_settlement = match payer_route.close_block {
		Some(close_block) => {
			if block < close_block {
				return Err(MediationError::CloseBlockAfterCurrentBlock {
					block_number: block,
					close_block,
				})
			}
			payer_route.settle_timeout.as_i64() - (block.as_i64() - close_block.as_i64()).max(0)
		},
		None => payer_route.settle_timeout.as_i64(),
	};

	let safe_payer_timeout =
		blocks_until_settlement.min(payer_transfer.expiration.as_i64() - block.as_i64());

	Ok(safe_payer_timeout - TRANSIT_MARGIN)
}
