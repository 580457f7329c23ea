use raiden_mediator_primitives::types::{
	Address,
	BlockExpiration,
	ChannelAddress,
	RevealTimeout,
	SecretHash,
	SettleTimeout,
	TokenAddress,
	TokenAmount,
	TransferIdentifier,
};

use crate::types::{
	LockedTransfer,
	Route,
};

/// Default terms shared by every route built in this test suite, matching
/// the constants used throughout the scenarios this suite exercises.
pub const DEFAULT_REVEAL_TIMEOUT: u32 = 5;
pub const DEFAULT_SETTLE_TIMEOUT: u32 = 50;

/// Build a route with the suite's default timeouts, only varying the node,
/// channel, and available balance.
pub fn route(node_address: Address, channel_address: ChannelAddress, available_balance: u64) -> Route {
	Route::new(
		node_address,
		channel_address,
		TokenAmount::from(available_balance),
		SettleTimeout::from(DEFAULT_SETTLE_TIMEOUT),
		RevealTimeout::from(DEFAULT_REVEAL_TIMEOUT),
	)
	.expect("test route should satisfy reveal_timeout < settle_timeout")
}

/// Build a route whose settle timeout is far enough out not to bind
/// `get_timeout_blocks`, used for the upstream (payer) leg in every
/// scenario: only the payer transfer's own expiration is meant to matter
/// there.
pub fn non_binding_route(node_address: Address, channel_address: ChannelAddress) -> Route {
	Route::new(
		node_address,
		channel_address,
		TokenAmount::from(0u64),
		SettleTimeout::from(1_000u32),
		RevealTimeout::from(DEFAULT_REVEAL_TIMEOUT),
	)
	.expect("test route should satisfy reveal_timeout < settle_timeout")
}

/// Build a locked transfer addressed to `target`, identifier fixed at `1`
/// unless overridden, token fixed at the zero address (irrelevant to this
/// state machine).
pub fn transfer(amount: u64, target: Address, expiration: u64, hashlock: SecretHash) -> LockedTransfer {
	LockedTransfer::new(
		TransferIdentifier::from(1u32),
		TokenAmount::from(amount),
		TokenAddress::zero(),
		target,
		BlockExpiration::from(expiration),
		hashlock,
	)
	.expect("test transfer should satisfy amount > 0 and expiration > 0")
}
