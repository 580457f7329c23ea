#![warn(clippy::missing_docs_in_private_items)]

use raiden_mediator_macros::IntoEvent;
use raiden_mediator_primitives::types::{
	Address,
	BlockExpiration,
	ChannelAddress,
	Secret,
	SecretHash,
	TokenAddress,
	TokenAmount,
	TransferIdentifier,
};
use serde::{
	Deserialize,
	Serialize,
};

use super::LockedTransfer;

/// Every side effect the mediator transition function can request.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum Event {
	SendMediatedTransfer(SendMediatedTransfer),
	SendRefundTransfer(SendRefundTransfer),
	SendRevealSecret(SendRevealSecret),
	SendBalanceProof(SendBalanceProof),
	ContractSendWithdraw(ContractSendWithdraw),
}

/// Forward a locked transfer to `recipient` on the chosen route.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoEvent)]
pub struct SendMediatedTransfer {
	/// The leg being offered.
	pub transfer: LockedTransfer,
	/// The node the transfer is addressed to.
	pub recipient: Address,
}

/// Return a transfer to the sender because no viable route could be found or
/// the remaining timeout is too tight for a further hop.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoEvent)]
pub struct SendRefundTransfer {
	/// Payment identifier, copied from the transfer being refunded.
	pub identifier: TransferIdentifier,
	/// Token of the transfer being refunded.
	pub token: TokenAddress,
	/// Amount of the transfer being refunded.
	pub amount: TokenAmount,
	/// Hashlock of the transfer being refunded.
	pub hashlock: SecretHash,
	/// Expiration carried over from the transfer being refunded.
	pub expiration: BlockExpiration,
	/// The node the refund is addressed to (our payer on this leg).
	pub recipient: Address,
}

/// Reveal a known secret to `recipient`, off-chain.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoEvent)]
pub struct SendRevealSecret {
	/// Payment identifier this reveal belongs to.
	pub identifier: TransferIdentifier,
	/// The secret being revealed.
	pub secret: Secret,
	/// Hash of the secret, included so the receiver can match it without
	/// recomputing the hash before verifying it owns the matching lock.
	pub secrethash: SecretHash,
	/// The node the reveal is addressed to.
	pub recipient: Address,
	/// The node originating this reveal, i.e. our own address.
	pub sender: Address,
}

/// Send an off-chain balance proof claiming a lock we were paid for.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoEvent)]
pub struct SendBalanceProof {
	/// Payment identifier this balance proof settles.
	pub identifier: TransferIdentifier,
	/// The node the balance proof is addressed to.
	pub recipient: Address,
}

/// Claim a lock on-chain because it became unsafe to keep waiting for an
/// off-chain balance proof.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoEvent)]
pub struct ContractSendWithdraw {
	/// The leg being claimed.
	pub transfer: LockedTransfer,
	/// The channel to submit the withdraw transaction on.
	pub channel_address: ChannelAddress,
}
