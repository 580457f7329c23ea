#![warn(clippy::missing_docs_in_private_items)]

use serde::{
	Deserialize,
	Serialize,
};

use super::{
	LockedTransfer,
	Route,
};

/// Substates of the leg on which we are the payee (we received the locked
/// transfer and forward it onward, or must claim it ourselves).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayeeState {
	/// Waiting for either a secret or an expiration.
	Pending,
	/// We know the secret for this leg (revealed to us, or learned from our
	/// own payer side).
	SecretRevealed,
	/// The payee withdrew on-chain using the secret.
	ContractWithdraw,
	/// The payee sent us a valid balance proof.
	BalanceProof,
	/// The lock expired without payment.
	Expired,
}

/// Substates of the leg on which we are the payer (we forwarded the locked
/// transfer and are waiting to be paid back, or to learn the secret).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayerState {
	/// Waiting for either a secret or an expiration.
	Pending,
	/// The payer revealed the secret to us.
	SecretRevealed,
	/// Waiting for an on-chain withdraw to confirm, after revealing
	/// on-chain because it was unsafe to wait off-chain any longer.
	WaitingWithdraw,
	/// The payer withdrew on-chain using the secret.
	ContractWithdraw,
	/// We sent the payer a valid balance proof.
	BalanceProof,
	/// The lock expired without payment.
	Expired,
}

/// One hop of a mediated transfer: the route and lock we received it on
/// (payer leg) paired with the route and lock we forwarded it on (payee
/// leg).
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct MediationPair {
	/// Route the transfer arrived on.
	pub payer_route: Route,
	/// Lock as received from the payer.
	pub payer_transfer: LockedTransfer,
	/// Route the transfer was forwarded on.
	pub payee_route: Route,
	/// Lock as offered to the payee.
	pub payee_transfer: LockedTransfer,
	/// Payer leg substate.
	pub payer_state: PayerState,
	/// Payee leg substate.
	pub payee_state: PayeeState,
}

impl MediationPair {
	/// The address of the node we forwarded the transfer to.
	pub fn payee_address(&self) -> raiden_mediator_primitives::types::Address {
		self.payee_route.node_address
	}

	/// The address of the node that sent us the transfer.
	pub fn payer_address(&self) -> raiden_mediator_primitives::types::Address {
		self.payer_route.node_address
	}
}
