#![warn(clippy::missing_docs_in_private_items)]

use raiden_mediator_macros::IntoStateChange;
use raiden_mediator_primitives::types::{
	Address,
	BlockNumber,
	ChannelAddress,
	Secret,
};
use serde::{
	Deserialize,
	Serialize,
};

use super::{
	LockedTransfer,
	Route,
	RoutesState,
};

/// Every input the mediator transition function understands.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum StateChange {
	ActionInitMediator(ActionInitMediator),
	Block(Block),
	ActionRouteChange(ActionRouteChange),
	ReceiveTransferRefund(ReceiveTransferRefund),
	ReceiveSecretReveal(ReceiveSecretReveal),
	ReceiveBalanceProof(ReceiveBalanceProof),
	ContractReceiveWithdraw(ContractReceiveWithdraw),
}

/// Start mediating a transfer that arrived on `from_route`.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoStateChange)]
pub struct ActionInitMediator {
	/// Our own address, needed to address events back to the payer.
	pub our_address: Address,
	/// Candidate routes offered for the next hop.
	pub routes: RoutesState,
	/// Block number at the time mediation starts.
	pub block_number: BlockNumber,
	/// The route the transfer arrived on.
	pub from_route: Route,
	/// The transfer as received from the payer.
	pub from_transfer: LockedTransfer,
}

/// A new block was mined.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoStateChange)]
pub struct Block {
	/// The new chain height.
	pub block_number: BlockNumber,
}

/// A route provider revised the terms of a route.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoStateChange)]
pub struct ActionRouteChange {
	/// The revised route.
	pub route_update: Route,
}

/// The payee refunded a transfer back to us.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoStateChange)]
pub struct ReceiveTransferRefund {
	/// The node that sent the refund.
	pub sender: Address,
	/// The refunded transfer.
	pub transfer: LockedTransfer,
}

/// A secret was revealed to us, off-chain.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoStateChange)]
pub struct ReceiveSecretReveal {
	/// The node that revealed the secret.
	pub sender: Address,
	/// The revealed secret.
	pub secret: Secret,
}

/// A counterparty sent a valid off-chain balance proof.
///
/// The field is named `node_address` for parity with the wire type it is
/// distilled from, but it is compared against a pair's
/// `payer_route.channel_address` / `payee_route.channel_address`, not an
/// `Address` — a node may have more than one channel open with us, so only
/// the channel identifies which leg the proof settles. See DESIGN.md for
/// the resolution of this ambiguity.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoStateChange)]
pub struct ReceiveBalanceProof {
	/// Channel the balance proof was received on.
	pub node_address: ChannelAddress,
}

/// A secret was claimed on-chain for one of our locks.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, IntoStateChange)]
pub struct ContractReceiveWithdraw {
	/// Channel the withdraw happened on.
	pub channel_address: ChannelAddress,
	/// The node that submitted the withdraw transaction.
	pub sender: Address,
	/// The secret used to withdraw.
	pub secret: Secret,
}
