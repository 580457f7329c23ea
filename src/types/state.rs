#![warn(clippy::missing_docs_in_private_items)]

use raiden_mediator_primitives::types::{
	Address,
	BlockNumber,
	Secret,
	SecretHash,
};
use serde::{
	Deserialize,
	Serialize,
};

use super::{
	Event,
	MediationPair,
	RoutesState,
};

/// The only mutable aggregate of the mediator: one in-flight end-to-end
/// payment being forwarded through zero or more hops.
///
/// `transfers_pair` is kept in insertion order, which is also non-increasing
/// `payer_transfer.expiration` order — new pairs are only ever appended, and
/// every new pair has a strictly smaller expiration than the one before it,
/// so no sort is ever required.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct MediatorState {
	/// Our own address.
	pub our_address: Address,
	/// Candidate routes for the next (or only) hop.
	pub routes: RoutesState,
	/// Chain height as of the last processed `Block`.
	pub block_number: BlockNumber,
	/// Hash of the secret this mediation is conditioned on.
	pub hashlock: SecretHash,
	/// The secret, once learned.
	pub secret: Option<Secret>,
	/// Every hop mediated so far, tail is the most recent.
	pub transfers_pair: Vec<MediationPair>,
}

/// The result of a transition: the (possibly absent, once finalized) next
/// state plus every outbound event the driver should dispatch.
///
/// Named after the analogous `Iteration` envelope used elsewhere in this
/// codebase: any product of a state and an event list carries the same
/// semantics.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MediatorTransition {
	/// `None` once every pair has reached a terminal sub-state on both
	/// sides.
	pub new_state: Option<MediatorState>,
	/// Side effects to dispatch, in emission order.
	pub events: Vec<Event>,
}

impl MediatorTransition {
	/// A transition producing no events, carrying `state` forward unchanged.
	pub fn unchanged(state: Option<MediatorState>) -> Self {
		Self { new_state: state, events: vec![] }
	}
}
