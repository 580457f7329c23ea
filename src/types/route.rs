#![warn(clippy::missing_docs_in_private_items)]

use raiden_mediator_primitives::types::{
	Address,
	BlockNumber,
	ChannelAddress,
	RevealTimeout,
	SettleTimeout,
	TokenAmount,
};
use serde::{
	Deserialize,
	Serialize,
};

use crate::errors::MediationError;

/// A single hop offered by a route provider: the node to forward to, the
/// channel to use, and the terms available on it.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Route {
	/// The next hop's address.
	pub node_address: Address,
	/// The on-chain channel identifier to use for this hop.
	pub channel_address: ChannelAddress,
	/// Capacity available on this channel in the forwarding direction.
	pub available_balance: TokenAmount,
	/// The channel's settle timeout.
	pub settle_timeout: SettleTimeout,
	/// The channel's reveal timeout.
	pub reveal_timeout: RevealTimeout,
	/// Set once the channel has been closed on-chain.
	pub close_block: Option<BlockNumber>,
}

impl Route {
	/// Build a route, checking the invariant that `reveal_timeout <
	/// settle_timeout`.
	pub fn new(
		node_address: Address,
		channel_address: ChannelAddress,
		available_balance: TokenAmount,
		settle_timeout: SettleTimeout,
		reveal_timeout: RevealTimeout,
	) -> Result<Self, MediationError> {
		if reveal_timeout >= settle_timeout {
			return Err(MediationError::InvalidRoute(format!(
				"reveal_timeout {reveal_timeout} must be less than settle_timeout {settle_timeout}"
			)))
		}
		Ok(Self {
			node_address,
			channel_address,
			available_balance,
			settle_timeout,
			reveal_timeout,
			close_block: None,
		})
	}

	/// True if `other` refers to the same on-chain channel as this route.
	pub fn is_same_channel(&self, other: &Route) -> bool {
		self.node_address == other.node_address && self.channel_address == other.channel_address
	}
}

/// Partitions the routes known to a mediation attempt: a route lives in
/// exactly one of the three buckets at any time.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct RoutesState {
	/// Routes not yet tried, in the order they should be tried.
	pub available_routes: Vec<Route>,
	/// Routes tried and rejected by the counterparty, or dropped for being
	/// unusable (e.g. too little available balance).
	pub ignored_routes: Vec<Route>,
	/// Routes that refunded the transfer back to us.
	pub refund_routes: Vec<Route>,
}

impl RoutesState {
	/// Apply an `ActionRouteChange` update: replace the route sharing the
	/// update's `(node_address, channel_address)` if one is available,
	/// otherwise append it, unless it has already been used or discarded.
	pub fn apply_route_change(&mut self, route_update: Route) {
		if let Some(existing) =
			self.available_routes.iter_mut().find(|route| route.is_same_channel(&route_update))
		{
			*existing = route_update;
			return
		}

		let already_consumed = self
			.ignored_routes
			.iter()
			.chain(self.refund_routes.iter())
			.any(|route| route.is_same_channel(&route_update));
		if !already_consumed {
			self.available_routes.push(route_update);
		}
	}
}
