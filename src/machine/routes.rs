#![warn(clippy::missing_docs_in_private_items)]

use raiden_mediator_primitives::types::TokenAmount;

use crate::types::{
	Route,
	RoutesState,
};

/// Pick the first available route with enough capacity and enough
/// `timeout_blocks` left over after reserving its `reveal_timeout`. Every
/// route tried and rejected along the way is moved to `ignored_routes`.
pub fn next_route(routes: &mut RoutesState, timeout_blocks: i64, amount: TokenAmount) -> Option<Route> {
	while !routes.available_routes.is_empty() {
		let candidate = routes.available_routes.remove(0);

		let has_capacity = candidate.available_balance >= amount;
		let has_time = timeout_blocks - candidate.reveal_timeout.as_i64() > 0;

		if has_capacity && has_time {
			return Some(candidate)
		}

		routes.ignored_routes.push(candidate);
	}
	None
}
