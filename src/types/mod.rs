#![warn(clippy::missing_docs_in_private_items)]

mod event;
mod pair;
mod route;
mod state;
mod state_change;
mod transfer;

pub use self::{
	event::*,
	pair::*,
	route::*,
	state::*,
	state_change::*,
	transfer::*,
};
