use raiden_mediator_primitives::{
	hashing::hash_secret,
	types::Address,
};

pub const ALICE: &str = "ALICE";
pub const BOB: &str = "BOB";
pub const CHARLIE: &str = "CHARLIE";

/// Deterministic stand-ins for on-chain addresses. No signing happens in
/// this state machine, so there is no need for an actual keypair: an
/// address is just a stable 20-byte tag derived from a name.
pub enum Keyring {
	Alice,
	Bob,
	Charlie,
}

impl Keyring {
	pub fn address(&self) -> Address {
		let name = match self {
			Self::Alice => ALICE.as_bytes(),
			Self::Bob => BOB.as_bytes(),
			Self::Charlie => CHARLIE.as_bytes(),
		};
		Address::from_slice(&hash_secret(name)[..20])
	}
}
