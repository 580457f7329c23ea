use raiden_mediator_primitives::types::{
	Bytes,
	Secret,
};
use rand::{
	distributions::Alphanumeric,
	thread_rng,
	Rng,
};

pub struct Generator;

impl Generator {
	pub fn random_secret() -> Secret {
		Bytes(thread_rng().sample_iter(&Alphanumeric).take(32).collect::<Vec<u8>>())
	}
}
