mod builder;
mod generator;
mod keyring;

pub use builder::*;
pub use generator::*;
pub use keyring::*;
