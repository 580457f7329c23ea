#![warn(clippy::missing_docs_in_private_items)]

pub use web3::types::{
	Address,
	Bytes,
	H160,
	H256,
	U256,
};

/// Custom numeric data types.
mod numeric;
pub use numeric::*;

/// Alias type for block expiration.
pub type BlockExpiration = U64;

/// Alias type for block number.
pub type BlockNumber = U64;

/// Alias type for block timeout.
pub type BlockTimeout = U64;

/// Alias type for the channel's on-chain address.
pub type ChannelAddress = Address;

/// Alias type for lock timeout.
pub type LockTimeout = U64;

/// Alias type for a mediated transfer identifier, unique per initiator.
pub type TransferIdentifier = U64;

/// Alias type for reveal timeout.
pub type RevealTimeout = U64;

/// Alias type for settle timeout.
pub type SettleTimeout = U64;

/// Alias type for secret.
pub type Secret = Bytes;

/// Alias type for secret hash.
pub type SecretHash = H256;

/// Alias type for token address.
pub type TokenAddress = Address;

/// Alias type for token amount.
pub type TokenAmount = U256;
