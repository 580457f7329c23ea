#![warn(clippy::missing_docs_in_private_items)]

use raiden_mediator_primitives::types::{
	Address,
	BlockExpiration,
	Secret,
	SecretHash,
	TokenAddress,
	TokenAmount,
	TransferIdentifier,
};
use serde::{
	Deserialize,
	Serialize,
};

use crate::errors::MediationError;

/// A single HTLC leg: the amount and token locked, who it is ultimately
/// bound for, when it expires, and the hashlock it is conditioned on.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct LockedTransfer {
	/// Payment identifier, stable across every leg of one end-to-end payment.
	pub identifier: TransferIdentifier,
	/// Locked amount.
	pub amount: TokenAmount,
	/// Token being transferred.
	pub token: TokenAddress,
	/// Final recipient of the payment.
	pub target: Address,
	/// Block at which the lock can no longer be claimed.
	pub expiration: BlockExpiration,
	/// `sha256(secret)` this lock is conditioned on.
	pub hashlock: SecretHash,
	/// Known once the secret has been learned for this specific leg.
	pub secret: Option<Secret>,
}

impl LockedTransfer {
	/// Build a locked transfer, checking that `amount > 0` and
	/// `expiration > 0`.
	pub fn new(
		identifier: TransferIdentifier,
		amount: TokenAmount,
		token: TokenAddress,
		target: Address,
		expiration: BlockExpiration,
		hashlock: SecretHash,
	) -> Result<Self, MediationError> {
		if amount.is_zero() {
			return Err(MediationError::InvalidLockedTransfer("amount must be > 0".into()))
		}
		if expiration.is_zero() {
			return Err(MediationError::InvalidLockedTransfer("expiration must be > 0".into()))
		}
		Ok(Self { identifier, amount, token, target, expiration, hashlock, secret: None })
	}

	/// Record the secret for this leg.
	pub fn with_secret(mut self, secret: Secret) -> Self {
		self.secret = Some(secret);
		self
	}
}
