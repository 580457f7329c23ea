#![warn(clippy::missing_docs_in_private_items)]

use crate::types::{
	PayeeState,
	PayerState,
};

/// Blocks of slack reserved between a payer lock's expiration and the payee
/// lock offered for it, to account for the time it takes to learn the
/// secret and send a balance proof before the payer side expires.
pub const TRANSIT_MARGIN: i64 = 2;

/// Payee substates in which the secret is known to us, whether or not it has
/// been passed on yet.
pub const PAYEE_STATE_SECRET_KNOWN: [PayeeState; 3] =
	[PayeeState::SecretRevealed, PayeeState::ContractWithdraw, PayeeState::BalanceProof];

/// Payer substates in which the secret is known to us.
pub const PAYER_STATE_SECRET_KNOWN: [PayerState; 3] =
	[PayerState::SecretRevealed, PayerState::ContractWithdraw, PayerState::BalanceProof];

/// Payee substates in which we have been paid for this leg.
pub const PAYEE_STATE_TRANSFER_PAID: [PayeeState; 2] =
	[PayeeState::ContractWithdraw, PayeeState::BalanceProof];

/// Payer substates in which we have paid our payer for this leg.
pub const PAYER_STATE_TRANSFER_PAID: [PayerState; 2] =
	[PayerState::ContractWithdraw, PayerState::BalanceProof];

/// Payee substates in which this leg can no longer change.
pub const PAYEE_STATE_TRANSFER_FINAL: [PayeeState; 3] =
	[PayeeState::ContractWithdraw, PayeeState::BalanceProof, PayeeState::Expired];

/// Payer substates in which this leg can no longer change.
pub const PAYER_STATE_TRANSFER_FINAL: [PayerState; 3] =
	[PayerState::ContractWithdraw, PayerState::BalanceProof, PayerState::Expired];
