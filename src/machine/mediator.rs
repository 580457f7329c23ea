#![warn(clippy::missing_docs_in_private_items)]

use raiden_mediator_primitives::types::{
	Address,
	BlockExpiration,
	BlockNumber,
	Secret,
	U64,
};

use super::{
	routes::next_route,
	utils::{
		get_timeout_blocks,
		is_lock_valid,
		is_safe_to_wait,
		is_valid_refund,
	},
};
use crate::{
	constants::{
		PAYEE_STATE_SECRET_KNOWN,
		PAYEE_STATE_TRANSFER_FINAL,
		PAYEE_STATE_TRANSFER_PAID,
		PAYER_STATE_SECRET_KNOWN,
		PAYER_STATE_TRANSFER_FINAL,
		PAYER_STATE_TRANSFER_PAID,
	},
	errors::MediationError,
	types::{
		ActionInitMediator,
		ActionRouteChange,
		ContractReceiveWithdraw,
		ContractSendWithdraw,
		Event,
		LockedTransfer,
		MediationPair,
		MediatorState,
		MediatorTransition,
		PayeeState,
		PayerState,
		ReceiveBalanceProof,
		ReceiveSecretReveal,
		ReceiveTransferRefund,
		Route,
		SendBalanceProof,
		SendMediatedTransfer,
		SendRefundTransfer,
		SendRevealSecret,
		StateChange,
	},
};

/// A transition result for the mediator state.
pub type TransitionResult = Result<MediatorTransition, MediationError>;

/// Given a payer leg and a base budget of `timeout_blocks`, pick the next
/// route and build the payee leg for it. Returns `None` if no route in
/// `state.routes.available_routes` qualifies.
fn next_transfer_pair(
	state: &mut MediatorState,
	payer_route: Route,
	payer_transfer: LockedTransfer,
	timeout_blocks: i64,
) -> (Option<MediationPair>, Vec<Event>) {
	debug_assert!(timeout_blocks > 0);
	debug_assert!(timeout_blocks <= payer_transfer.expiration.as_i64() - state.block_number.as_i64());

	let payee_route = match next_route(&mut state.routes, timeout_blocks, payer_transfer.amount) {
		Some(route) => route,
		None => return (None, vec![]),
	};
	debug_assert!(payee_route.reveal_timeout.as_i64() < timeout_blocks);

	let lock_timeout = timeout_blocks - payee_route.reveal_timeout.as_i64();
	let lock_expiration: BlockExpiration = state.block_number + U64::from(lock_timeout as u64);

	let payee_transfer = LockedTransfer {
		identifier: payer_transfer.identifier,
		amount: payer_transfer.amount,
		token: payer_transfer.token,
		target: payer_transfer.target,
		expiration: lock_expiration,
		hashlock: payer_transfer.hashlock,
		secret: payer_transfer.secret.clone(),
	};

	let event =
		SendMediatedTransfer { transfer: payee_transfer.clone(), recipient: payee_route.node_address };

	let pair = MediationPair {
		payer_route,
		payer_transfer,
		payee_route,
		payee_transfer,
		payer_state: PayerState::Pending,
		payee_state: PayeeState::Pending,
	};

	(Some(pair), vec![event.into()])
}

/// Emit a `SendRefundTransfer` back along `refund_route`, unless the
/// remaining budget is too small to leave the refund's own recipient a safe
/// margin, in which case the received lock is left to expire silently.
fn events_for_refund_transfer(
	refund_route: &Route,
	refund_transfer: &LockedTransfer,
	timeout_blocks: i64,
	block_number: BlockNumber,
) -> Vec<Event> {
	let new_lock_timeout = timeout_blocks - refund_route.reveal_timeout.as_i64();
	if new_lock_timeout <= 0 {
		return vec![]
	}

	let new_lock_expiration = block_number + U64::from(new_lock_timeout as u64);

	vec![SendRefundTransfer {
		identifier: refund_transfer.identifier,
		token: refund_transfer.token,
		amount: refund_transfer.amount,
		hashlock: refund_transfer.hashlock,
		expiration: new_lock_expiration,
		recipient: refund_route.node_address,
	}
	.into()]
}

/// Try to mediate `payer_transfer` onward. Appends a new pair on success, or
/// falls back to refunding `payer_route` (or, if this is not the first hop,
/// the original payer of the whole mediation) when no route qualifies or the
/// remaining timeout budget is exhausted.
pub fn mediate_transfer(
	state: &mut MediatorState,
	payer_route: Route,
	payer_transfer: LockedTransfer,
) -> Result<Vec<Event>, MediationError> {
	let timeout_blocks = get_timeout_blocks(&payer_route, &payer_transfer, state.block_number)?;

	if timeout_blocks > 0 {
		let (pair, events) =
			next_transfer_pair(state, payer_route.clone(), payer_transfer.clone(), timeout_blocks);
		if let Some(pair) = pair {
			tracing::debug!(recipient = ?pair.payee_route.node_address, "mediating transfer to new hop");
			state.transfers_pair.push(pair);
			return Ok(events)
		}
	}

	let (original_route, original_transfer) = match state.transfers_pair.first() {
		Some(first) => (first.payer_route.clone(), first.payer_transfer.clone()),
		None => (payer_route, payer_transfer),
	};
	Ok(events_for_refund_transfer(&original_route, &original_transfer, timeout_blocks, state.block_number))
}

/// Walk `transfers_pair` tail to head, revealing the secret one hop further
/// upstream each time the hop immediately downstream has already
/// acknowledged knowing it.
fn events_for_secret_reveal(transfers_pair: &mut [MediationPair], our_address: Address) -> Vec<Event> {
	let mut events = vec![];

	for pair in transfers_pair.iter_mut().rev() {
		let payee_knows_secret = PAYEE_STATE_SECRET_KNOWN.contains(&pair.payee_state);
		let payer_knows_secret = PAYER_STATE_SECRET_KNOWN.contains(&pair.payer_state);

		if payee_knows_secret && !payer_knows_secret {
			pair.payer_state = PayerState::SecretRevealed;

			let secret = pair.payer_transfer.secret.clone().expect("secret known once SECRET_KNOWN");
			events.push(
				SendRevealSecret {
					identifier: pair.payer_transfer.identifier,
					secret,
					secrethash: pair.payer_transfer.hashlock,
					recipient: pair.payer_route.node_address,
					sender: our_address,
				}
				.into(),
			);
		}
	}

	events
}

/// Walk `transfers_pair` tail to head, sending a balance proof for every
/// leg whose payee knows the secret, has not been paid yet, and whose lock
/// has not expired.
fn events_for_balance_proof(transfers_pair: &mut [MediationPair], block_number: BlockNumber) -> Vec<Event> {
	let mut events = vec![];

	for pair in transfers_pair.iter_mut().rev() {
		let payee_knows_secret = PAYEE_STATE_SECRET_KNOWN.contains(&pair.payee_state);
		let payee_paid = PAYEE_STATE_TRANSFER_PAID.contains(&pair.payee_state);
		let lock_valid = is_lock_valid(block_number, &pair.payee_transfer);

		if payee_knows_secret && !payee_paid && lock_valid {
			pair.payee_state = PayeeState::BalanceProof;
			events.push(
				SendBalanceProof { identifier: pair.payee_transfer.identifier, recipient: pair.payee_route.node_address }
					.into(),
			);
		}
	}

	events
}

/// Record a newly learned secret, propagate it to every pair, set the
/// payee substate of the pair whose payee matches `from`, and run the
/// forward-balance-proof / backward-reveal passes.
fn secret_learned(state: &mut MediatorState, secret: Secret, from: Address, new_payee_state: PayeeState) -> Vec<Event> {
	if state.secret.is_none() {
		state.secret = Some(secret.clone());
		for pair in state.transfers_pair.iter_mut() {
			pair.payer_transfer.secret = Some(secret.clone());
			pair.payee_transfer.secret = Some(secret.clone());
		}
	}

	let mut wrong_reveal_order = false;
	for pair in state.transfers_pair.iter_mut().rev() {
		if pair.payee_route.node_address == from {
			pair.payee_state = new_payee_state;
			break
		} else if !PAYEE_STATE_SECRET_KNOWN.contains(&pair.payee_state) {
			wrong_reveal_order = true;
		}
	}
	if wrong_reveal_order {
		tracing::warn!(peer = ?from, "secret revealed out of order");
	}

	let mut events = events_for_balance_proof(&mut state.transfers_pair, state.block_number);
	events.extend(events_for_secret_reveal(&mut state.transfers_pair, state.our_address));
	events
}

/// Start mediating a freshly received transfer.
fn handle_init(state_change: ActionInitMediator) -> TransitionResult {
	let mut state = MediatorState {
		our_address: state_change.our_address,
		routes: state_change.routes,
		block_number: state_change.block_number,
		hashlock: state_change.from_transfer.hashlock,
		secret: None,
		transfers_pair: vec![],
	};

	let events = mediate_transfer(&mut state, state_change.from_route, state_change.from_transfer)?;
	Ok(MediatorTransition { new_state: Some(state), events })
}

/// Advance the block height: escalate to an on-chain withdraw when waiting
/// for an off-chain payer balance proof is no longer safe, and mark legs
/// expired once their lock's expiration block has passed.
fn handle_block(mut state: MediatorState, block_number: BlockNumber) -> MediatorTransition {
	state.block_number = block_number;
	let mut events = vec![];

	for pair in state.transfers_pair.iter_mut().rev() {
		let pair_final = PAYER_STATE_TRANSFER_FINAL.contains(&pair.payer_state) &&
			PAYEE_STATE_TRANSFER_FINAL.contains(&pair.payee_state);
		if pair_final {
			continue
		}

		let payee_paid = PAYEE_STATE_TRANSFER_PAID.contains(&pair.payee_state);
		let payer_paid = PAYER_STATE_TRANSFER_PAID.contains(&pair.payer_state);
		if payee_paid && !payer_paid && pair.payer_state != PayerState::WaitingWithdraw {
			let safe = is_safe_to_wait(block_number, &pair.payer_transfer, pair.payer_route.reveal_timeout);
			if !safe {
				tracing::debug!(channel = ?pair.payer_route.channel_address, "escalating to on-chain withdraw");
				pair.payer_state = PayerState::WaitingWithdraw;
				events.push(
					ContractSendWithdraw {
						transfer: pair.payer_transfer.clone(),
						channel_address: pair.payer_route.channel_address,
					}
					.into(),
				);
			}
		}

		if block_number > pair.payer_transfer.expiration && !payer_paid {
			pair.payer_state = PayerState::Expired;
		}
		if block_number > pair.payee_transfer.expiration && !payee_paid {
			pair.payee_state = PayeeState::Expired;
		}
	}

	MediatorTransition { new_state: Some(state), events }
}

/// Revise the terms of a candidate route.
fn handle_route_change(mut state: MediatorState, state_change: ActionRouteChange) -> MediatorTransition {
	state.routes.apply_route_change(state_change.route_update);
	MediatorTransition::unchanged(Some(state))
}

/// Only the most recently appended pair can be refunded — every earlier pair
/// was already refunded by construction when this one was created. On a
/// valid refund, the payee of that pair becomes the payer of a fresh
/// mediation attempt.
fn handle_refund_transfer(mut state: MediatorState, state_change: ReceiveTransferRefund) -> TransitionResult {
	debug_assert!(state.secret.is_none(), "refunds are only accepted before the secret is known");

	let last = match state.transfers_pair.last() {
		Some(pair) => pair.clone(),
		None => return Ok(MediatorTransition::unchanged(Some(state))),
	};

	if !is_valid_refund(&last.payee_transfer, state_change.sender, &state_change.transfer) {
		tracing::warn!(sender = ?state_change.sender, "rejected invalid refund transfer");
		return Ok(MediatorTransition::unchanged(Some(state)))
	}

	state.routes.refund_routes.push(last.payee_route.clone());
	let events = mediate_transfer(&mut state, last.payee_route, state_change.transfer)?;
	Ok(MediatorTransition { new_state: Some(state), events })
}

/// Verify the revealed secret against our hashlock before propagating it.
fn handle_secret_reveal(mut state: MediatorState, state_change: ReceiveSecretReveal) -> MediatorTransition {
	let hash = raiden_mediator_primitives::hashing::hash_secret(&state_change.secret.0);
	if hash.as_slice() != state.hashlock.as_bytes() {
		tracing::warn!(sender = ?state_change.sender, "secret reveal did not match hashlock");
		return MediatorTransition::unchanged(Some(state))
	}

	let events = secret_learned(&mut state, state_change.secret, state_change.sender, PayeeState::SecretRevealed);
	MediatorTransition { new_state: Some(state), events }
}

/// A lock was claimed on-chain. If it matches a payer leg, mark that leg
/// withdrawn; otherwise the secret must have come from our payee claiming
/// on-chain, so treat it as a (payee-side) secret reveal.
fn handle_contract_withdraw(mut state: MediatorState, state_change: ContractReceiveWithdraw) -> MediatorTransition {
	let matched = state
		.transfers_pair
		.iter_mut()
		.find(|pair| pair.payer_route.channel_address == state_change.channel_address);

	match matched {
		Some(pair) => {
			pair.payer_state = PayerState::ContractWithdraw;
			MediatorTransition::unchanged(Some(state))
		},
		None => {
			let events =
				secret_learned(&mut state, state_change.secret, state_change.sender, PayeeState::ContractWithdraw);
			MediatorTransition { new_state: Some(state), events }
		},
	}
}

/// Mark every pair on the matching channel as paid by our payer off-chain.
fn handle_balance_proof(mut state: MediatorState, state_change: ReceiveBalanceProof) -> MediatorTransition {
	for pair in state.transfers_pair.iter_mut() {
		if pair.payer_route.channel_address == state_change.node_address {
			pair.payer_state = PayerState::BalanceProof;
		}
	}
	MediatorTransition::unchanged(Some(state))
}

/// Drop the state once every pair has reached a terminal sub-state on both
/// sides — including the vacuous case of zero pairs (no mediation was ever
/// attempted, e.g. an immediate refund with no available route).
fn clear_if_finalized(transition: MediatorTransition) -> MediatorTransition {
	let all_final = match &transition.new_state {
		Some(state) => state.transfers_pair.iter().all(|pair| {
			PAYER_STATE_TRANSFER_FINAL.contains(&pair.payer_state) &&
				PAYEE_STATE_TRANSFER_FINAL.contains(&pair.payee_state)
		}),
		None => return transition,
	};

	if all_final {
		MediatorTransition { new_state: None, events: transition.events }
	} else {
		transition
	}
}

/// Route an incoming state change to the handler for the current phase,
/// then run the finalizer. Unrecognized events for the current phase are
/// ignored: the state (or absence of it) is returned unchanged with no
/// events.
pub fn state_transition(state: Option<MediatorState>, state_change: StateChange) -> TransitionResult {
	let transition = match (state, state_change) {
		(None, StateChange::ActionInitMediator(inner)) => handle_init(inner)?,
		(None, _) => MediatorTransition::unchanged(None),

		(Some(state), StateChange::Block(inner)) => handle_block(state, inner.block_number),
		(Some(state), StateChange::ActionRouteChange(inner)) if state.secret.is_none() =>
			handle_route_change(state, inner),
		(Some(state), StateChange::ReceiveTransferRefund(inner)) if state.secret.is_none() =>
			handle_refund_transfer(state, inner)?,
		(Some(state), StateChange::ReceiveSecretReveal(inner)) => handle_secret_reveal(state, inner),
		(Some(state), StateChange::ContractReceiveWithdraw(inner)) => handle_contract_withdraw(state, inner),
		(Some(state), StateChange::ReceiveBalanceProof(inner)) if state.secret.is_some() =>
			handle_balance_proof(state, inner),

		(Some(state), _) => MediatorTransition::unchanged(Some(state)),
	};

	Ok(clear_if_finalized(transition))
}
