use raiden_mediator_primitives::{
	hashing::hash_secret,
	types::{
		Address,
		BlockExpiration,
		BlockNumber,
		SecretHash,
	},
};

use super::factories::{
	non_binding_route,
	route,
	transfer,
	Generator,
	Keyring,
};
use crate::{
	machine::mediator::state_transition,
	types::{
		ActionInitMediator,
		Block,
		ContractReceiveWithdraw,
		Event,
		MediatorState,
		PayeeState,
		PayerState,
		ReceiveBalanceProof,
		ReceiveSecretReveal,
		ReceiveTransferRefund,
		Route,
		RoutesState,
	},
};

/// Build the hashlock/secret pair every scenario mediates on.
fn secret_and_hashlock() -> (raiden_mediator_primitives::types::Secret, SecretHash) {
	let secret = Generator::random_secret();
	let hashlock = SecretHash::from_slice(&hash_secret(&secret.0));
	(secret, hashlock)
}

/// The route describing the channel the transfer arrived on, from A.
fn payer_route() -> Route {
	non_binding_route(Keyring::Alice.address(), Address::from_low_u64_be(1))
}

/// Start mediating `from_transfer{expiration, amount, hashlock}` at `block`
/// with `available_routes` offered for the next hop.
fn init(
	block: u64,
	expiration: u64,
	amount: u64,
	hashlock: SecretHash,
	available_routes: Vec<Route>,
) -> ActionInitMediator {
	ActionInitMediator {
		our_address: Keyring::Charlie.address(),
		routes: RoutesState { available_routes, ignored_routes: vec![], refund_routes: vec![] },
		block_number: BlockNumber::from(block),
		from_route: payer_route(),
		from_transfer: transfer(amount, Keyring::Bob.address(), expiration, hashlock),
	}
}

/// Run scenario 1 up to (and including) the mediated transfer, returning the
/// resulting state plus the secret/hashlock pair it was mediated on.
fn mediate_happy_path() -> (MediatorState, raiden_mediator_primitives::types::Secret, SecretHash) {
	let (secret, hashlock) = secret_and_hashlock();
	let route_to_b = route(Keyring::Bob.address(), Address::from_low_u64_be(2), 10);

	let result =
		state_transition(None, init(10, 100, 10, hashlock, vec![route_to_b]).into()).unwrap();

	assert_eq!(result.events.len(), 1);
	match &result.events[0] {
		Event::SendMediatedTransfer(event) => {
			assert_eq!(event.recipient, Keyring::Bob.address());
			assert_eq!(event.transfer.expiration, BlockExpiration::from(93u64));
		},
		other => panic!("expected SendMediatedTransfer, got {other:?}"),
	}

	(result.new_state.unwrap(), secret, hashlock)
}

#[test]
fn test_mediator_happy_path() {
	let (state, secret, _hashlock) = mediate_happy_path();

	let reveal = ReceiveSecretReveal { sender: Keyring::Bob.address(), secret: secret.clone() };
	let result = state_transition(Some(state), reveal.into()).unwrap();

	assert_eq!(result.events.len(), 2);
	match &result.events[0] {
		Event::SendBalanceProof(event) => assert_eq!(event.recipient, Keyring::Bob.address()),
		other => panic!("expected SendBalanceProof, got {other:?}"),
	}
	match &result.events[1] {
		Event::SendRevealSecret(event) => {
			assert_eq!(event.recipient, Keyring::Alice.address());
			assert_eq!(event.sender, Keyring::Charlie.address());
			assert_eq!(event.secret, secret);
		},
		other => panic!("expected SendRevealSecret, got {other:?}"),
	}

	let state = result.new_state.unwrap();
	let pair = &state.transfers_pair[0];
	assert_eq!(pair.payee_state, PayeeState::BalanceProof);
	assert_eq!(pair.payer_state, PayerState::SecretRevealed);
}

#[test]
fn test_mediator_no_route_refunds() {
	let (_secret, hashlock) = secret_and_hashlock();

	let result =
		state_transition(None, init(10, 100, 10, hashlock, vec![]).into()).unwrap();

	assert_eq!(result.events.len(), 1);
	match &result.events[0] {
		Event::SendRefundTransfer(event) => {
			assert_eq!(event.recipient, Keyring::Alice.address());
			assert_eq!(event.expiration, BlockExpiration::from(93u64));
		},
		other => panic!("expected SendRefundTransfer, got {other:?}"),
	}
	assert!(result.new_state.is_none());
}

#[test]
fn test_mediator_tight_timeout_is_silent() {
	let (_secret, hashlock) = secret_and_hashlock();
	let route_to_b = route(Keyring::Bob.address(), Address::from_low_u64_be(2), 10);

	let result =
		state_transition(None, init(10, 15, 10, hashlock, vec![route_to_b]).into()).unwrap();

	assert!(result.events.is_empty());
	assert!(result.new_state.is_none());
}

#[test]
fn test_mediator_escalates_to_onchain_withdraw() {
	let (state, secret, _hashlock) = mediate_happy_path();
	let reveal = ReceiveSecretReveal { sender: Keyring::Bob.address(), secret };
	let state = state_transition(Some(state), reveal.into()).unwrap().new_state.unwrap();

	let result =
		state_transition(Some(state), Block { block_number: BlockNumber::from(89u64) }.into())
			.unwrap();
	assert!(result.events.is_empty());
	let state = result.new_state.unwrap();

	let result =
		state_transition(Some(state), Block { block_number: BlockNumber::from(95u64) }.into())
			.unwrap();
	assert_eq!(result.events.len(), 1);
	match &result.events[0] {
		Event::ContractSendWithdraw(event) => {
			assert_eq!(event.channel_address, payer_route().channel_address)
		},
		other => panic!("expected ContractSendWithdraw, got {other:?}"),
	}
	let state = result.new_state.unwrap();
	assert_eq!(state.transfers_pair[0].payer_state, PayerState::WaitingWithdraw);
}

#[test]
fn test_mediator_rejects_out_of_order_refund() {
	let (state, _secret, hashlock) = mediate_happy_path();

	let refund = ReceiveTransferRefund {
		sender: Keyring::Bob.address(),
		transfer: transfer(10, Keyring::Bob.address(), 93, hashlock),
	};
	let result = state_transition(Some(state.clone()), refund.into()).unwrap();

	assert!(result.events.is_empty());
	assert_eq!(result.new_state.unwrap(), state);
}

#[test]
fn test_mediator_finalizes_on_balance_proof() {
	let (state, secret, _hashlock) = mediate_happy_path();
	let reveal = ReceiveSecretReveal { sender: Keyring::Bob.address(), secret };
	let state = state_transition(Some(state), reveal.into()).unwrap().new_state.unwrap();

	let balance_proof =
		ReceiveBalanceProof { node_address: payer_route().channel_address };
	let result = state_transition(Some(state), balance_proof.into()).unwrap();

	assert!(result.events.is_empty());
	assert!(result.new_state.is_none());
}

#[test]
fn test_mediator_finalizes_on_payer_contract_withdraw() {
	let (state, secret, _hashlock) = mediate_happy_path();
	let reveal = ReceiveSecretReveal { sender: Keyring::Bob.address(), secret: secret.clone() };
	let state = state_transition(Some(state), reveal.into()).unwrap().new_state.unwrap();
	assert_eq!(state.transfers_pair[0].payee_state, PayeeState::BalanceProof);

	let withdraw = ContractReceiveWithdraw {
		channel_address: payer_route().channel_address,
		sender: Keyring::Alice.address(),
		secret,
	};
	let result = state_transition(Some(state), withdraw.into()).unwrap();

	assert!(result.events.is_empty());
	assert!(result.new_state.is_none());
}

#[test]
fn test_mediator_block_is_idempotent() {
	let (state, secret, _hashlock) = mediate_happy_path();
	let reveal = ReceiveSecretReveal { sender: Keyring::Bob.address(), secret };
	let state = state_transition(Some(state), reveal.into()).unwrap().new_state.unwrap();

	let block = Block { block_number: BlockNumber::from(95u64) };
	let once = state_transition(Some(state), block.clone().into()).unwrap();
	let twice = state_transition(once.new_state.clone(), block.into()).unwrap();

	assert!(twice.events.is_empty());
	assert_eq!(once.new_state, twice.new_state);
}

#[test]
fn test_mediator_secret_is_monotone() {
	let (state, secret, _hashlock) = mediate_happy_path();
	assert!(state.secret.is_none());

	let reveal = ReceiveSecretReveal { sender: Keyring::Bob.address(), secret: secret.clone() };
	let state = state_transition(Some(state), reveal.into()).unwrap().new_state.unwrap();
	assert_eq!(state.secret, Some(secret.clone()));

	let block = Block { block_number: BlockNumber::from(50u64) };
	let state = state_transition(Some(state), block.into()).unwrap().new_state.unwrap();
	assert_eq!(state.secret, Some(secret));
}

#[test]
fn test_mediator_secret_reveal_rejects_mismatched_secret() {
	let (state, _secret, _hashlock) = mediate_happy_path();

	let wrong_secret = Generator::random_secret();
	let reveal = ReceiveSecretReveal { sender: Keyring::Bob.address(), secret: wrong_secret };
	let result = state_transition(Some(state.clone()), reveal.into()).unwrap();

	assert!(result.events.is_empty());
	assert_eq!(result.new_state.unwrap(), state);
}

#[test]
fn test_mediator_rejects_balance_proof_before_secret_is_known() {
	let (state, _secret, _hashlock) = mediate_happy_path();

	let balance_proof =
		ReceiveBalanceProof { node_address: payer_route().channel_address };
	let result = state_transition(Some(state.clone()), balance_proof.into()).unwrap();

	assert!(result.events.is_empty());
	assert_eq!(result.new_state.unwrap(), state);
}
