//! Proposal registry and lifecycle state machine
//!
//! Owns `ProposalCore` records. State is never stored: it is derived from the
//! two flags and the schedule against a single `now` sampled by the caller,
//! and every transition is checked through [`check_state`].

use shared::state::{expect_state, StateMismatch};
use shared::validation::{schedule, vote_end};
use shared::ProposalState;
use soroban_sdk::{log, Address, Env, U256};

use crate::errors::GovernorError;
use crate::storage;
use crate::types::{GovernorSettings, ProposalCore};

/// Derive the lifecycle state of an existing proposal at `now`.
pub fn derive_state(proposal: &ProposalCore, now: u64) -> ProposalState {
    if proposal.executed {
        return ProposalState::Executed;
    }
    if proposal.canceled {
        return ProposalState::Canceled;
    }
    if now < proposal.vote_start {
        ProposalState::Pending
    } else if now <= vote_end(proposal.vote_start, proposal.vote_duration) {
        ProposalState::Active
    } else {
        ProposalState::Expired
    }
}

/// State at `now`, or `None` for an id that was never created
pub fn state_at(env: &Env, proposal_id: &U256, now: u64) -> Option<ProposalState> {
    storage::get_proposal(env, proposal_id).map(|proposal| derive_state(&proposal, now))
}

pub fn state(env: &Env, proposal_id: &U256, now: u64) -> Result<ProposalState, GovernorError> {
    state_at(env, proposal_id, now).ok_or(GovernorError::NonexistentProposal)
}

/// Match the current state against a bitmap of allowed states.
///
/// Every state-changing operation goes through here. Mismatches are logged
/// with the proposal id, the current state and the allowed bitmap.
pub fn check_state(
    env: &Env,
    proposal_id: &U256,
    now: u64,
    allowed: u32,
) -> Result<Option<ProposalState>, StateMismatch> {
    let current = state_at(env, proposal_id, now);
    if let Err(mismatch) = expect_state(current, allowed) {
        match mismatch.current {
            Some(state) => log!(
                env,
                "unexpected proposal state",
                proposal_id.clone(),
                state,
                mismatch.allowed
            ),
            None => log!(env, "nonexistent proposal", proposal_id.clone(), mismatch.allowed),
        }
        return Err(mismatch);
    }
    Ok(current)
}

/// [`check_state`] with the mismatch folded into the contract error.
pub fn validate_state(
    env: &Env,
    proposal_id: &U256,
    now: u64,
    allowed: u32,
) -> Result<Option<ProposalState>, GovernorError> {
    check_state(env, proposal_id, now, allowed).map_err(|mismatch| match mismatch.current {
        None => GovernorError::NonexistentProposal,
        Some(_) => GovernorError::UnexpectedProposalState,
    })
}

pub fn get(env: &Env, proposal_id: &U256) -> Result<ProposalCore, GovernorError> {
    storage::get_proposal(env, proposal_id).ok_or(GovernorError::NonexistentProposal)
}

/// Store a new proposal scheduled from `now` and the current settings.
pub fn create(
    env: &Env,
    proposal_id: &U256,
    proposer: &Address,
    now: u64,
    settings: &GovernorSettings,
) -> Result<ProposalCore, GovernorError> {
    // The id must not be in use yet
    validate_state(env, proposal_id, now, 0)?;

    let (vote_start, vote_duration) =
        schedule(now, settings.voting_delay, settings.voting_period).ok_or_else(|| {
            log!(
                env,
                "proposal schedule overflow",
                now,
                settings.voting_delay,
                settings.voting_period
            );
            GovernorError::SafeCastOverflow
        })?;

    let proposal = ProposalCore {
        proposer: proposer.clone(),
        vote_start,
        vote_duration,
        executed: false,
        canceled: false,
    };
    storage::save_proposal(env, proposal_id, &proposal);
    Ok(proposal)
}

pub fn mark_canceled(env: &Env, proposal_id: &U256, mut proposal: ProposalCore) {
    proposal.canceled = true;
    storage::save_proposal(env, proposal_id, &proposal);
}

pub fn mark_executed(env: &Env, proposal_id: &U256, mut proposal: ProposalCore) {
    proposal.executed = true;
    storage::save_proposal(env, proposal_id, &proposal);
}

pub fn deadline(proposal: &ProposalCore) -> u64 {
    vote_end(proposal.vote_start, proposal.vote_duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    fn record(env: &Env) -> ProposalCore {
        ProposalCore {
            proposer: Address::generate(env),
            vote_start: 8_200,
            vote_duration: 50_400,
            executed: false,
            canceled: false,
        }
    }

    #[test]
    fn test_state_follows_the_clock() {
        let env = Env::default();
        let proposal = record(&env);

        assert_eq!(derive_state(&proposal, 1_000), ProposalState::Pending);
        assert_eq!(derive_state(&proposal, 8_199), ProposalState::Pending);
        assert_eq!(derive_state(&proposal, 8_200), ProposalState::Active);
        assert_eq!(derive_state(&proposal, 58_600), ProposalState::Active);
        assert_eq!(derive_state(&proposal, 58_601), ProposalState::Expired);
    }

    #[test]
    fn test_flags_override_the_clock() {
        let env = Env::default();
        let mut proposal = record(&env);

        proposal.canceled = true;
        for now in [0, 8_200, 58_601, u64::MAX] {
            assert_eq!(derive_state(&proposal, now), ProposalState::Canceled);
        }

        // executed wins if both flags were ever set
        proposal.executed = true;
        for now in [0, 8_200, 58_601, u64::MAX] {
            assert_eq!(derive_state(&proposal, now), ProposalState::Executed);
        }
    }

    #[test]
    fn test_deadline() {
        let env = Env::default();
        assert_eq!(deadline(&record(&env)), 58_600);
    }
}
