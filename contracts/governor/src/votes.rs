//! Vote tally: per-option accumulators and per-voter running totals.
//!
//! Counting does not look at proposal state; the facade checks that first.
//! Repeat votes from the same account add up.

use shared::VoteType;
use soroban_sdk::{Address, Env, U256};

use crate::errors::GovernorError;
use crate::storage;

/// Add `weight` to `option` and to the voter's total for this proposal.
pub fn count_vote(
    env: &Env,
    proposal_id: &U256,
    voter: &Address,
    option: u32,
    weight: i128,
) -> Result<VoteType, GovernorError> {
    let vote_type = VoteType::from_u32(option).ok_or(GovernorError::InvalidVoteType)?;

    let mut votes = storage::get_votes(env, proposal_id);
    match vote_type {
        VoteType::OptionA => {
            votes.option_a_votes = votes
                .option_a_votes
                .checked_add(weight)
                .ok_or(GovernorError::VoteOverflow)?;
        }
        VoteType::OptionB => {
            votes.option_b_votes = votes
                .option_b_votes
                .checked_add(weight)
                .ok_or(GovernorError::VoteOverflow)?;
        }
    }
    // keep the total readable without overflow
    votes
        .option_a_votes
        .checked_add(votes.option_b_votes)
        .ok_or(GovernorError::VoteOverflow)?;

    let voter_total = storage::get_voter_weight(env, proposal_id, voter)
        .checked_add(weight)
        .ok_or(GovernorError::VoteOverflow)?;

    storage::save_votes(env, proposal_id, &votes);
    storage::save_voter_weight(env, proposal_id, voter, voter_total);

    Ok(vote_type)
}

/// `(option_a, option_b, total)`; zeros for a proposal nobody voted on
pub fn proposal_votes(env: &Env, proposal_id: &U256) -> (i128, i128, i128) {
    let votes = storage::get_votes(env, proposal_id);
    (
        votes.option_a_votes,
        votes.option_b_votes,
        votes.option_a_votes + votes.option_b_votes,
    )
}

pub fn voter_weight(env: &Env, proposal_id: &U256, voter: &Address) -> i128 {
    storage::get_voter_weight(env, proposal_id, voter)
}
