use shared::VoteType;
use soroban_sdk::{Address, Env, String, Symbol, Vec, U256};

use crate::types::IdScheme;

pub fn governor_initialized(env: &Env, admin: &Address, id_scheme: IdScheme) {
    env.events().publish(
        (Symbol::new(env, "governor_initialized"), admin.clone()),
        id_scheme,
    );
}

pub fn proposal_created(
    env: &Env,
    proposal_id: &U256,
    proposer: &Address,
    targets: &Vec<Address>,
    values: &Vec<i128>,
    vote_start: u64,
    vote_end: u64,
    description: &String,
) {
    env.events().publish(
        (Symbol::new(env, "proposal_created"), proposal_id.clone()),
        (
            proposer.clone(),
            targets.clone(),
            values.clone(),
            vote_start,
            vote_end,
            description.clone(),
        ),
    );
}

pub fn proposal_canceled(env: &Env, proposal_id: &U256) {
    env.events()
        .publish((Symbol::new(env, "proposal_canceled"), proposal_id.clone()), ());
}

pub fn proposal_executed(env: &Env, proposal_id: &U256) {
    env.events()
        .publish((Symbol::new(env, "proposal_executed"), proposal_id.clone()), ());
}

pub fn vote_cast(
    env: &Env,
    voter: &Address,
    proposal_id: &U256,
    option: VoteType,
    weight: i128,
    reason: &String,
) {
    env.events().publish(
        (Symbol::new(env, "vote_cast"), voter.clone()),
        (proposal_id.clone(), option, weight, reason.clone()),
    );
}
