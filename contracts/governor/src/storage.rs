use shared::constants::{PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_THRESHOLD};
use soroban_sdk::{Address, Env, U256};

use crate::types::{
    DataKey, GovernorConfig, GovernorSettings, ProposalActions, ProposalCore, ProposalVotes,
};

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}

// ── Config ───────────────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<GovernorConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &GovernorConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// ── Settings ─────────────────────────────────────────────────────────────────

pub fn get_settings(env: &Env) -> Option<GovernorSettings> {
    env.storage().instance().get(&DataKey::Settings)
}

pub fn set_settings(env: &Env, settings: &GovernorSettings) {
    env.storage().instance().set(&DataKey::Settings, settings);
    bump_instance(env);
}

// ── Proposal Count ───────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
    bump_instance(env);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal(env: &Env, proposal_id: &U256) -> Option<ProposalCore> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id.clone()))
}

pub fn save_proposal(env: &Env, proposal_id: &U256, proposal: &ProposalCore) {
    let key = DataKey::Proposal(proposal_id.clone());
    env.storage().persistent().set(&key, proposal);
    bump_persistent(env, &key);
}

pub fn get_actions(env: &Env, proposal_id: &U256) -> Option<ProposalActions> {
    env.storage()
        .persistent()
        .get(&DataKey::Actions(proposal_id.clone()))
}

pub fn save_actions(env: &Env, proposal_id: &U256, actions: &ProposalActions) {
    let key = DataKey::Actions(proposal_id.clone());
    env.storage().persistent().set(&key, actions);
    bump_persistent(env, &key);
}

// ── Votes ────────────────────────────────────────────────────────────────────

pub fn get_votes(env: &Env, proposal_id: &U256) -> ProposalVotes {
    env.storage()
        .persistent()
        .get(&DataKey::Votes(proposal_id.clone()))
        .unwrap_or_default()
}

pub fn save_votes(env: &Env, proposal_id: &U256, votes: &ProposalVotes) {
    let key = DataKey::Votes(proposal_id.clone());
    env.storage().persistent().set(&key, votes);
    bump_persistent(env, &key);
}

pub fn get_voter_weight(env: &Env, proposal_id: &U256, voter: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::VoterWeight(proposal_id.clone(), voter.clone()))
        .unwrap_or(0i128)
}

pub fn save_voter_weight(env: &Env, proposal_id: &U256, voter: &Address, weight: i128) {
    let key = DataKey::VoterWeight(proposal_id.clone(), voter.clone());
    env.storage().persistent().set(&key, &weight);
    bump_persistent(env, &key);
}
