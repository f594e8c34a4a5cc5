//! Proposal id strategies
//!
//! `HashedIds` derives the id from the proposal content, so the same content
//! always maps to the same id (and a resubmission collides with the original).
//! `SequentialIds` hands out 1, 2, 3, ... from the proposal counter.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, String, Vec, U256};

use crate::storage;
use crate::types::IdScheme;

pub trait ProposalIdStrategy {
    fn proposal_id(
        env: &Env,
        targets: &Vec<Address>,
        values: &Vec<i128>,
        description: &String,
    ) -> U256;
}

pub struct HashedIds;

pub struct SequentialIds;

/// sha256 of the XDR-encoded description
pub fn description_hash(env: &Env, description: &String) -> BytesN<32> {
    env.crypto()
        .sha256(&description.clone().to_xdr(env))
        .to_bytes()
}

/// sha256 of the XDR-encoded `(targets, values, description_hash)` tuple,
/// read as a big-endian 256-bit integer
pub fn hash_proposal(
    env: &Env,
    targets: &Vec<Address>,
    values: &Vec<i128>,
    description_hash: &BytesN<32>,
) -> U256 {
    let payload = (targets.clone(), values.clone(), description_hash.clone()).to_xdr(env);
    let digest = env.crypto().sha256(&payload).to_bytes();
    U256::from_be_bytes(env, &Bytes::from_array(env, &digest.to_array()))
}

impl ProposalIdStrategy for HashedIds {
    fn proposal_id(
        env: &Env,
        targets: &Vec<Address>,
        values: &Vec<i128>,
        description: &String,
    ) -> U256 {
        hash_proposal(env, targets, values, &description_hash(env, description))
    }
}

impl ProposalIdStrategy for SequentialIds {
    fn proposal_id(
        env: &Env,
        _targets: &Vec<Address>,
        _values: &Vec<i128>,
        _description: &String,
    ) -> U256 {
        let next = storage::get_proposal_count(env) + 1;
        U256::from_u128(env, next as u128)
    }
}

impl IdScheme {
    pub fn proposal_id(
        self,
        env: &Env,
        targets: &Vec<Address>,
        values: &Vec<i128>,
        description: &String,
    ) -> U256 {
        match self {
            IdScheme::Hashed => HashedIds::proposal_id(env, targets, values, description),
            IdScheme::Sequential => SequentialIds::proposal_id(env, targets, values, description),
        }
    }
}
