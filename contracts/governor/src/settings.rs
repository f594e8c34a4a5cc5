//! Governance parameters: voting delay, voting period, proposal threshold.
//!
//! Pure storage. Authorization of the setters happens in the contract layer.

use soroban_sdk::{log, Env, Symbol};

use crate::errors::GovernorError;
use crate::storage;
use crate::types::GovernorSettings;

fn validate(settings: &GovernorSettings) -> Result<(), GovernorError> {
    if settings.voting_period == 0 || settings.proposal_threshold < 0 {
        return Err(GovernorError::InvalidSetting);
    }
    Ok(())
}

pub fn init(env: &Env, settings: &GovernorSettings) -> Result<(), GovernorError> {
    validate(settings)?;
    storage::set_settings(env, settings);
    Ok(())
}

pub fn get(env: &Env) -> Result<GovernorSettings, GovernorError> {
    storage::get_settings(env).ok_or(GovernorError::NotInitialized)
}

pub fn voting_delay(env: &Env) -> Result<u64, GovernorError> {
    Ok(get(env)?.voting_delay)
}

pub fn voting_period(env: &Env) -> Result<u64, GovernorError> {
    Ok(get(env)?.voting_period)
}

pub fn proposal_threshold(env: &Env) -> Result<i128, GovernorError> {
    Ok(get(env)?.proposal_threshold)
}

pub fn set_voting_delay(env: &Env, value: u64) -> Result<(), GovernorError> {
    let mut settings = get(env)?;
    let old = settings.voting_delay;
    settings.voting_delay = value;
    validate(&settings)?;
    storage::set_settings(env, &settings);

    log!(env, "voting delay updated", old, value);
    env.events()
        .publish((Symbol::new(env, "voting_delay_set"),), (old, value));
    Ok(())
}

pub fn set_voting_period(env: &Env, value: u64) -> Result<(), GovernorError> {
    let mut settings = get(env)?;
    let old = settings.voting_period;
    settings.voting_period = value;
    validate(&settings)?;
    storage::set_settings(env, &settings);

    log!(env, "voting period updated", old, value);
    env.events()
        .publish((Symbol::new(env, "voting_period_set"),), (old, value));
    Ok(())
}

pub fn set_proposal_threshold(env: &Env, value: i128) -> Result<(), GovernorError> {
    let mut settings = get(env)?;
    let old = settings.proposal_threshold;
    settings.proposal_threshold = value;
    validate(&settings)?;
    storage::set_settings(env, &settings);

    log!(env, "proposal threshold updated", old, value);
    env.events()
        .publish((Symbol::new(env, "proposal_threshold_set"),), (old, value));
    Ok(())
}
