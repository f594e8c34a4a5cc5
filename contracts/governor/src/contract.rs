use authorization::Role;
use shared::state::encode_state;
use shared::ProposalState;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec, U256};

use crate::{
    access::{self, RoleTable},
    errors::GovernorError,
    events, ids, proposal, settings, storage,
    types::{GovernorConfig, GovernorSettings, IdScheme, ProposalActions},
    votes,
};

/// States in which each operation is accepted
const VOTABLE: u32 = encode_state(ProposalState::Active);
const CANCELABLE: u32 = encode_state(ProposalState::Pending);
const EXECUTABLE: u32 = encode_state(ProposalState::Expired);

#[contract]
pub struct GovernorContract;

#[contractimpl]
impl GovernorContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the governor. Can only be called once.
    ///
    /// `admin` receives the Admin role; `id_scheme` fixes how proposal ids are
    /// derived for the lifetime of the contract.
    pub fn initialize(
        env: Env,
        admin: Address,
        id_scheme: IdScheme,
        voting_delay: u64,
        voting_period: u64,
        proposal_threshold: i128,
    ) -> Result<(), GovernorError> {
        if storage::has_config(&env) {
            return Err(GovernorError::AlreadyInitialized);
        }
        admin.require_auth();

        settings::init(
            &env,
            &GovernorSettings { voting_delay, voting_period, proposal_threshold },
        )?;
        authorization::initialize_admin(&env, &admin);
        storage::set_config(&env, &GovernorConfig { admin: admin.clone(), id_scheme });

        events::governor_initialized(&env, &admin, id_scheme);

        Ok(())
    }

    // ── Roles ────────────────────────────────────────────────────────────────

    pub fn grant_role(
        env: Env,
        admin: Address,
        account: Address,
        role: Role,
    ) -> Result<(), GovernorError> {
        authorization::grant_role(&env, &admin, &account, role)?;
        Ok(())
    }

    pub fn revoke_role(
        env: Env,
        admin: Address,
        account: Address,
        role: Role,
    ) -> Result<(), GovernorError> {
        authorization::revoke_role(&env, &admin, &account, role)?;
        Ok(())
    }

    pub fn has_role(env: Env, account: Address, role: Role) -> bool {
        authorization::has_role(&env, &account, role)
    }

    // ── Settings ─────────────────────────────────────────────────────────────

    pub fn voting_delay(env: Env) -> Result<u64, GovernorError> {
        settings::voting_delay(&env)
    }

    pub fn voting_period(env: Env) -> Result<u64, GovernorError> {
        settings::voting_period(&env)
    }

    pub fn proposal_threshold(env: Env) -> Result<i128, GovernorError> {
        settings::proposal_threshold(&env)
    }

    pub fn set_voting_delay(env: Env, admin: Address, value: u64) -> Result<(), GovernorError> {
        admin.require_auth();
        access::require_role::<RoleTable>(&env, &admin, Role::Admin)?;
        settings::set_voting_delay(&env, value)
    }

    pub fn set_voting_period(env: Env, admin: Address, value: u64) -> Result<(), GovernorError> {
        admin.require_auth();
        access::require_role::<RoleTable>(&env, &admin, Role::Admin)?;
        settings::set_voting_period(&env, value)
    }

    pub fn set_proposal_threshold(
        env: Env,
        admin: Address,
        value: i128,
    ) -> Result<(), GovernorError> {
        admin.require_auth();
        access::require_role::<RoleTable>(&env, &admin, Role::Admin)?;
        settings::set_proposal_threshold(&env, value)
    }

    // ── Proposal Lifecycle ───────────────────────────────────────────────────

    /// Create a proposal. Requires the Proposer role.
    ///
    /// Voting opens `voting_delay` seconds from now and lasts `voting_period`
    /// seconds. `targets` and `values` must be non-empty and of equal length.
    /// The description is emitted, not stored.
    pub fn propose(
        env: Env,
        proposer: Address,
        targets: Vec<Address>,
        values: Vec<i128>,
        description: String,
    ) -> Result<U256, GovernorError> {
        proposer.require_auth();
        let config = storage::get_config(&env).ok_or(GovernorError::NotInitialized)?;
        access::require_role::<RoleTable>(&env, &proposer, Role::Proposer)?;

        if targets.is_empty() || targets.len() != values.len() {
            return Err(GovernorError::InvalidProposalLength);
        }

        let now = env.ledger().timestamp();
        let proposal_id = config
            .id_scheme
            .proposal_id(&env, &targets, &values, &description);
        let current = settings::get(&env)?;

        let created = proposal::create(&env, &proposal_id, &proposer, now, &current)?;
        storage::save_actions(
            &env,
            &proposal_id,
            &ProposalActions { targets: targets.clone(), values: values.clone() },
        );
        storage::set_proposal_count(&env, storage::get_proposal_count(&env) + 1);

        events::proposal_created(
            &env,
            &proposal_id,
            &proposer,
            &targets,
            &values,
            created.vote_start,
            proposal::deadline(&created),
            &description,
        );

        Ok(proposal_id)
    }

    /// Cancel a Pending proposal. Only the proposer or an admin may cancel.
    pub fn cancel(env: Env, caller: Address, proposal_id: U256) -> Result<U256, GovernorError> {
        caller.require_auth();
        let now = env.ledger().timestamp();

        proposal::validate_state(&env, &proposal_id, now, CANCELABLE)?;
        let record = proposal::get(&env, &proposal_id)?;
        access::require_proposer_or::<RoleTable>(&env, &caller, &record.proposer, &[Role::Admin])?;

        proposal::mark_canceled(&env, &proposal_id, record);
        events::proposal_canceled(&env, &proposal_id);

        Ok(proposal_id)
    }

    /// Mark a proposal executed once its voting window has closed.
    ///
    /// Only the proposer, an admin or an executor may execute.
    pub fn execute(env: Env, caller: Address, proposal_id: U256) -> Result<U256, GovernorError> {
        caller.require_auth();
        let now = env.ledger().timestamp();

        proposal::check_state(&env, &proposal_id, now, EXECUTABLE).map_err(|mismatch| {
            match mismatch.current {
                None => GovernorError::NonexistentProposal,
                Some(state) if state.is_terminal() => GovernorError::ProposalAlreadyFinalized,
                Some(_) => GovernorError::ProposalDeadlineNotReached,
            }
        })?;
        let record = proposal::get(&env, &proposal_id)?;
        access::require_proposer_or::<RoleTable>(
            &env,
            &caller,
            &record.proposer,
            &[Role::Admin, Role::Executor],
        )?;

        proposal::mark_executed(&env, &proposal_id, record);
        events::proposal_executed(&env, &proposal_id);

        Ok(proposal_id)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast `weight` votes for `option` (0 = option A, 1 = option B).
    ///
    /// Open to any account while the proposal is Active. Repeat votes add up.
    pub fn cast_vote(
        env: Env,
        voter: Address,
        proposal_id: U256,
        option: u32,
        weight: i128,
    ) -> Result<i128, GovernorError> {
        let reason = String::from_str(&env, "");
        cast(&env, &voter, &proposal_id, option, weight, &reason)
    }

    pub fn cast_vote_with_reason(
        env: Env,
        voter: Address,
        proposal_id: U256,
        option: u32,
        weight: i128,
        reason: String,
    ) -> Result<i128, GovernorError> {
        cast(&env, &voter, &proposal_id, option, weight, &reason)
    }

    // ── Query Functions ──────────────────────────────────────────────────────

    pub fn state(env: Env, proposal_id: U256) -> Result<ProposalState, GovernorError> {
        proposal::state(&env, &proposal_id, env.ledger().timestamp())
    }

    /// Timepoint at which voting opens
    pub fn proposal_snapshot(env: Env, proposal_id: U256) -> Result<u64, GovernorError> {
        Ok(proposal::get(&env, &proposal_id)?.vote_start)
    }

    /// Last timepoint at which votes are accepted
    pub fn proposal_deadline(env: Env, proposal_id: U256) -> Result<u64, GovernorError> {
        Ok(proposal::deadline(&proposal::get(&env, &proposal_id)?))
    }

    pub fn proposal_proposer(env: Env, proposal_id: U256) -> Result<Address, GovernorError> {
        Ok(proposal::get(&env, &proposal_id)?.proposer)
    }

    /// `(targets, values)` the proposal was created with
    pub fn proposal_actions(
        env: Env,
        proposal_id: U256,
    ) -> Result<(Vec<Address>, Vec<i128>), GovernorError> {
        let actions =
            storage::get_actions(&env, &proposal_id).ok_or(GovernorError::NonexistentProposal)?;
        Ok((actions.targets, actions.values))
    }

    /// `(option_a, option_b, total)`; zeros if nothing was cast
    pub fn get_proposal_votes(env: Env, proposal_id: U256) -> (i128, i128, i128) {
        votes::proposal_votes(&env, &proposal_id)
    }

    pub fn get_voter_weight(env: Env, proposal_id: U256, voter: Address) -> i128 {
        votes::voter_weight(&env, &proposal_id, &voter)
    }

    /// Content id of a proposal, as assigned under `IdScheme::Hashed`
    pub fn hash_proposal(
        env: Env,
        targets: Vec<Address>,
        values: Vec<i128>,
        description_hash: BytesN<32>,
    ) -> U256 {
        ids::hash_proposal(&env, &targets, &values, &description_hash)
    }

    pub fn description_hash(env: Env, description: String) -> BytesN<32> {
        ids::description_hash(&env, &description)
    }

    pub fn id_scheme(env: Env) -> Result<IdScheme, GovernorError> {
        storage::get_config(&env)
            .map(|config| config.id_scheme)
            .ok_or(GovernorError::NotInitialized)
    }

    pub fn proposal_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }
}

fn cast(
    env: &Env,
    voter: &Address,
    proposal_id: &U256,
    option: u32,
    weight: i128,
    reason: &String,
) -> Result<i128, GovernorError> {
    voter.require_auth();
    let now = env.ledger().timestamp();

    proposal::validate_state(env, proposal_id, now, VOTABLE)?;
    let vote_type = votes::count_vote(env, proposal_id, voter, option, weight)?;

    events::vote_cast(env, voter, proposal_id, vote_type, weight, reason);

    Ok(weight)
}
