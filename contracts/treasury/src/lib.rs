#![no_std]
use authorization::{AuthError, Role};
use shared::constants::{PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_THRESHOLD};
use shared::ProposalState;
use soroban_sdk::{
    contract, contractclient, contracterror, contractimpl, contracttype, log, token::TokenClient,
    Address, Env, Symbol, Vec, U256,
};

// ============================================================================
// Error Handling
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TreasuryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    Paused = 4,
    InvalidAmount = 5,
    ProposalNotExecuted = 6,
    AlreadySettled = 7,
    InsufficientFunds = 8,
    Overflow = 9,
    NotFound = 10,
}

impl From<AuthError> for TreasuryError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => TreasuryError::Unauthorized,
            AuthError::RoleNotFound => TreasuryError::NotFound,
        }
    }
}

// ============================================================================
// Governor Interface
// ============================================================================

/// The subset of the governor the treasury reads from
#[contractclient(name = "GovernorClient")]
pub trait GovernorInterface {
    fn state(env: Env, proposal_id: U256) -> ProposalState;
    fn get_proposal_votes(env: Env, proposal_id: U256) -> (i128, i128, i128);
    fn proposal_actions(env: Env, proposal_id: U256) -> (Vec<Address>, Vec<i128>);
}

// ============================================================================
// Type Definitions
// ============================================================================

/// Treasury configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryConfig {
    pub admin: Address,
    pub governor: Address,
    pub token: Address,
}

/// What happened to the funds of a settled proposal
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SettlementOutcome {
    /// Option A won; each target received its value
    Distributed = 0,
    /// Option A did not win; the total value was burned from the treasury
    Burned = 1,
}

/// Settlement record, one per executed proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub proposal_id: U256,
    pub outcome: SettlementOutcome,
    pub targets: Vec<Address>,
    pub values: Vec<i128>,
    /// Sum of `values`
    pub amount: i128,
    pub option_a_votes: i128,
    pub option_b_votes: i128,
    pub settled_by: Address,
    pub settled_at: u64,
}

/// Treasury statistics
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TreasuryStats {
    pub total_deposited: i128,
    pub total_distributed: i128,
    pub total_burned: i128,
    pub settled_proposals: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Paused,
    Stats,
    Settlement(U256),
}

/// ============================================================================
/// Treasury Contract
/// ============================================================================

#[contract]
pub struct TreasuryContract;

// ============================================================================
// Helper Functions
// ============================================================================

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}

fn get_config(env: &Env) -> Result<TreasuryConfig, TreasuryError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(TreasuryError::NotInitialized)
}

fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

fn get_stats(env: &Env) -> TreasuryStats {
    env.storage().instance().get(&DataKey::Stats).unwrap_or_default()
}

fn set_stats(env: &Env, stats: &TreasuryStats) {
    env.storage().instance().set(&DataKey::Stats, stats);
    bump_instance(env);
}

fn get_settlement(env: &Env, proposal_id: &U256) -> Option<Settlement> {
    env.storage()
        .persistent()
        .get(&DataKey::Settlement(proposal_id.clone()))
}

fn save_settlement(env: &Env, settlement: &Settlement) {
    let key = DataKey::Settlement(settlement.proposal_id.clone());
    env.storage().persistent().set(&key, settlement);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}

fn token_balance(env: &Env, config: &TreasuryConfig) -> i128 {
    TokenClient::new(env, &config.token).balance(&env.current_contract_address())
}

/// Validate positive amount
fn validate_amount(amount: i128) -> Result<(), TreasuryError> {
    if amount <= 0 {
        return Err(TreasuryError::InvalidAmount);
    }
    Ok(())
}

/// Sum of a proposal's values; every value must be non-negative
fn total_value(values: &Vec<i128>) -> Result<i128, TreasuryError> {
    values.iter().try_fold(0i128, |total, value| {
        if value < 0 {
            return Err(TreasuryError::InvalidAmount);
        }
        total.checked_add(value).ok_or(TreasuryError::Overflow)
    })
}

fn require_not_paused(env: &Env) -> Result<(), TreasuryError> {
    if is_paused(env) {
        return Err(TreasuryError::Paused);
    }
    Ok(())
}

/// Option A must be strictly ahead for funds to be distributed
fn outcome_of(option_a_votes: i128, option_b_votes: i128) -> SettlementOutcome {
    if option_a_votes > option_b_votes {
        SettlementOutcome::Distributed
    } else {
        SettlementOutcome::Burned
    }
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contractimpl]
impl TreasuryContract {
    /// Initialize the Treasury contract
    /// Only called once at deployment
    pub fn initialize(
        env: Env,
        admin: Address,
        governor: Address,
        token: Address,
    ) -> Result<(), TreasuryError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(TreasuryError::AlreadyInitialized);
        }

        admin.require_auth();
        authorization::initialize_admin(&env, &admin);

        let config = TreasuryConfig { admin: admin.clone(), governor, token };
        env.storage().instance().set(&DataKey::Config, &config);
        set_stats(&env, &TreasuryStats::default());

        env.events().publish((Symbol::new(&env, "treasury_initialized"), ()), admin);

        Ok(())
    }

    /// Pull `amount` governance tokens from `from` into the treasury
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, TreasuryError> {
        from.require_auth();
        require_not_paused(&env)?;
        validate_amount(amount)?;

        let config = get_config(&env)?;
        TokenClient::new(&env, &config.token).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        let mut stats = get_stats(&env);
        stats.total_deposited = stats
            .total_deposited
            .checked_add(amount)
            .ok_or(TreasuryError::Overflow)?;
        set_stats(&env, &stats);

        let balance = token_balance(&env, &config);
        env.events().publish(
            (Symbol::new(&env, "deposited"), from),
            (amount, balance, stats.total_deposited),
        );

        Ok(balance)
    }

    /// Settle an executed proposal.
    ///
    /// The payouts are the proposal's own `(targets, values)` as read back
    /// from the governor. If option A finished strictly ahead, `values[i]` is
    /// transferred to `targets[i]`; otherwise the total is burned from the
    /// treasury. Each proposal settles at most once. The caller needs Admin or
    /// Executor.
    pub fn settle(
        env: Env,
        caller: Address,
        proposal_id: U256,
    ) -> Result<Settlement, TreasuryError> {
        caller.require_auth();
        authorization::require_any_role(&env, &caller, &[Role::Admin, Role::Executor])?;
        require_not_paused(&env)?;

        let config = get_config(&env)?;

        if get_settlement(&env, &proposal_id).is_some() {
            return Err(TreasuryError::AlreadySettled);
        }

        let governor = GovernorClient::new(&env, &config.governor);
        let state = governor
            .try_state(&proposal_id)
            .ok()
            .and_then(|converted| converted.ok())
            .ok_or(TreasuryError::NotFound)?;
        if state != ProposalState::Executed {
            log!(&env, "settle rejected: proposal not executed", proposal_id.clone(), state);
            return Err(TreasuryError::ProposalNotExecuted);
        }

        let (targets, values) = governor.proposal_actions(&proposal_id);
        let amount = total_value(&values)?;

        let balance = token_balance(&env, &config);
        if amount > balance {
            log!(&env, "settle rejected: insufficient funds", amount, balance);
            return Err(TreasuryError::InsufficientFunds);
        }

        let (option_a_votes, option_b_votes, _) = governor.get_proposal_votes(&proposal_id);
        let outcome = outcome_of(option_a_votes, option_b_votes);

        let token = TokenClient::new(&env, &config.token);
        let treasury = env.current_contract_address();
        let mut stats = get_stats(&env);
        match outcome {
            SettlementOutcome::Distributed => {
                for (target, value) in targets.iter().zip(values.iter()) {
                    if value == 0 {
                        continue;
                    }
                    token.transfer(&treasury, &target, &value);
                    env.events().publish(
                        (Symbol::new(&env, "distributed"), target),
                        (proposal_id.clone(), value),
                    );
                }
                stats.total_distributed = stats
                    .total_distributed
                    .checked_add(amount)
                    .ok_or(TreasuryError::Overflow)?;
            }
            SettlementOutcome::Burned => {
                if amount > 0 {
                    token.burn(&treasury, &amount);
                }
                env.events()
                    .publish((Symbol::new(&env, "burned"), proposal_id.clone()), amount);
                stats.total_burned = stats
                    .total_burned
                    .checked_add(amount)
                    .ok_or(TreasuryError::Overflow)?;
            }
        }
        stats.settled_proposals += 1;
        set_stats(&env, &stats);

        let settlement = Settlement {
            proposal_id,
            outcome,
            targets,
            values,
            amount,
            option_a_votes,
            option_b_votes,
            settled_by: caller,
            settled_at: env.ledger().timestamp(),
        };
        save_settlement(&env, &settlement);

        Ok(settlement)
    }

    /// Get current treasury balance
    pub fn get_balance(env: Env) -> Result<i128, TreasuryError> {
        let config = get_config(&env)?;
        Ok(token_balance(&env, &config))
    }

    /// Get the settlement record of a proposal
    pub fn get_settlement(env: Env, proposal_id: U256) -> Result<Settlement, TreasuryError> {
        get_settlement(&env, &proposal_id).ok_or(TreasuryError::NotFound)
    }

    /// Get treasury statistics
    pub fn get_stats(env: Env) -> TreasuryStats {
        get_stats(&env)
    }

    pub fn get_config(env: Env) -> Result<TreasuryConfig, TreasuryError> {
        get_config(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        is_paused(&env)
    }

    /// Pause/unpause deposits and settlements (admin only)
    pub fn set_pause(env: Env, admin: Address, paused: bool) -> Result<(), TreasuryError> {
        admin.require_auth();
        authorization::require_admin(&env, &admin)?;
        set_paused(&env, paused);

        env.events().publish((Symbol::new(&env, "pause_state_changed"), ()), paused);

        Ok(())
    }

    pub fn grant_role(
        env: Env,
        admin: Address,
        account: Address,
        role: Role,
    ) -> Result<(), TreasuryError> {
        authorization::grant_role(&env, &admin, &account, role)?;
        Ok(())
    }

    pub fn revoke_role(
        env: Env,
        admin: Address,
        account: Address,
        role: Role,
    ) -> Result<(), TreasuryError> {
        authorization::revoke_role(&env, &admin, &account, role)?;
        Ok(())
    }

    pub fn has_role(env: Env, account: Address, role: Role) -> bool {
        authorization::has_role(&env, &account, role)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_requires_strict_lead() {
        assert_eq!(outcome_of(100, 0), SettlementOutcome::Distributed);
        assert_eq!(outcome_of(1, 0), SettlementOutcome::Distributed);
        assert_eq!(outcome_of(50, 50), SettlementOutcome::Burned);
        assert_eq!(outcome_of(0, 0), SettlementOutcome::Burned);
        assert_eq!(outcome_of(0, 1), SettlementOutcome::Burned);
    }

    #[test]
    fn test_total_value() {
        let env = Env::default();
        assert_eq!(total_value(&soroban_sdk::vec![&env, 0i128]), Ok(0));
        assert_eq!(total_value(&soroban_sdk::vec![&env, 400i128, 600]), Ok(1_000));
        assert_eq!(
            total_value(&soroban_sdk::vec![&env, 5i128, -1]),
            Err(TreasuryError::InvalidAmount)
        );
        assert_eq!(
            total_value(&soroban_sdk::vec![&env, i128::MAX, 1]),
            Err(TreasuryError::Overflow)
        );
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(1), Ok(()));
        assert_eq!(validate_amount(0), Err(TreasuryError::InvalidAmount));
        assert_eq!(validate_amount(-5), Err(TreasuryError::InvalidAmount));
    }
}
