use soroban_sdk::{contracttype, Address, Vec, U256};

/// How proposal ids are derived
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum IdScheme {
    /// sha256 over (targets, values, description hash)
    Hashed = 0,
    /// 1, 2, 3, ...
    Sequential = 1,
}

/// Written once by `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernorConfig {
    pub admin: Address,
    pub id_scheme: IdScheme,
}

/// Governance parameters, changed only through the admin-gated setters
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernorSettings {
    /// Seconds between proposal creation and the opening of the vote
    pub voting_delay: u64,
    /// Length of the voting window in seconds
    pub voting_period: u64,
    /// Stored and settable but not enforced by `propose`: voting weight is
    /// supplied by the caller, so there is no balance to compare it against.
    pub proposal_threshold: i128,
}

/// Stored proposal record. Everything but the two flags is immutable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCore {
    pub proposer: Address,
    /// Timepoint at which voting opens (fits in 48 bits)
    pub vote_start: u64,
    pub vote_duration: u32,
    pub executed: bool,
    pub canceled: bool,
}

/// What a proposal asks for: `values[i]` goes to `targets[i]` if it passes.
/// Written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalActions {
    pub targets: Vec<Address>,
    pub values: Vec<i128>,
}

/// Running tally for one proposal
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProposalVotes {
    pub option_a_votes: i128,
    pub option_b_votes: i128,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Settings,
    ProposalCount,
    Proposal(U256),
    Actions(U256),
    Votes(U256),
    // (proposal_id, voter) -> cumulative weight
    VoterWeight(U256, Address),
}
