//! Shared governance data types

use soroban_sdk::contracttype;

/// Lifecycle state of a proposal.
///
/// Never stored: it is recomputed from the proposal record and the ledger
/// timestamp on every read. The discriminant is the bit index used by the
/// state bitmap (see [`crate::state`]).
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProposalState {
    /// Created, voting has not opened yet
    Pending = 0,
    /// Voting window is open (inclusive of the deadline)
    Active = 1,
    /// Canceled by the proposer or an admin. Terminal.
    Canceled = 2,
    /// Executed after the deadline. Terminal.
    Executed = 3,
    /// Voting window closed, neither executed nor canceled yet
    Expired = 4,
}

impl ProposalState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, ProposalState::Canceled | ProposalState::Executed)
    }
}

/// The two vote buckets of a binary governance choice
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VoteType {
    OptionA = 0,
    OptionB = 1,
}

impl VoteType {
    /// Parse the raw option number accepted by the public entry points.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(VoteType::OptionA),
            1 => Some(VoteType::OptionB),
            _ => None,
        }
    }
}
