use authorization::AuthError;
use soroban_sdk::contracterror;

/// Errors returned by the governor contract
///
/// Codes are stable; off-chain clients match on them.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GovernorError {
    // ===== Setup (1-9) =====
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidSetting = 3,

    // ===== Authorization (10-19) =====
    /// Caller lacks the role the operation requires
    MissingRole = 10,
    /// Cancel or execute by someone who is neither the proposer nor privileged
    UnauthorizedProposer = 11,

    // ===== Proposal lifecycle (20-39) =====
    /// Targets and values are empty or differ in length
    InvalidProposalLength = 20,
    /// Current state is not in the set the operation accepts
    UnexpectedProposalState = 21,
    NonexistentProposal = 22,
    /// Computed schedule does not fit its fixed-width storage
    SafeCastOverflow = 23,
    ProposalDeadlineNotReached = 24,
    ProposalAlreadyFinalized = 25,

    // ===== Voting (40-49) =====
    InvalidVoteType = 40,
    VoteOverflow = 41,
}

impl From<AuthError> for GovernorError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized | AuthError::RoleNotFound => GovernorError::MissingRole,
        }
    }
}
