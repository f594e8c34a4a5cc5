#![no_std]

mod access;
mod contract;
mod errors;
mod events;
mod ids;
mod proposal;
mod settings;
mod storage;
mod types;
mod votes;

pub use authorization::Role;
pub use contract::{GovernorContract, GovernorContractClient};
pub use errors::GovernorError;
pub use shared::{ProposalState, VoteType};
pub use types::{
    GovernorConfig, GovernorSettings, IdScheme, ProposalActions, ProposalCore, ProposalVotes,
};
