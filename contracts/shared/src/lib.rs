#![no_std]
//! # Shared Governance Library
//!
//! Types, constants and pure helpers shared by the governor and treasury
//! contracts.
//!
//! ## Modules
//!
//! - `types` - `ProposalState` and `VoteType`
//! - `state` - state-bitmap encoding and the state-matching predicate
//! - `constants` - default governance parameters and storage lifetimes
//! - `validation` - fixed-width schedule casts
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::state::{encode_state, expect_state};
//! use shared::types::ProposalState;
//! use shared::validation::schedule;
//! ```

pub mod constants;
pub mod state;
pub mod types;
pub mod validation;

pub use state::{encode_state, encode_states, expect_state, StateMismatch};
pub use types::{ProposalState, VoteType};
pub use validation::{schedule, to_duration, to_timepoint, vote_end};
