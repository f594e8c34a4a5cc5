//! State bitmap encoding
//!
//! A set of acceptable proposal states is a `u32` with bit *i* set when the
//! state with ordinal *i* is permitted. The empty set (`0`) means the
//! proposal must not exist yet.

use crate::types::ProposalState;

/// Every state, in ordinal order
pub const ALL_STATES: [ProposalState; 5] = [
    ProposalState::Pending,
    ProposalState::Active,
    ProposalState::Canceled,
    ProposalState::Executed,
    ProposalState::Expired,
];

/// Bitmap with only `state` set
pub const fn encode_state(state: ProposalState) -> u32 {
    1u32 << (state as u32)
}

/// Bitmap with every state in `states` set
pub const fn encode_states(states: &[ProposalState]) -> u32 {
    let mut bitmap = 0u32;
    let mut i = 0;
    while i < states.len() {
        bitmap |= encode_state(states[i]);
        i += 1;
    }
    bitmap
}

/// Whether `bitmap` permits `state`
pub const fn allows(bitmap: u32, state: ProposalState) -> bool {
    bitmap & encode_state(state) != 0
}

/// A failed state check: what the proposal was, and what was acceptable.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StateMismatch {
    /// `None` when the proposal does not exist
    pub current: Option<ProposalState>,
    pub allowed: u32,
}

/// Match the current state of a proposal against a bitmap of allowed states.
///
/// `current` is `None` for a proposal that was never created. An empty bitmap
/// accepts only that case.
pub fn expect_state(current: Option<ProposalState>, allowed: u32) -> Result<(), StateMismatch> {
    let ok = match current {
        None => allowed == 0,
        Some(state) => allows(allowed, state),
    };
    if ok {
        Ok(())
    } else {
        Err(StateMismatch { current, allowed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_state_uses_ordinal_bits() {
        assert_eq!(encode_state(ProposalState::Pending), 0b00001);
        assert_eq!(encode_state(ProposalState::Active), 0b00010);
        assert_eq!(encode_state(ProposalState::Canceled), 0b00100);
        assert_eq!(encode_state(ProposalState::Executed), 0b01000);
        assert_eq!(encode_state(ProposalState::Expired), 0b10000);
        assert_eq!(encode_states(&ALL_STATES), 0b11111);
    }

    #[test]
    fn test_expect_state_accepts_members_only() {
        let open = encode_states(&[ProposalState::Pending, ProposalState::Active]);

        assert!(expect_state(Some(ProposalState::Pending), open).is_ok());
        assert!(expect_state(Some(ProposalState::Active), open).is_ok());

        let err = expect_state(Some(ProposalState::Executed), open).unwrap_err();
        assert_eq!(err.current, Some(ProposalState::Executed));
        assert_eq!(err.allowed, open);
    }

    #[test]
    fn test_empty_bitmap_means_absent() {
        assert!(expect_state(None, 0).is_ok());
        for state in ALL_STATES {
            assert_eq!(
                expect_state(Some(state), 0),
                Err(StateMismatch { current: Some(state), allowed: 0 })
            );
        }
    }

    #[test]
    fn test_absent_proposal_fails_non_empty_bitmap() {
        let active = encode_state(ProposalState::Active);
        assert_eq!(
            expect_state(None, active),
            Err(StateMismatch { current: None, allowed: active })
        );
    }
}
