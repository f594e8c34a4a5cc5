//! Capability checks consumed by the facade.
//!
//! The governor only asks "does this account hold this capability?". The
//! default answer comes from the role table in `authorization`.

use authorization::Role;
use soroban_sdk::{Address, Env};

use crate::errors::GovernorError;

pub trait Capabilities {
    fn has_capability(env: &Env, account: &Address, role: Role) -> bool;
}

/// Role table kept in this contract's storage
pub struct RoleTable;

impl Capabilities for RoleTable {
    fn has_capability(env: &Env, account: &Address, role: Role) -> bool {
        authorization::has_role(env, account, role)
    }
}

/// Require `role`, failing with `MissingRole`.
pub fn require_role<C: Capabilities>(
    env: &Env,
    account: &Address,
    role: Role,
) -> Result<(), GovernorError> {
    if C::has_capability(env, account, role) {
        Ok(())
    } else {
        Err(GovernorError::MissingRole)
    }
}

/// Require that `caller` created the proposal or holds one of `roles`,
/// failing with `UnauthorizedProposer`.
pub fn require_proposer_or<C: Capabilities>(
    env: &Env,
    caller: &Address,
    proposer: &Address,
    roles: &[Role],
) -> Result<(), GovernorError> {
    if caller == proposer || roles.iter().any(|role| C::has_capability(env, caller, *role)) {
        Ok(())
    } else {
        Err(GovernorError::UnauthorizedProposer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    struct AdminsOnly;

    impl Capabilities for AdminsOnly {
        fn has_capability(_env: &Env, _account: &Address, role: Role) -> bool {
            role == Role::Admin
        }
    }

    struct Nobody;

    impl Capabilities for Nobody {
        fn has_capability(_env: &Env, _account: &Address, _role: Role) -> bool {
            false
        }
    }

    #[test]
    fn test_proposer_always_passes() {
        let env = Env::default();
        let proposer = Address::generate(&env);
        assert_eq!(
            require_proposer_or::<Nobody>(&env, &proposer, &proposer, &[Role::Admin]),
            Ok(())
        );
    }

    #[test]
    fn test_privileged_caller_passes() {
        let env = Env::default();
        let proposer = Address::generate(&env);
        let caller = Address::generate(&env);
        assert_eq!(
            require_proposer_or::<AdminsOnly>(&env, &caller, &proposer, &[Role::Admin]),
            Ok(())
        );
        assert_eq!(
            require_proposer_or::<AdminsOnly>(&env, &caller, &proposer, &[Role::Executor]),
            Err(GovernorError::UnauthorizedProposer)
        );
    }

    #[test]
    fn test_require_role() {
        let env = Env::default();
        let account = Address::generate(&env);
        assert_eq!(require_role::<AdminsOnly>(&env, &account, Role::Admin), Ok(()));
        assert_eq!(
            require_role::<Nobody>(&env, &account, Role::Proposer),
            Err(GovernorError::MissingRole)
        );
    }
}
