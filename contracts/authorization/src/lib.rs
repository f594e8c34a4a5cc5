//! Authorization Module for the governance contracts
//!
//! A small role-based access control (RBAC) registry. Each contract that links
//! this library keeps its own role table in its own persistent storage and
//! consumes it as a yes/no predicate: `has_role(account, role)`.
//!
//! ## Features
//! - Admin / Proposer / Executor capabilities
//! - An account may hold several roles at once
//! - Admin-gated grant and revoke with role-change events

#![no_std]

use shared::constants::{PERSISTENT_TTL_LEDGERS, PERSISTENT_TTL_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env, Symbol};

/// Capabilities recognised by the governance contracts
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Role {
    /// Manages roles and settings; may cancel and execute any proposal
    Admin = 0,
    /// May create proposals
    Proposer = 1,
    /// May execute proposals and settle them in the treasury
    Executor = 2,
}

/// Storage keys for role assignments
#[contracttype]
#[derive(Clone)]
pub enum RoleKey {
    /// Address that bootstrapped the role table
    ContractAdmin,
    /// (role, account) -> true while the account holds the role
    Member(Role, Address),
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    Unauthorized,
    RoleNotFound,
}

fn bump(env: &Env, key: &RoleKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_LEDGERS);
}

fn write_member(env: &Env, role: Role, account: &Address, member: bool) {
    let key = RoleKey::Member(role, account.clone());
    if member {
        env.storage().persistent().set(&key, &true);
        bump(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

/// Initialize the role table with its first admin (call once during contract
/// initialization)
pub fn initialize_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&RoleKey::ContractAdmin, admin);
    bump(env, &RoleKey::ContractAdmin);
    write_member(env, Role::Admin, admin, true);
}

/// The address that bootstrapped the role table, if any
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&RoleKey::ContractAdmin)
}

/// Check if an address holds a specific role
pub fn has_role(env: &Env, account: &Address, role: Role) -> bool {
    env.storage()
        .persistent()
        .get(&RoleKey::Member(role, account.clone()))
        .unwrap_or(false)
}

/// Check if an address holds any of the specified roles
pub fn has_any_role(env: &Env, account: &Address, roles: &[Role]) -> bool {
    roles.iter().any(|role| has_role(env, account, *role))
}

/// Require that the account holds a specific role
pub fn require_role(env: &Env, account: &Address, role: Role) -> Result<(), AuthError> {
    if has_role(env, account, role) {
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}

/// Require admin privileges
pub fn require_admin(env: &Env, account: &Address) -> Result<(), AuthError> {
    require_role(env, account, Role::Admin)
}

/// Require that the account holds one of the specified roles
pub fn require_any_role(env: &Env, account: &Address, roles: &[Role]) -> Result<(), AuthError> {
    if has_any_role(env, account, roles) {
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}

/// Grant a role to an address (admin only)
pub fn grant_role(
    env: &Env,
    caller: &Address,
    target: &Address,
    role: Role,
) -> Result<(), AuthError> {
    caller.require_auth();
    require_admin(env, caller)?;

    write_member(env, role, target, true);

    env.events().publish(
        (Symbol::new(env, "role_granted"), target.clone()),
        (role, caller.clone()),
    );

    Ok(())
}

/// Revoke a role from an address (admin only)
pub fn revoke_role(
    env: &Env,
    caller: &Address,
    target: &Address,
    role: Role,
) -> Result<(), AuthError> {
    caller.require_auth();
    require_admin(env, caller)?;

    // An admin cannot lock the table by dropping their own admin role
    if caller == target && role == Role::Admin {
        return Err(AuthError::Unauthorized);
    }
    if !has_role(env, target, role) {
        return Err(AuthError::RoleNotFound);
    }

    write_member(env, role, target, false);

    env.events().publish(
        (Symbol::new(env, "role_revoked"), target.clone()),
        (role, caller.clone()),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{contract, testutils::Address as _};

    #[contract]
    pub struct RoleHost;

    fn setup() -> (Env, Address, Address) {
        let env = Env::default();
        env.mock_all_auths_allowing_non_root_auth();
        let host = env.register(RoleHost, ());
        let admin = Address::generate(&env);
        (env, host, admin)
    }

    #[test]
    fn test_admin_bootstrap() {
        let (env, host, admin) = setup();
        env.as_contract(&host, || {
            initialize_admin(&env, &admin);
            assert_eq!(get_admin(&env), Some(admin.clone()));
            assert!(has_role(&env, &admin, Role::Admin));
            assert!(!has_role(&env, &admin, Role::Proposer));
        });
    }

    #[test]
    fn test_account_holds_multiple_roles() {
        let (env, host, admin) = setup();
        let member = Address::generate(&env);
        env.as_contract(&host, || initialize_admin(&env, &admin));

        // One authorized call per frame
        env.as_contract(&host, || {
            assert_eq!(grant_role(&env, &admin, &member, Role::Proposer), Ok(()));
        });
        env.as_contract(&host, || {
            assert_eq!(grant_role(&env, &admin, &member, Role::Executor), Ok(()));
        });

        env.as_contract(&host, || {
            assert!(has_role(&env, &member, Role::Proposer));
            assert!(has_role(&env, &member, Role::Executor));
            assert!(has_any_role(&env, &member, &[Role::Admin, Role::Executor]));
            assert_eq!(require_admin(&env, &member), Err(AuthError::Unauthorized));
        });
    }

    #[test]
    fn test_non_admin_cannot_grant() {
        let (env, host, admin) = setup();
        let outsider = Address::generate(&env);
        env.as_contract(&host, || initialize_admin(&env, &admin));

        env.as_contract(&host, || {
            assert_eq!(
                grant_role(&env, &outsider, &outsider, Role::Proposer),
                Err(AuthError::Unauthorized)
            );
            assert!(!has_role(&env, &outsider, Role::Proposer));
        });
    }

    #[test]
    fn test_revoke_role() {
        let (env, host, admin) = setup();
        let member = Address::generate(&env);
        env.as_contract(&host, || initialize_admin(&env, &admin));
        env.as_contract(&host, || {
            assert_eq!(grant_role(&env, &admin, &member, Role::Proposer), Ok(()));
        });

        env.as_contract(&host, || {
            assert_eq!(revoke_role(&env, &admin, &member, Role::Proposer), Ok(()));
        });
        env.as_contract(&host, || {
            assert!(!has_role(&env, &member, Role::Proposer));
        });

        env.as_contract(&host, || {
            assert_eq!(
                revoke_role(&env, &admin, &member, Role::Proposer),
                Err(AuthError::RoleNotFound)
            );
        });
        env.as_contract(&host, || {
            assert_eq!(
                revoke_role(&env, &admin, &admin, Role::Admin),
                Err(AuthError::Unauthorized)
            );
        });
        env.as_contract(&host, || {
            assert!(has_role(&env, &admin, Role::Admin));
        });
    }
}
