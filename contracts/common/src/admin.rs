//! Stored-administrator singleton.
//!
//! The administrator is an explicit `Address` held in instance storage and
//! compared against the caller on every privileged call — no implicit
//! host-level authority. Handover is two-step (propose, then accept from the
//! proposed address) so a typoed address can never brick the admin role.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");

/// Store the administrator identity. Called once from `initialize`.
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

/// The current administrator, if the contract has been initialised.
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

/// True iff `caller` is the stored administrator.
pub fn is_admin(env: &Env, caller: &Address) -> bool {
    match get_admin(env) {
        Some(admin) => *caller == admin,
        None => false,
    }
}

/// Record a proposed new administrator. Does not check authorisation;
/// callers must verify the proposer first.
pub fn set_pending_admin(env: &Env, proposed: &Address) {
    env.storage().instance().set(&PENDING_ADMIN, proposed);
}

/// The proposed new administrator, if a handover is in flight.
pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_ADMIN)
}

/// Drop any in-flight handover proposal.
pub fn clear_pending_admin(env: &Env) {
    env.storage().instance().remove(&PENDING_ADMIN);
}

/// Complete a handover: `new_admin` must match the pending proposal.
/// Returns `false` (and changes nothing) when it does not.
pub fn accept_pending_admin(env: &Env, new_admin: &Address) -> bool {
    match get_pending_admin(env) {
        Some(pending) if pending == *new_admin => {
            set_admin(env, new_admin);
            clear_pending_admin(env);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use soroban_sdk::{contract, testutils::Address as _, Address, Env};

    use super::*;

    #[contract]
    struct Host;

    fn setup() -> (Env, Address) {
        let env = Env::default();
        let contract_id = env.register(Host, ());
        (env, contract_id)
    }

    #[test]
    fn admin_round_trip() {
        let (env, contract_id) = setup();
        let admin = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(get_admin(&env), None);
            set_admin(&env, &admin);
            assert_eq!(get_admin(&env), Some(admin.clone()));
            assert!(is_admin(&env, &admin));
            assert!(!is_admin(&env, &Address::generate(&env)));
        });
    }

    #[test]
    fn handover_requires_matching_acceptor() {
        let (env, contract_id) = setup();
        let admin = Address::generate(&env);
        let proposed = Address::generate(&env);
        let intruder = Address::generate(&env);

        env.as_contract(&contract_id, || {
            set_admin(&env, &admin);
            set_pending_admin(&env, &proposed);

            // Wrong acceptor: nothing changes.
            assert!(!accept_pending_admin(&env, &intruder));
            assert_eq!(get_admin(&env), Some(admin.clone()));
            assert_eq!(get_pending_admin(&env), Some(proposed.clone()));

            // Right acceptor: admin flips and the proposal is consumed.
            assert!(accept_pending_admin(&env, &proposed));
            assert_eq!(get_admin(&env), Some(proposed.clone()));
            assert_eq!(get_pending_admin(&env), None);
        });
    }

    #[test]
    fn cancel_clears_proposal() {
        let (env, contract_id) = setup();
        let admin = Address::generate(&env);
        let proposed = Address::generate(&env);

        env.as_contract(&contract_id, || {
            set_admin(&env, &admin);
            set_pending_admin(&env, &proposed);
            clear_pending_admin(&env);
            assert_eq!(get_pending_admin(&env), None);
            assert!(!accept_pending_admin(&env, &proposed));
        });
    }
}
