//! Staker ledger storage.
//!
//! Positions are keyed by `(pool_id, staker)` and persist forever: a full
//! withdrawal zeroes the record rather than removing it. An absent entry
//! reads back as the zeroed position, so callers never branch on existence.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const POSITION: Symbol = symbol_short!("POS");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// One staker's record in one pool.
///
/// `accrual_start_step == 0` is the sentinel for "never staked / just
/// withdrawn": reward settlement refuses to run against it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerPosition {
    pub amount: i128,
    pub accrual_start_step: u32,
    pub deposit_timestamp: u64,
}

impl StakerPosition {
    /// The zeroed, inactive record.
    pub fn inactive() -> Self {
        StakerPosition {
            amount: 0,
            accrual_start_step: 0,
            deposit_timestamp: 0,
        }
    }
}

fn position_key(pool_id: u32, staker: &Address) -> (Symbol, u32, Address) {
    (POSITION, pool_id, staker.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, u32, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Fetch a staker's position, zeroed if they have never deposited.
pub fn get_position(env: &Env, pool_id: u32, staker: &Address) -> StakerPosition {
    let key = position_key(pool_id, staker);
    match env.storage().persistent().get(&key) {
        Some(position) => {
            extend_ttl(env, &key);
            position
        }
        None => StakerPosition::inactive(),
    }
}

pub fn set_position(env: &Env, pool_id: u32, staker: &Address, position: &StakerPosition) {
    let key = position_key(pool_id, staker);
    env.storage().persistent().set(&key, position);
    extend_ttl(env, &key);
}
