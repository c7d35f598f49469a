//! Pool registry storage.
//!
//! Pools are append-only: each gets a sequential `u32` index starting at 0
//! and is never deleted. The registry also owns the engine-wide
//! `total_multiplier`, the running sum every pool's weight is normalised
//! against.

use soroban_sdk::{contracttype, symbol_short, vec, Address, Env, Symbol, Vec};

// ── Storage keys ─────────────────────────────────────────────────────────────

const POOL: Symbol = symbol_short!("POOL");
const POOL_COUNT: Symbol = symbol_short!("POOL_CNT");
const TOTAL_MULT: Symbol = symbol_short!("TOT_MULT");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Types ────────────────────────────────────────────────────────────────────

/// One staking context: a single accepted stake token, a withdrawal
/// duration floor, and a reward weight relative to `total_multiplier`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    pub stake_token: Address,
    pub total_staked: i128,
    pub min_stake_duration: u64,
    pub multiplier: u64,
}

// ── Storage helpers ──────────────────────────────────────────────────────────

fn pool_key(pool_id: u32) -> (Symbol, u32) {
    (POOL, pool_id)
}

fn extend_ttl(env: &Env, key: &(Symbol, u32)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Number of pools ever created.
pub fn pool_count(env: &Env) -> u32 {
    env.storage().instance().get(&POOL_COUNT).unwrap_or(0)
}

/// Fetch a pool by index. `None` when the index is out of range.
pub fn get_pool(env: &Env, pool_id: u32) -> Option<Pool> {
    let key = pool_key(pool_id);
    let pool: Option<Pool> = env.storage().persistent().get(&key);
    if pool.is_some() {
        extend_ttl(env, &key);
    }
    pool
}

/// Overwrite a pool entry in place.
pub fn set_pool(env: &Env, pool_id: u32, pool: &Pool) {
    let key = pool_key(pool_id);
    env.storage().persistent().set(&key, pool);
    extend_ttl(env, &key);
}

/// Append a new pool, folding its weight into `total_multiplier`.
/// Returns the new pool's index.
pub fn append_pool(env: &Env, pool: &Pool) -> u32 {
    let pool_id = pool_count(env);
    set_pool(env, pool_id, pool);
    env.storage()
        .instance()
        .set(&POOL_COUNT, &(pool_id.saturating_add(1)));

    let total = total_multiplier(env).saturating_add(pool.multiplier);
    set_total_multiplier(env, total);

    pool_id
}

/// Ordered snapshot of every pool.
pub fn list_pools(env: &Env) -> Vec<Pool> {
    let mut pools = vec![env];
    for pool_id in 0..pool_count(env) {
        if let Some(pool) = get_pool(env, pool_id) {
            pools.push_back(pool);
        }
    }
    pools
}

/// The engine-wide sum of all pool multipliers.
pub fn total_multiplier(env: &Env) -> u64 {
    env.storage().instance().get(&TOTAL_MULT).unwrap_or(0)
}

pub fn set_total_multiplier(env: &Env, total: u64) {
    env.storage().instance().set(&TOTAL_MULT, &total);
}
