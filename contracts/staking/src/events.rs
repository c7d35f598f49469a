use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub reward_token: Address,
    pub reward_rate_per_step: i128,
    pub timestamp: u64,
}

/// Fired when the admin registers a new pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreatedEvent {
    pub pool_id: u32,
    pub stake_token: Address,
    pub min_stake_duration: u64,
    pub multiplier: u64,
    pub timestamp: u64,
}

/// Fired when a staker deposits into a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub staker: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub new_pool_total: i128,
    pub timestamp: u64,
}

/// Fired when a staker withdraws their full position.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub staker: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when accrued rewards are settled and minted to a staker.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsCollectedEvent {
    pub staker: Address,
    pub pool_id: u32,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the admin reweights a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultiplierChangedEvent {
    pub admin: Address,
    pub pool_id: u32,
    pub old_multiplier: u64,
    pub new_multiplier: u64,
    pub total_multiplier: u64,
    pub timestamp: u64,
}

/// Fired when the admin changes the per-step reward rate.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub admin: Address,
    pub new_rate: i128,
    pub timestamp: u64,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    reward_token: Address,
    reward_rate_per_step: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            reward_token,
            reward_rate_per_step,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_created(
    env: &Env,
    pool_id: u32,
    stake_token: Address,
    min_stake_duration: u64,
    multiplier: u64,
) {
    env.events().publish(
        (symbol_short!("POOL_NEW"), pool_id),
        PoolCreatedEvent {
            pool_id,
            stake_token,
            min_stake_duration,
            multiplier,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposit(
    env: &Env,
    staker: Address,
    pool_id: u32,
    amount: i128,
    new_pool_total: i128,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), staker.clone(), pool_id),
        DepositEvent {
            staker,
            pool_id,
            amount,
            new_pool_total,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdraw(env: &Env, staker: Address, pool_id: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), staker.clone(), pool_id),
        WithdrawEvent {
            staker,
            pool_id,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_collected(env: &Env, staker: Address, pool_id: u32, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_CLCT"), staker.clone(), pool_id),
        RewardsCollectedEvent {
            staker,
            pool_id,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_multiplier_changed(
    env: &Env,
    admin: Address,
    pool_id: u32,
    old_multiplier: u64,
    new_multiplier: u64,
    total_multiplier: u64,
) {
    env.events().publish(
        (symbol_short!("MULT_SET"), pool_id),
        MultiplierChangedEvent {
            admin,
            pool_id,
            old_multiplier,
            new_multiplier,
            total_multiplier,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, admin: Address, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RATE_SET"),),
        RewardRateSetEvent {
            admin,
            new_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
