#![no_std]

pub mod events;
pub mod pools;
pub mod positions;
pub mod rewards;

use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Env, Symbol, Vec};

pub use pools::Pool;
pub use positions::StakerPosition;
pub use rewards::FIXED_POINT_SCALE;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const REWARD_RATE: Symbol = symbol_short!("RWD_RATE");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InvalidPool = 5,
    LockupNotElapsed = 6,
    NoActivePosition = 7,
    NoRewardDue = 8,
    DivisionHazard = 9,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `admin`                – the administrator identity; the only caller
    ///                            allowed to create pools, reweight them, or
    ///                            change the emission rate.
    /// * `reward_token`         – SAC address of the reward asset; the
    ///                            contract must be its token admin so that
    ///                            settlements can mint.
    /// * `reward_rate_per_step` – reward units emitted per ledger step,
    ///                            before multiplier and stake-share scaling.
    pub fn initialize(
        env: Env,
        admin: Address,
        reward_token: Address,
        reward_rate_per_step: i128,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if reward_rate_per_step < 0 {
            return Err(ContractError::InvalidAmount);
        }

        admin.require_auth();

        common::set_admin(&env, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        env.storage().instance().set(&REWARD_RATE, &reward_rate_per_step);
        // POOL_CNT and TOT_MULT start at zero; unwrap_or(0) handles the
        // absent keys, so no explicit init is needed.

        events::publish_initialized(&env, admin, reward_token, reward_rate_per_step);

        Ok(())
    }

    // ── Pool registry ───────────────────────────────────────────────────────

    /// Register a new pool accepting `stake_token`, with a withdrawal
    /// duration floor of `min_stake_duration` seconds and reward weight
    /// `multiplier`. Returns the new pool's sequential index (from 0).
    ///
    /// Admin only. `total_multiplier` grows by `multiplier`.
    pub fn create_pool(
        env: Env,
        caller: Address,
        stake_token: Address,
        min_stake_duration: u64,
        multiplier: u64,
    ) -> Result<u32, ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let pool = Pool {
            stake_token: stake_token.clone(),
            total_staked: 0,
            min_stake_duration,
            multiplier,
        };
        let pool_id = pools::append_pool(&env, &pool);

        events::publish_pool_created(&env, pool_id, stake_token, min_stake_duration, multiplier);

        Ok(pool_id)
    }

    /// Ordered snapshot of every pool. Read-only.
    pub fn list_pools(env: Env) -> Vec<Pool> {
        pools::list_pools(&env)
    }

    /// Reweight a pool. `total_multiplier` moves by the delta between the
    /// old and new weight, never by the new value outright.
    ///
    /// Admin only. Fails with `InvalidPool` for an out-of-range index.
    pub fn set_multiplier(
        env: Env,
        caller: Address,
        pool_id: u32,
        new_multiplier: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut pool = pools::get_pool(&env, pool_id).ok_or(ContractError::InvalidPool)?;
        let old_multiplier = pool.multiplier;

        let total = pools::total_multiplier(&env)
            .saturating_sub(old_multiplier)
            .saturating_add(new_multiplier);
        pools::set_total_multiplier(&env, total);

        pool.multiplier = new_multiplier;
        pools::set_pool(&env, pool_id, &pool);

        events::publish_multiplier_changed(
            &env,
            caller,
            pool_id,
            old_multiplier,
            new_multiplier,
            total,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of the pool's stake token.
    ///
    /// A top-up settles the position's pending reward first, so nothing
    /// accrued under the old balance is lost; the settlement's own failure
    /// modes (including `NoRewardDue` when zero steps have elapsed) abort
    /// the whole deposit. A fresh position starts accruing from the current
    /// ledger step.
    ///
    /// Accounting and the event precede the token pull; the invocation's
    /// transaction semantics make the whole operation all-or-nothing.
    pub fn deposit(
        env: Env,
        staker: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let mut pool = pools::get_pool(&env, pool_id).ok_or(ContractError::InvalidPool)?;

        // 1. Settle the accrual window that ends with this deposit.
        let had_stake = positions::get_position(&env, pool_id, &staker).amount > 0;
        if had_stake {
            Self::settle_rewards(&env, &staker, pool_id, &pool)?;
        }

        // 2. Re-read: settlement moved the accrual step.
        let mut position = positions::get_position(&env, pool_id, &staker);
        if !had_stake {
            position.accrual_start_step = env.ledger().sequence();
        }
        position.amount = position.amount.saturating_add(amount);
        position.deposit_timestamp = env.ledger().timestamp();
        positions::set_position(&env, pool_id, &staker, &position);

        pool.total_staked = pool.total_staked.saturating_add(amount);
        pools::set_pool(&env, pool_id, &pool);

        events::publish_deposit(&env, staker.clone(), pool_id, amount, pool.total_staked);

        // 3. Pull the stake into custody.
        token::TokenClient::new(&env, &pool.stake_token).transfer(
            &staker,
            &env.current_contract_address(),
            &amount,
        );

        Ok(())
    }

    /// Withdraw the staked balance after the pool's duration floor.
    ///
    /// The full balance must be withdrawn: `amount` has to equal the
    /// position's staked amount, else `InvalidAmount`. The duration check is
    /// strict — exactly `min_stake_duration` elapsed is still locked.
    /// Pending rewards are settled before the position is zeroed.
    pub fn withdraw(
        env: Env,
        staker: Address,
        pool_id: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let mut pool = pools::get_pool(&env, pool_id).ok_or(ContractError::InvalidPool)?;
        let position = positions::get_position(&env, pool_id, &staker);

        if position.amount == 0 {
            return Err(ContractError::NoActivePosition);
        }
        if amount != position.amount {
            return Err(ContractError::InvalidAmount);
        }

        let elapsed = env
            .ledger()
            .timestamp()
            .saturating_sub(position.deposit_timestamp);
        if elapsed <= pool.min_stake_duration {
            return Err(ContractError::LockupNotElapsed);
        }

        // Settle the final accrual window before the position disappears.
        Self::settle_rewards(&env, &staker, pool_id, &pool)?;

        positions::set_position(&env, pool_id, &staker, &StakerPosition::inactive());

        pool.total_staked = pool.total_staked.saturating_sub(amount);
        pools::set_pool(&env, pool_id, &pool);

        events::publish_withdraw(&env, staker.clone(), pool_id, amount);

        // Return the stake from custody.
        token::TokenClient::new(&env, &pool.stake_token).transfer(
            &env.current_contract_address(),
            &staker,
            &amount,
        );

        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Settle and mint the staker's accrued reward in `pool_id`.
    ///
    /// Fails with `NoRewardDue` rather than succeeding as a no-op when the
    /// truncating math comes out to zero, and with `DivisionHazard` when
    /// either normalising denominator is zero.
    pub fn collect_rewards(
        env: Env,
        staker: Address,
        pool_id: u32,
    ) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let pool = pools::get_pool(&env, pool_id).ok_or(ContractError::InvalidPool)?;
        Self::settle_rewards(&env, &staker, pool_id, &pool)
    }

    /// Read-only estimate of the staker's pending reward.
    ///
    /// Same computation as [`collect_rewards`] without the mutation and the
    /// mint; zero is a valid answer here.
    pub fn get_pending_reward(
        env: Env,
        staker: Address,
        pool_id: u32,
    ) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;

        let pool = pools::get_pool(&env, pool_id).ok_or(ContractError::InvalidPool)?;
        let position = positions::get_position(&env, pool_id, &staker);

        if position.amount <= 0 {
            return Err(ContractError::NoActivePosition);
        }

        let total_multiplier = pools::total_multiplier(&env);
        if total_multiplier == 0 || pool.total_staked <= 0 {
            return Err(ContractError::DivisionHazard);
        }

        let steps_elapsed = env
            .ledger()
            .sequence()
            .saturating_sub(position.accrual_start_step);
        let budget = rewards::pool_reward(
            steps_elapsed,
            Self::get_reward_rate_per_step(env.clone()),
            pool.multiplier,
            total_multiplier,
        );

        Ok(rewards::staker_share(
            position.amount,
            budget,
            pool.total_staked,
        ))
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// The host step counter driving reward accrual (ledger sequence).
    pub fn get_current_step(env: Env) -> u32 {
        env.ledger().sequence()
    }

    /// The sum of all pool multipliers.
    pub fn get_total_multiplier(env: Env) -> u64 {
        pools::total_multiplier(&env)
    }

    /// Reward units emitted per ledger step, before scaling.
    pub fn get_reward_rate_per_step(env: Env) -> i128 {
        env.storage().instance().get(&REWARD_RATE).unwrap_or(0)
    }

    /// A staker's recorded position in `pool_id`, zeroed if they never staked.
    pub fn get_position(env: Env, staker: Address, pool_id: u32) -> StakerPosition {
        positions::get_position(&env, pool_id, &staker)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        common::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        common::get_pending_admin(&env)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Replace the per-step emission rate. No bounds beyond authorisation
    /// and the unsigned domain; already-settled windows are unaffected.
    pub fn set_reward_rate_per_step(
        env: Env,
        caller: Address,
        new_rate: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if new_rate < 0 {
            return Err(ContractError::InvalidAmount);
        }

        env.storage().instance().set(&REWARD_RATE, &new_rate);

        events::publish_reward_rate_set(&env, caller, new_rate);

        Ok(())
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        common::set_pending_admin(&env, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the proposed new admin can
    /// complete it.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_admin.require_auth();

        let old_admin = common::get_admin(&env).ok_or(ContractError::NotInitialized)?;
        if !common::accept_pending_admin(&env, &new_admin) {
            return Err(ContractError::Unauthorized);
        }

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(
        env: Env,
        current_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        let pending = common::get_pending_admin(&env).ok_or(ContractError::Unauthorized)?;
        common::clear_pending_admin(&env);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !common::is_admin(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Settle the staker's accrual window in `pool_id`: compute the reward,
    /// reset the accrual step, and mint to the staker.
    ///
    /// `pool` is the caller's already-loaded copy; settlement never touches
    /// the pool record itself.
    fn settle_rewards(
        env: &Env,
        staker: &Address,
        pool_id: u32,
        pool: &Pool,
    ) -> Result<i128, ContractError> {
        let mut position = positions::get_position(env, pool_id, staker);

        if position.accrual_start_step == 0 {
            return Err(ContractError::NoActivePosition);
        }

        let total_multiplier = pools::total_multiplier(env);
        if total_multiplier == 0 || pool.total_staked <= 0 {
            return Err(ContractError::DivisionHazard);
        }

        let current_step = env.ledger().sequence();
        let steps_elapsed = current_step.saturating_sub(position.accrual_start_step);
        let budget = rewards::pool_reward(
            steps_elapsed,
            Self::get_reward_rate_per_step(env.clone()),
            pool.multiplier,
            total_multiplier,
        );
        let reward = rewards::staker_share(position.amount, budget, pool.total_staked);

        if reward <= 0 {
            return Err(ContractError::NoRewardDue);
        }

        position.accrual_start_step = current_step;
        positions::set_position(env, pool_id, staker, &position);

        // Mint the reward to the staker; the contract is the reward asset's
        // token admin.
        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        token::StellarAssetClient::new(env, &reward_token).mint(staker, &reward);

        events::publish_rewards_collected(env, staker.clone(), pool_id, reward);

        Ok(reward)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
