/// Fixed-point scaling factor.
///
/// Reward amounts are carried through the integer math scaled by this
/// constant so that the two truncating divisions below do not collapse
/// small per-step emissions to zero. Using 10^12 keeps 12 decimal places
/// of precision through the multiplier and stake-share divisions.
pub const FIXED_POINT_SCALE: i128 = 1_000_000_000_000;

// ── Core accrual math ───────────────────────────────────────────────────────

/// Reward budget earned by one pool over `steps_elapsed` ledger steps.
///
/// ```text
/// pool_reward = steps × rate × FIXED_POINT_SCALE × multiplier / total_multiplier
/// ```
///
/// Division truncates; the sub-unit remainder is accepted dust. The caller
/// must guarantee `total_multiplier > 0` — the contract surfaces a zero
/// denominator as `DivisionHazard` before this function runs.
#[allow(clippy::arithmetic_side_effects)]
pub fn pool_reward(
    steps_elapsed: u32,
    rate_per_step: i128,
    multiplier: u64,
    total_multiplier: u64,
) -> i128 {
    (steps_elapsed as i128)
        .saturating_mul(rate_per_step)
        .saturating_mul(FIXED_POINT_SCALE)
        .saturating_mul(multiplier as i128)
        / total_multiplier as i128
}

/// One staker's cut of a pool's reward budget, pro-rata by stake.
///
/// ```text
/// share = amount × pool_reward / total_staked
/// ```
///
/// Division truncates. The caller must guarantee `total_staked > 0`; as with
/// [`pool_reward`], the zero case is rejected upstream as `DivisionHazard`.
#[allow(clippy::arithmetic_side_effects)]
pub fn staker_share(amount: i128, pool_reward: i128, total_staked: i128) -> i128 {
    amount.saturating_mul(pool_reward) / total_staked
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    #[test]
    fn sole_pool_sole_staker() {
        // 10 steps × rate 1 × scale × 100/100, then 1000/1000 of the pool.
        let budget = pool_reward(10, 1, 100, 100);
        assert_eq!(budget, 10 * FIXED_POINT_SCALE);
        assert_eq!(staker_share(1_000, budget, 1_000), 10 * FIXED_POINT_SCALE);
    }

    #[test]
    fn quarter_weight_pool_earns_quarter() {
        let full = pool_reward(10, 1, 100, 100);
        let quarter = pool_reward(10, 1, 100, 400);
        assert_eq!(quarter * 4, full);
    }

    #[test]
    fn zero_elapsed_steps_earn_nothing() {
        assert_eq!(pool_reward(0, 1_000, 7, 21), 0);
    }

    #[test]
    fn multiplier_division_truncates() {
        // 1 step × rate 1 × scale × 1/3 = scale/3, truncated.
        let budget = pool_reward(1, 1, 1, 3);
        assert_eq!(budget, FIXED_POINT_SCALE / 3);
        assert_eq!(budget * 3 + 1, FIXED_POINT_SCALE);
    }

    #[test]
    fn share_division_truncates() {
        // 1 unit of a 3-unit pool: 10/3 scaled units, dust dropped.
        let budget = pool_reward(10, 1, 1, 1);
        let share = staker_share(1, budget, 3);
        assert_eq!(share, 10 * FIXED_POINT_SCALE / 3);
        assert!(share * 3 < budget * 1 + 3);
    }

    #[test]
    fn share_proportional_to_stake() {
        let budget = pool_reward(100, 5, 200, 400);
        let quarter = staker_share(1_000, budget, 4_000);
        let three_quarters = staker_share(3_000, budget, 4_000);
        assert_eq!(quarter * 3, three_quarters);
        assert_eq!(quarter + three_quarters, budget);
    }

    #[test]
    fn large_inputs_saturate_instead_of_wrapping() {
        // A pathological rate must clamp at i128::MAX, not panic or wrap.
        let budget = pool_reward(u32::MAX, i128::MAX / 2, u64::MAX, 1);
        assert!(budget > 0);
        let share = staker_share(i128::MAX / 2, budget, 1);
        assert!(share > 0);
    }
}
