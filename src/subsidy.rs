//! Block subsidy schedule and total-supply arithmetic.
//!
//! All amounts are in satoshis; all functions are pure integer math.

/// Blocks between subsidy halvings (210,000 on mainnet).
pub const SUBSIDY_HALVING_INTERVAL: u64 = 210_000;

/// Initial block subsidy: 50 BTC.
pub const INITIAL_SUBSIDY_SATS: u64 = 50_0000_0000;

/// After 64 halvings the right shift zeroes out any 64-bit subsidy.
pub const MAX_HALVINGS: u64 = 64;

/// Number of halvings that have occurred by `height`.
pub fn halvings(height: u64, interval: u64) -> u64 {
    height / interval
}

/// Block subsidy at `height` for the given halving interval.
///
/// Halves every `interval` blocks starting from [`INITIAL_SUBSIDY_SATS`];
/// zero once [`MAX_HALVINGS`] epochs have passed.
pub fn block_subsidy(height: u64, interval: u64) -> u64 {
    let halvings = halvings(height, interval);
    if halvings >= MAX_HALVINGS {
        return 0;
    }
    INITIAL_SUBSIDY_SATS >> halvings
}

/// First height paying the next, lower subsidy.
pub fn next_halving_height(height: u64, interval: u64) -> u64 {
    (halvings(height, interval) + 1) * interval
}

/// Total satoshis ever to be created and the number of subsidised blocks,
/// summed over every halving epoch.
///
/// The reward halves by integer division each epoch, so it reaches exactly
/// zero after finitely many epochs and the totals are exact.
pub fn total_money(interval: u64) -> (u64, u64) {
    let mut reward = INITIAL_SUBSIDY_SATS;
    let mut total_sats: u64 = 0;
    let mut total_blocks: u64 = 0;
    while reward > 0 {
        total_sats += interval * reward;
        total_blocks += interval;
        reward >>= 1;
    }
    (total_sats, total_blocks)
}

/// Satoshis issued for the first `height` blocks, capping the final
/// partial epoch.
pub fn mined_supply(height: u64, interval: u64) -> u64 {
    let mut remaining = height;
    let mut reward = INITIAL_SUBSIDY_SATS;
    let mut total: u64 = 0;
    while remaining > 0 && reward > 0 {
        let blocks = remaining.min(interval);
        total += blocks * reward;
        remaining -= blocks;
        reward >>= 1;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_subsidy() {
        assert_eq!(block_subsidy(0, SUBSIDY_HALVING_INTERVAL), 5_000_000_000);
    }

    #[test]
    fn test_first_halving() {
        assert_eq!(block_subsidy(210_000, 210_000), 2_500_000_000);
    }

    #[test]
    fn test_last_block_before_halving() {
        assert_eq!(block_subsidy(209_999, 210_000), 5_000_000_000);
    }

    #[test]
    fn test_subsidy_eventually_zero() {
        let height = MAX_HALVINGS * SUBSIDY_HALVING_INTERVAL;
        assert_eq!(block_subsidy(height, SUBSIDY_HALVING_INTERVAL), 0);
        assert_eq!(block_subsidy(height + 1, SUBSIDY_HALVING_INTERVAL), 0);
    }

    #[test]
    fn test_subsidy_non_increasing() {
        let mut prev = block_subsidy(0, SUBSIDY_HALVING_INTERVAL);
        for height in (0..=70 * SUBSIDY_HALVING_INTERVAL).step_by(30_000) {
            let s = block_subsidy(height, SUBSIDY_HALVING_INTERVAL);
            assert!(s <= prev, "subsidy rose at height {height}");
            prev = s;
        }
    }

    #[test]
    fn test_halvings_count() {
        assert_eq!(halvings(0, 210_000), 0);
        assert_eq!(halvings(209_999, 210_000), 0);
        assert_eq!(halvings(210_000, 210_000), 1);
        assert_eq!(halvings(420_000, 210_000), 2);
    }

    #[test]
    fn test_next_halving() {
        assert_eq!(next_halving_height(0, 210_000), 210_000);
        assert_eq!(next_halving_height(100_000, 210_000), 210_000);
        assert_eq!(next_halving_height(210_000, 210_000), 420_000);
    }

    #[test]
    fn test_total_money_exact() {
        let (total_sats, total_blocks) = total_money(210_000);
        assert_eq!(total_sats, 2_099_999_997_690_000);
        // 33 epochs carry a non-zero reward (50 BTC needs 33 shifts to hit 0)
        assert_eq!(total_blocks, 33 * 210_000);
    }

    #[test]
    fn test_total_money_just_under_cap() {
        let (total_sats, _) = total_money(210_000);
        assert!(total_sats < 21_000_000 * 1_0000_0000);
    }

    #[test]
    fn test_mined_supply_one_epoch() {
        assert_eq!(mined_supply(0, 210_000), 0);
        assert_eq!(mined_supply(210_000, 210_000), 210_000 * 5_000_000_000);
    }

    #[test]
    fn test_mined_supply_partial_epoch() {
        let one_and_a_half = 210_000 * 5_000_000_000 + 105_000 * 2_500_000_000;
        assert_eq!(mined_supply(315_000, 210_000), one_and_a_half);
    }

    #[test]
    fn test_mined_supply_full_schedule_matches_total() {
        let (total_sats, total_blocks) = total_money(210_000);
        assert_eq!(mined_supply(total_blocks, 210_000), total_sats);
        // past the end of the schedule nothing more is issued
        assert_eq!(mined_supply(MAX_HALVINGS * 210_000, 210_000), total_sats);
    }
}
