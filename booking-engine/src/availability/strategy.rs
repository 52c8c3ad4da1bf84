//! Table matching strategies
//!
//! A strategy answers one question: can this set of concurrent party
//! sizes be seated on this set of tables, one party per table?

use shared::models::DiningTable;

/// Pluggable matching strategy
///
/// Pure computation over a snapshot; implementations must not hold
/// state between calls.
pub trait TableMatchStrategy: Send + Sync {
    /// Whether every demand can be placed on a distinct table with
    /// sufficient capacity.
    fn can_seat(&self, demands: &[i32], tables: &[DiningTable]) -> bool;
}

/// Greedy best-fit placement, largest party first
///
/// Demands are sorted descending and each takes the pooled table with
/// the smallest capacity that still fits it; the check fails fast as
/// soon as one demand has no table left. Largest-first placement
/// keeps big tables from being wasted on small parties.
pub struct BestFit;

impl TableMatchStrategy for BestFit {
    fn can_seat(&self, demands: &[i32], tables: &[DiningTable]) -> bool {
        let mut demands = demands.to_vec();
        demands.sort_unstable_by(|a, b| b.cmp(a));

        let mut pool: Vec<&DiningTable> = tables.iter().collect();
        for demand in demands {
            let best = pool
                .iter()
                .enumerate()
                .filter(|(_, table)| table.fits(demand))
                .min_by_key(|(_, table)| table.capacity)
                .map(|(idx, _)| idx);
            match best {
                Some(idx) => {
                    pool.swap_remove(idx);
                }
                None => return false,
            }
        }
        true
    }
}
