//! Environmental impact figures surfaced on profile and community pages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Item;
use crate::lifecycle::ItemStatus;

/// Impact units credited per completed swap. Inherited heuristic with no
/// documented physical unit; kept as a named constant rather than dressed up
/// as carbon accounting.
pub const IMPACT_UNITS_PER_SWAP: u32 = 4;

/// Impact units credited for a completed swap count.
pub fn impact_units(successful_swaps: u32) -> f64 {
    successful_swaps as f64 * IMPACT_UNITS_PER_SWAP as f64
}

/// Aggregate impact over a set of listings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImpactSummary {
    pub items_swapped: u32,
    pub impact_units: f64,
    /// Completed swaps per listing category, ordered by category name.
    pub by_category: BTreeMap<String, u32>,
}

impl ImpactSummary {
    /// Count only listings that actually completed a swap.
    pub fn for_items(items: &[Item]) -> Self {
        let mut by_category: BTreeMap<String, u32> = BTreeMap::new();
        let mut items_swapped = 0u32;

        for item in items {
            if item.status != ItemStatus::Swapped {
                continue;
            }
            items_swapped += 1;
            *by_category.entry(item.category.clone()).or_insert(0) += 1;
        }

        Self {
            items_swapped,
            impact_units: impact_units(items_swapped),
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, UserId};
    use chrono::{TimeZone, Utc};

    fn item(id: &str, category: &str, status: ItemStatus) -> Item {
        Item {
            id: ItemId(id.to_string()),
            owner: UserId("member-a".to_string()),
            category: category.to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            swap_completed_at: None,
            expires_at: None,
        }
    }

    #[test]
    fn summary_counts_only_swapped_items() {
        let items = vec![
            item("item-1", "tools", ItemStatus::Swapped),
            item("item-2", "tools", ItemStatus::Available),
            item("item-3", "plants", ItemStatus::Swapped),
            item("item-4", "books", ItemStatus::Removed),
        ];

        let summary = ImpactSummary::for_items(&items);
        assert_eq!(summary.items_swapped, 2);
        assert_eq!(summary.impact_units, 8.0);
        assert_eq!(summary.by_category.get("tools"), Some(&1));
        assert_eq!(summary.by_category.get("plants"), Some(&1));
        assert_eq!(summary.by_category.get("books"), None);
    }

    #[test]
    fn empty_input_yields_a_zero_summary() {
        assert_eq!(ImpactSummary::for_items(&[]), ImpactSummary::default());
    }
}
