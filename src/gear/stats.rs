//! Set stat aggregation.

use crate::gear::{catalog, GearStats};

/// Sum the percentage bonuses of every equipped, recognized gear item.
///
/// Empty slots and unknown ids contribute nothing. The fold is pure and
/// order-independent; troop types no item contributes to are absent from
/// the result, as are zero stat values.
pub fn aggregate<'a, I>(equipped: I) -> GearStats
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut total = GearStats::new();

    for id in equipped.into_iter().flatten() {
        let Some(def) = catalog::get_gear(id) else {
            continue;
        };
        for &(troop, stat, value) in def.bonuses {
            if value == 0 {
                continue;
            }
            *total.entry(troop).or_default().entry(stat).or_insert(0) += value;
        }
    }

    total
}
