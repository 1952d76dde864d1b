//! First-encountered-minimum selection.

use super::{JobPool, SelectionRule};

/// Returns the arena index of the job with the smallest rule key.
///
/// `candidates` are arena indices in the order they should be considered;
/// a candidate only replaces the current best on a strictly smaller key, so
/// the earliest candidate wins ties. Returns `None` for no candidates.
pub fn select_best<R: SelectionRule + ?Sized>(
    rule: &R,
    pool: &JobPool<'_>,
    candidates: &[usize],
) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for &idx in candidates {
        let key = rule.key(pool.job(idx));
        match best {
            Some((_, best_key)) if key >= best_key => {}
            _ => best = Some((idx, key)),
        }
    }
    best.map(|(idx, _)| idx)
}
