use super::types::EvaluatedVolume;
use std::cmp::Ordering;

/// Sort direction for a single ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Ascending,
    Descending,
}

/// One column of the ranking comparator: an integer field and its direction.
#[derive(Clone, Copy)]
pub(crate) struct SortKey {
    pub field: fn(&EvaluatedVolume) -> i64,
    pub direction: Direction,
}

impl SortKey {
    fn compare(&self, left: &EvaluatedVolume, right: &EvaluatedVolume) -> Ordering {
        let ordering = (self.field)(left).cmp(&(self.field)(right));
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

const fn overcommitted_percent(v: &EvaluatedVolume) -> i64 {
    v.overcommitted_percent
}

const fn used_percent(v: &EvaluatedVolume) -> i64 {
    v.used_percent
}

/// Worst first: most overcommitted, then fullest.
pub(crate) const ALERT_PRIORITY: [SortKey; 2] = [
    SortKey { field: overcommitted_percent, direction: Direction::Descending },
    SortKey { field: used_percent, direction: Direction::Descending },
];

/// Lexicographic comparison over `keys`; the first key that differs decides.
pub(crate) fn compare(left: &EvaluatedVolume, right: &EvaluatedVolume, keys: &[SortKey]) -> Ordering {
    keys.iter().map(|key| key.compare(left, right)).find(|o| o.is_ne()).unwrap_or(Ordering::Equal)
}

/// Order volumes by `keys`. Volumes equal on every key keep their input order.
pub(crate) fn rank(mut volumes: Vec<EvaluatedVolume>, keys: &[SortKey]) -> Vec<EvaluatedVolume> {
    volumes.sort_by(|a, b| compare(a, b, keys));
    volumes
}
