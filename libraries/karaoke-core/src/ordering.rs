//! Sequence positions for playlists and songs
//!
//! New entities go after the highest order among their siblings. Order values
//! are not unique: two concurrent creates can compute the same value, and
//! lists break those ties on creation time and then on id.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Result of looking up the highest order in a sibling set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxOrder {
    /// At least one sibling exists; carries the highest order
    Found(i64),
    /// No siblings yet
    Empty,
}

impl MaxOrder {
    /// Order for the next entity appended to this sibling set.
    ///
    /// An empty set behaves as if its maximum were -1, so the first entity gets 0.
    pub fn next(self) -> i64 {
        match self {
            MaxOrder::Found(max) => max.saturating_add(1),
            MaxOrder::Empty => 0,
        }
    }
}

impl From<Option<i64>> for MaxOrder {
    fn from(value: Option<i64>) -> Self {
        value.map_or(MaxOrder::Empty, MaxOrder::Found)
    }
}

/// Entities that appear in ordered lists
pub trait Sequenced {
    /// Explicit sort position
    fn order(&self) -> i64;

    /// Creation time, used to break ties between equal orders
    fn created_at(&self) -> DateTime<Utc>;

    /// Stable identifier, the final tie-break
    fn sequence_id(&self) -> &str;
}

/// Compare two entities by `(order, created_at, id)`
pub fn compare<T: Sequenced>(a: &T, b: &T) -> Ordering {
    a.order()
        .cmp(&b.order())
        .then_with(|| a.created_at().cmp(&b.created_at()))
        .then_with(|| a.sequence_id().cmp(b.sequence_id()))
}

/// Check that a list is already in display order
pub fn is_sorted<T: Sequenced>(items: &[T]) -> bool {
    items
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    struct Item {
        id: &'static str,
        order: i64,
        created_at: DateTime<Utc>,
    }

    impl Sequenced for Item {
        fn order(&self) -> i64 {
            self.order
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn sequence_id(&self) -> &str {
            self.id
        }
    }

    #[test]
    fn empty_sibling_set_starts_at_zero() {
        assert_eq!(MaxOrder::Empty.next(), 0);
        assert_eq!(MaxOrder::from(None).next(), 0);
    }

    #[test]
    fn next_follows_the_highest_order() {
        assert_eq!(MaxOrder::Found(0).next(), 1);
        assert_eq!(MaxOrder::from(Some(41)).next(), 42);
    }

    #[test]
    fn next_tolerates_gaps_and_negatives() {
        assert_eq!(MaxOrder::Found(-5).next(), -4);
        assert_eq!(MaxOrder::Found(i64::MAX).next(), i64::MAX);
    }

    #[test]
    fn ties_break_on_creation_time_then_id() {
        let now = Utc::now();
        let mut items = vec![
            Item { id: "c", order: 1, created_at: now },
            Item { id: "b", order: 0, created_at: now + Duration::seconds(1) },
            Item { id: "a", order: 0, created_at: now + Duration::seconds(1) },
            Item { id: "d", order: 0, created_at: now },
        ];

        items.sort_by(compare);

        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["d", "a", "b", "c"]);
        assert!(is_sorted(&items));
    }
}
