//! Loop closure and adjacent-duplicate collapsing.

use crate::domain::Point;

use super::error::GeometryError;

/// Close a point sequence into a loop by appending its first point.
///
/// Fails with [`GeometryError::EmptyRoute`] on an empty sequence —
/// callers must guarantee at least one point survives normalization.
pub fn close(mut points: Vec<Point>) -> Result<Vec<Point>, GeometryError> {
    let Some(&first) = points.first() else {
        return Err(GeometryError::EmptyRoute);
    };
    points.push(first);
    Ok(points)
}

/// Collapse runs of equal adjacent items down to one.
///
/// A single left-to-right pass: an item is kept only if it differs from
/// the previously kept item. The first item is always kept. Used both
/// for the coordinate loop and the station list (station equality
/// covers the whole (position, name) pair).
pub fn dedup_adjacent<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut output: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if output.last() == Some(&item) {
            continue;
        }
        output.push(item);
    }
    output
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Points drawn from a small grid so adjacent duplicates actually occur.
    fn arb_points() -> impl Strategy<Value = Vec<Point>> {
        proptest::collection::vec((0i32..4, 0i32..4), 0..20).prop_map(|coords| {
            coords
                .into_iter()
                .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
                .collect()
        })
    }

    proptest! {
        /// Dedup is idempotent.
        #[test]
        fn dedup_idempotent(points in arb_points()) {
            let once = dedup_adjacent(points);
            let twice = dedup_adjacent(once.clone());
            prop_assert_eq!(once, twice);
        }

        /// Dedup output never contains equal adjacent items.
        #[test]
        fn dedup_output_has_no_adjacent_duplicates(points in arb_points()) {
            let output = dedup_adjacent(points);
            for pair in output.windows(2) {
                prop_assert_ne!(pair[0], pair[1]);
            }
        }

        /// Dedup preserves relative order (output is a subsequence).
        #[test]
        fn dedup_output_is_a_subsequence(points in arb_points()) {
            let output = dedup_adjacent(points.clone());
            let mut input_iter = points.iter();
            for kept in &output {
                prop_assert!(
                    input_iter.any(|p| p == kept),
                    "kept item not found in remaining input"
                );
            }
        }

        /// Closing any non-empty sequence makes first == last, and that
        /// property survives deduplication.
        #[test]
        fn close_makes_first_equal_last(points in arb_points()) {
            prop_assume!(!points.is_empty());
            let closed = close(points).unwrap();
            prop_assert_eq!(closed.first(), closed.last());

            let deduped = dedup_adjacent(closed);
            prop_assert!(!deduped.is_empty());
            prop_assert_eq!(deduped.first(), deduped.last());
        }
    }
}
