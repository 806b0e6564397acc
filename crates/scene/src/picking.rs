use foundation::math::Vec2;

use crate::dataset::RowId;

/// A circle on screen that can be hovered or clicked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleTarget {
    pub row: RowId,
    pub center: Vec2,
    pub radius: f64,
}

impl CircleTarget {
    /// Strictly inside: a point exactly on the rim does not hit.
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.center) < self.radius
    }
}

/// Deterministic screen hit test over circles.
///
/// Ordering contract:
/// - `targets` are given in draw order (dataset order).
/// - If several circles contain `point`, the LAST one wins; that is the one
///   painted on top.
///
/// Hover and click must both go through this so that the tooltip always
/// names the row a click would open.
pub fn hit_test<'a>(
    point: Vec2,
    targets: impl IntoIterator<Item = &'a CircleTarget>,
) -> Option<RowId> {
    if !point.is_finite() {
        return None;
    }
    targets
        .into_iter()
        .filter(|t| t.contains(point))
        .last()
        .map(|t| t.row)
}

#[cfg(test)]
mod tests {
    use super::{CircleTarget, hit_test};
    use crate::dataset::RowId;
    use foundation::math::Vec2;

    fn t(row: usize, x: f64, y: f64, radius: f64) -> CircleTarget {
        CircleTarget {
            row: RowId(row),
            center: Vec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn miss_returns_none() {
        let targets = [t(0, 0.0, 0.0, 5.0)];
        assert_eq!(hit_test(Vec2::new(10.0, 0.0), &targets), None);
        assert_eq!(hit_test(Vec2::new(5.0, 0.0), &targets), None);
    }

    #[test]
    fn inside_hits() {
        let targets = [t(0, 0.0, 0.0, 5.0), t(1, 100.0, 100.0, 5.0)];
        assert_eq!(hit_test(Vec2::new(3.0, 3.0), &targets), Some(RowId(0)));
        assert_eq!(hit_test(Vec2::new(101.0, 99.0), &targets), Some(RowId(1)));
    }

    #[test]
    fn overlap_resolves_to_topmost() {
        let targets = [t(0, 0.0, 0.0, 10.0), t(3, 2.0, 0.0, 10.0), t(7, 50.0, 0.0, 1.0)];
        assert_eq!(hit_test(Vec2::new(1.0, 0.0), &targets), Some(RowId(3)));
    }

    #[test]
    fn non_finite_point_never_hits() {
        let targets = [t(0, 0.0, 0.0, 5.0)];
        assert_eq!(hit_test(Vec2::new(f64::NAN, 0.0), &targets), None);
    }
}
