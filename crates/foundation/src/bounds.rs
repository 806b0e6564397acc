use crate::math::Vec2;

/// Closed 1D interval `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Interval { min, max }
    }

    pub fn point(v: f64) -> Self {
        Interval { min: v, max: v }
    }

    /// Grows the interval to cover `v`.
    pub fn include(&mut self, v: f64) {
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
    }

    /// Smallest interval covering every finite value, or `None` when there is none.
    pub fn covering(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut out: Option<Interval> = None;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            match out.as_mut() {
                Some(i) => i.include(v),
                None => out = Some(Interval::point(v)),
            }
        }
        out
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Axis-aligned bounding boxes
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Aabb2 {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Aabb2 { min, max }
    }

    /// Bounding box of all finite points, or `None` when there is none.
    pub fn covering(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut out: Option<Aabb2> = None;
        for p in points
            .into_iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
        {
            match out.as_mut() {
                Some(b) => b.include(p),
                None => out = Some(Aabb2::new([p.x, p.y], [p.x, p.y])),
            }
        }
        out
    }

    pub fn include(&mut self, p: Vec2) {
        self.min[0] = self.min[0].min(p.x);
        self.min[1] = self.min[1].min(p.y);
        self.max[0] = self.max[0].max(p.x);
        self.max[1] = self.max[1].max(p.y);
    }

    pub fn x(&self) -> Interval {
        Interval::new(self.min[0], self.max[0])
    }

    pub fn y(&self) -> Interval {
        Interval::new(self.min[1], self.max[1])
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.x().contains(p.x) && self.y().contains(p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Aabb2, Interval};
    use crate::math::Vec2;

    #[test]
    fn interval_covers_finite_values_only() {
        let i = Interval::covering([3.0, f64::NAN, -2.0, 7.5]).expect("interval");
        assert_eq!(i, Interval::new(-2.0, 7.5));
        assert!(Interval::covering([f64::NAN]).is_none());
        assert!(Interval::covering(std::iter::empty()).is_none());
    }

    #[test]
    fn single_value_interval_is_degenerate() {
        let i = Interval::covering([4.0]).expect("interval");
        assert!(i.is_degenerate());
        assert_eq!(i.span(), 0.0);
    }

    #[test]
    fn aabb_covering_and_contains() {
        let b = Aabb2::covering([Vec2::new(1.0, 5.0), Vec2::new(-3.0, 2.0)]).expect("box");
        assert_eq!(b, Aabb2::new([-3.0, 2.0], [1.0, 5.0]));
        assert!(b.contains(Vec2::new(0.0, 3.0)));
        assert!(!b.contains(Vec2::new(2.0, 3.0)));
        assert_eq!(b.x(), Interval::new(-3.0, 1.0));
    }
}
