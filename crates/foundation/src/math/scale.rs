use crate::bounds::Interval;

/// What a [`LinearScale`] returns when its domain has zero width.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Degenerate {
    /// Middle of the output range.
    Midpoint,
    /// Upper end of the output range.
    RangeMax,
}

/// Unclamped linear map from a domain interval onto an output range.
///
/// The output range may be inverted (`range.min > range.max`), which is how
/// screen-space Y flips are expressed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearScale {
    pub domain: Interval,
    pub range: Interval,
    pub degenerate: Degenerate,
}

impl LinearScale {
    pub fn new(domain: Interval, range: Interval) -> Self {
        Self {
            domain,
            range,
            degenerate: Degenerate::Midpoint,
        }
    }

    pub fn with_degenerate(mut self, degenerate: Degenerate) -> Self {
        self.degenerate = degenerate;
        self
    }

    pub fn map(&self, v: f64) -> f64 {
        if self.domain.is_degenerate() {
            return match self.degenerate {
                Degenerate::Midpoint => 0.5 * (self.range.min + self.range.max),
                Degenerate::RangeMax => self.range.max,
            };
        }
        let t = (v - self.domain.min) / self.domain.span();
        self.range.min + t * (self.range.max - self.range.min)
    }
}

#[cfg(test)]
mod tests {
    use super::{Degenerate, LinearScale};
    use crate::bounds::Interval;

    #[test]
    fn maps_endpoints_and_midpoint() {
        let s = LinearScale::new(Interval::new(0.0, 10.0), Interval::new(100.0, 200.0));
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(10.0), 200.0);
        assert_eq!(s.map(5.0), 150.0);
    }

    #[test]
    fn inverted_range_flips_axis() {
        let s = LinearScale::new(Interval::new(-90.0, 90.0), Interval::new(500.0, 100.0));
        assert_eq!(s.map(90.0), 100.0);
        assert_eq!(s.map(-90.0), 500.0);
    }

    #[test]
    fn does_not_clamp() {
        let s = LinearScale::new(Interval::new(0.0, 5000.0), Interval::new(35.0, 560.0));
        assert!(s.map(6000.0) > 560.0);
    }

    #[test]
    fn degenerate_domain_never_divides_by_zero() {
        let d = Interval::point(3.0);
        let mid = LinearScale::new(d, Interval::new(10.0, 20.0));
        assert_eq!(mid.map(3.0), 15.0);
        let max = mid.with_degenerate(Degenerate::RangeMax);
        assert_eq!(max.map(3.0), 20.0);
        assert!(max.map(99.0).is_finite());
    }
}
