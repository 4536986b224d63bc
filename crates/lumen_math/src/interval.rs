/// A closed range of ray parameters or channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Displayable channel range.
    pub const UNIT: Interval = Interval::new(0.0, 1.0);

    /// Every strictly positive ray parameter, excluding the first `eps`.
    pub const fn ahead(eps: f64) -> Interval {
        Interval::new(eps, f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(!interval.surrounds(-0.1));
    }

    #[test]
    fn test_interval_clamp() {
        assert_eq!(Interval::UNIT.clamp(-5.0), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.25), 0.25);
        assert_eq!(Interval::UNIT.clamp(12.0), 1.0);
    }

    #[test]
    fn test_interval_ahead() {
        let ahead = Interval::ahead(1e-4);
        assert!(!ahead.surrounds(0.0));
        assert!(!ahead.surrounds(1e-4));
        assert!(ahead.surrounds(2e-4));
        assert!(ahead.surrounds(1e20));
        assert!(!ahead.surrounds(f64::INFINITY));
    }
}
