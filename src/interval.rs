/*

    Responsible for creating a struct that represents
    ranges from a to b and functionality to check if
    x is in range [a,b], clamp x into it, or grow the
    range to include x.

    See also associated constants of Interval class:
    - EMPTY: (inf, -inf), the starting point of a running min/max
    - UNIT: [-1, 1], the NDC range of one axis

    @author: Bartu
    @date: Sept 2025

*/

use crate::numeric::{Float};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: Float::INFINITY,
        max: Float::NEG_INFINITY,
    };

    pub const UNIT: Self = Self {
        min: -1.0,
        max: 1.0,
    };

    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// [-half_extent, half_extent]
    pub fn symmetric(half_extent: Float) -> Self {
        Self {
            min: -half_extent,
            max: half_extent,
        }
    }

    /// Size of the interval, never negative
    pub fn size(&self) -> Float {
        (self.max - self.min).max(0.0)
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn clamp(&self, x: Float) -> Float {
        if x < self.min { self.min }
        else if x > self.max { self.max }
        else { x }
    }

    /// Clamp both ends into `bounds`. An interval lying entirely on one
    /// side of `bounds` collapses onto that edge.
    pub fn clamped_to(&self, bounds: &Interval) -> Self {
        Self {
            min: bounds.clamp(self.min),
            max: bounds.clamp(self.max),
        }
    }

    /// Grow to include x. NaN never compares, so it is ignored.
    pub fn expand(&mut self, x: Float) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }

}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_from_empty() {
        let mut int = Interval::EMPTY;
        assert!(!int.validate());
        for x in [3.0, -1.0, 2.0] {
            int.expand(x);
        }
        assert_eq!(int, Interval::new(-1.0, 3.0));
        assert_eq!(int.size(), 4.0);
    }

    #[test]
    fn expand_skips_nan() {
        let mut int = Interval::new(0.0, 1.0);
        int.expand(Float::NAN);
        assert_eq!(int, Interval::new(0.0, 1.0));
    }

    #[test]
    fn clamp_collapses_offscreen_range() {
        let screen = Interval::new(0.0, 800.0);
        let right_of_screen = Interval::new(900.0, 1200.0);
        let clamped = right_of_screen.clamped_to(&screen);
        assert_eq!(clamped.min, 800.0);
        assert_eq!(clamped.max, 800.0);
        assert_eq!(clamped.size(), 0.0);

        let straddling = Interval::new(-50.0, 100.0).clamped_to(&screen);
        assert_eq!(straddling, Interval::new(0.0, 100.0));
    }

    #[test]
    fn empty_size_is_zero() {
        assert_eq!(Interval::EMPTY.size(), 0.0);
        assert!(Interval::UNIT.contains(-1.0));
        assert_eq!(Interval::symmetric(2.0), Interval::new(-2.0, 2.0));
    }
}
