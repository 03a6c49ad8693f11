/*

    On-screen size classes and the pixel thresholds between them.

    Two sets of cutoffs have been in use: 10px / 5px (DEFAULT)
    and the older 20px / 10px (COARSE). Pick one explicitly
    when building a sizer instead of relying on magic numbers.

    @date: Nov, 2025
    @author: bartu
*/

use std::fmt;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScreenSize {
    Small,
    Medium,
    Large,
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenSize::Small => "small",
            ScreenSize::Medium => "medium",
            ScreenSize::Large => "large",
        };
        f.pad(name)
    }
}

/// Minimum pixel dimension an object must exceed to be Large or Medium
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct SizeThresholds {
    #[default = 10.0]
    #[serde(rename = "Large", deserialize_with = "deser_float")]
    pub large: Float,

    #[default = 5.0]
    #[serde(rename = "Medium", deserialize_with = "deser_float")]
    pub medium: Float,
}

impl SizeThresholds {
    pub const DEFAULT: Self = Self { large: 10.0, medium: 5.0 };
    pub const COARSE: Self = Self { large: 20.0, medium: 10.0 };

    pub fn new(large: Float, medium: Float) -> Self {
        let thresholds = Self { large, medium };
        if !thresholds.validate() {
            warn!("Size thresholds large={large} medium={medium} leave no room for Medium");
        }
        thresholds
    }

    pub fn validate(&self) -> bool {
        self.large >= self.medium
    }

    /// Strictly greater than a cutoff moves up a class
    pub fn classify(&self, min_pixel_dimension: Float) -> ScreenSize {
        if min_pixel_dimension > self.large {
            ScreenSize::Large
        } else if min_pixel_dimension > self.medium {
            ScreenSize::Medium
        } else {
            ScreenSize::Small
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cutoffs() {
        let t = SizeThresholds::default();
        assert_eq!(t, SizeThresholds::DEFAULT);
        assert_eq!(t.classify(10.5), ScreenSize::Large);
        assert_eq!(t.classify(10.0), ScreenSize::Medium);
        assert_eq!(t.classify(5.5), ScreenSize::Medium);
        assert_eq!(t.classify(5.0), ScreenSize::Small);
        assert_eq!(t.classify(0.0), ScreenSize::Small);
    }

    #[test]
    fn coarse_cutoffs() {
        let t = SizeThresholds::COARSE;
        assert_eq!(t.classify(15.0), ScreenSize::Medium);
        assert_eq!(t.classify(25.0), ScreenSize::Large);
        assert_eq!(t.classify(8.0), ScreenSize::Small);
    }

    #[test]
    fn sizes_are_ordered() {
        assert!(ScreenSize::Small < ScreenSize::Medium);
        assert!(ScreenSize::Medium < ScreenSize::Large);
        assert_eq!(ScreenSize::Large.to_string(), "large");
    }

    #[test]
    fn deserializes_from_strings() {
        let t: SizeThresholds = serde_json::from_str(r#"{ "Large": "20", "Medium": 10 }"#).unwrap();
        assert_eq!(t, SizeThresholds::COARSE);
    }
}
