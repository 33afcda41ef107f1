use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Knobs for the operations that have more than one reasonable answer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OpsConfig {
    #[serde(default)]
    pub cross_product: CrossProductConvention,

    /// Norms at or below this value are treated as zero by the angle functions.
    #[serde(default)]
    pub degenerate_tolerance: f64,
}

/// Sign convention for the second component of the 3D cross product.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossProductConvention {
    /// `a2*b0 - a0*b2`, the usual right-handed result.
    #[default]
    Standard,
    /// `a0*b2 - a2*b0`, the historical formula with the second component negated.
    Legacy,
}

impl FromStr for CrossProductConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(CrossProductConvention::Standard),
            "legacy" => Ok(CrossProductConvention::Legacy),
            _ => Err(format!(
                "Unknown cross product convention: {}. Expected `standard` or `legacy`",
                s
            )),
        }
    }
}

impl OpsConfig {
    pub fn new(cross_product: CrossProductConvention, degenerate_tolerance: f64) -> Self {
        Self {
            cross_product,
            degenerate_tolerance,
        }
    }

    pub(crate) fn is_degenerate(&self, norm: f64) -> bool {
        norm <= self.degenerate_tolerance
    }
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            cross_product: CrossProductConvention::Standard,
            degenerate_tolerance: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact_zero_standard() {
        let cfg = OpsConfig::default();
        assert_eq!(cfg.cross_product, CrossProductConvention::Standard);
        assert!(cfg.is_degenerate(0.0));
        assert!(!cfg.is_degenerate(1e-300));
    }

    #[test]
    fn test_tolerance_widens_degenerate_band() {
        let cfg = OpsConfig::new(CrossProductConvention::Legacy, 1e-9);
        assert!(cfg.is_degenerate(1e-10));
        assert!(!cfg.is_degenerate(1e-8));
    }
}
