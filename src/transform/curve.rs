//! Interpolation curves for the distance-to-alpha ramp.
//!
//! A curve reshapes the normalized distance before it becomes alpha,
//! giving smoother or sharper transitions without moving the
//! thresholds themselves.

use std::f32::consts::PI;
use std::str::FromStr;

use crate::error::Error;

/// Mapping from normalized distance to alpha, applied elementwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurveMode {
    /// Identity.
    #[default]
    Linear,
    /// `x²` - eases in, sharpens toward the opaque end.
    Power,
    /// `√x` - rises fast, eases out.
    Root,
    /// `sin²(πx/2)` - smoothstep-like ease on both ends.
    Smooth,
    /// `asin(2x−1)/π + 0.5` - S-curve, steepest at the midpoint.
    InverseSin,
}

impl CurveMode {
    /// Shape a normalized value.
    ///
    /// `x` must already be clamped to [0, 1]; `InverseSin` relies on
    /// `2x − 1` staying inside the arcsine domain. The alpha mapper
    /// clamps before calling.
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            CurveMode::Linear => x,
            CurveMode::Power => x * x,
            CurveMode::Root => x.sqrt(),
            CurveMode::Smooth => {
                let s = (PI / 2.0 * x).sin();
                s * s
            }
            CurveMode::InverseSin => (2.0 * x - 1.0).asin() / PI + 0.5,
        }
    }

    /// Canonical selector name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            CurveMode::Linear => "linear",
            CurveMode::Power => "power",
            CurveMode::Root => "root",
            CurveMode::Smooth => "smooth",
            CurveMode::InverseSin => "inverse-sin",
        }
    }
}

impl FromStr for CurveMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "linear" => Ok(CurveMode::Linear),
            "power" => Ok(CurveMode::Power),
            "root" => Ok(CurveMode::Root),
            "smooth" => Ok(CurveMode::Smooth),
            "inverse-sin" => Ok(CurveMode::InverseSin),
            _ => Err(Error::UnsupportedCurve(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [CurveMode; 5] = [
        CurveMode::Linear,
        CurveMode::Power,
        CurveMode::Root,
        CurveMode::Smooth,
        CurveMode::InverseSin,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for curve in CURVES {
            assert!(curve.apply(0.0).abs() < 1e-6, "{:?} at 0", curve);
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", curve);
        }
    }

    #[test]
    fn test_midpoint_values() {
        assert_eq!(CurveMode::Linear.apply(0.5), 0.5);
        assert_eq!(CurveMode::Power.apply(0.5), 0.25);
        assert!((CurveMode::Root.apply(0.5) - 0.70710677).abs() < 1e-6);
        assert!((CurveMode::Smooth.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((CurveMode::InverseSin.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_monotonically_non_decreasing() {
        for curve in CURVES {
            let mut prev = curve.apply(0.0);
            for i in 1..=100 {
                let next = curve.apply(i as f32 / 100.0);
                assert!(next >= prev - 1e-6, "{:?} decreased at {}", curve, i);
                prev = next;
            }
        }
    }

    #[test]
    fn test_output_stays_in_unit_interval() {
        for curve in CURVES {
            for i in 0..=100 {
                let y = curve.apply(i as f32 / 100.0);
                assert!((0.0..=1.0 + 1e-6).contains(&y), "{:?} at {} -> {}", curve, i, y);
            }
        }
    }

    #[test]
    fn test_curve_mode_parsing() {
        assert_eq!("linear".parse::<CurveMode>().unwrap(), CurveMode::Linear);
        assert_eq!(
            "inverse-sin".parse::<CurveMode>().unwrap(),
            CurveMode::InverseSin
        );
        assert!("cosine".parse::<CurveMode>().is_err());
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(CurveMode::default(), CurveMode::Linear);
    }
}
