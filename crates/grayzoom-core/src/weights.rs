//! Channel weights for RGB-to-gray conversion

use crate::error::{Error, Result};

/// Default perceptual weights, substituted when the caller passes all
/// zeros (ITU-R BT.601 luma).
pub const LUMA_RED: f32 = 0.299;
/// Green component of the default luma weights.
pub const LUMA_GREEN: f32 = 0.587;
/// Blue component of the default luma weights.
pub const LUMA_BLUE: f32 = 0.114;

/// Non-negative per-channel weights for grayscale conversion.
///
/// The conversion divides by the weight sum, so an all-zero triple is a
/// sentinel meaning "use the default luma weights"; [`Weights::resolve`]
/// performs that substitution. Triples with a negative, NaN, or infinite
/// component are rejected at construction, which is what makes the
/// division safe inside the conversion loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Red channel weight
    pub red: f32,
    /// Green channel weight
    pub green: f32,
    /// Blue channel weight
    pub blue: f32,
}

impl Weights {
    /// Validate and build a weight triple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeights`] if any component is negative or
    /// not finite.
    pub fn new(red: f32, green: f32, blue: f32) -> Result<Self> {
        for (name, v) in [("red", red), ("green", green), ("blue", blue)] {
            if !v.is_finite() || v < 0.0 {
                return Err(Error::InvalidWeights(format!(
                    "{name} weight must be finite and non-negative, got {v}"
                )));
            }
        }
        Ok(Self { red, green, blue })
    }

    /// The default luma weights (0.299, 0.587, 0.114).
    pub fn luma() -> Self {
        Self {
            red: LUMA_RED,
            green: LUMA_GREEN,
            blue: LUMA_BLUE,
        }
    }

    /// The all-zero sentinel requesting default weights.
    pub fn unset() -> Self {
        Self {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
        }
    }

    /// Substitute the default luma weights if all components are zero.
    pub fn resolve(self) -> Self {
        if self.red == 0.0 && self.green == 0.0 && self.blue == 0.0 {
            Self::luma()
        } else {
            self
        }
    }

    /// Sum of the components, the divisor of the conversion formula.
    #[inline]
    pub fn sum(&self) -> f32 {
        self.red + self.green + self.blue
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::unset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_substitutes_luma() {
        let w = Weights::unset().resolve();
        assert_eq!(w, Weights::luma());
    }

    #[test]
    fn test_resolve_keeps_explicit() {
        let w = Weights::new(1.0, 2.0, 3.0).unwrap().resolve();
        assert_eq!(w.red, 1.0);
        assert_eq!(w.green, 2.0);
        assert_eq!(w.blue, 3.0);
        assert_eq!(w.sum(), 6.0);
    }

    #[test]
    fn test_new_rejects_invalid() {
        assert!(Weights::new(-0.1, 0.5, 0.5).is_err());
        assert!(Weights::new(0.3, f32::NAN, 0.3).is_err());
        assert!(Weights::new(0.3, 0.3, f32::INFINITY).is_err());
    }
}
