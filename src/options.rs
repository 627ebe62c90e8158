//! Construction options.

use crate::error::{Error, Result};

/// Hard cap on node height. With p = 0.5 this covers far more keys than fit
/// in the arena.
pub const MAX_HEIGHT: usize = 64;

/// Default cap on node height.
pub const DEFAULT_MAX_HEIGHT: usize = 32;

/// Default probability of promoting a node one level higher.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Tuning for the level-selection policy.
///
/// ```
/// use skipmap::Options;
///
/// let options = Options::default().max_height(12).probability(0.25);
/// assert!(options.validate().is_ok());
/// assert!(Options::default().max_height(0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Upper bound on the number of levels any node may have.
    pub max_height: usize,
    /// Chance that a node reaching level `n` also reaches level `n + 1`.
    pub probability: f64,
}

impl Options {
    pub fn max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Check that the options describe a usable policy.
    pub fn validate(&self) -> Result<()> {
        if self.max_height == 0 {
            return Err(Error::ZeroHeight);
        }
        if self.max_height > MAX_HEIGHT {
            return Err(Error::HeightTooLarge {
                requested: self.max_height,
                limit: MAX_HEIGHT,
            });
        }
        // Also rejects NaN.
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(Error::Probability(self.probability));
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_height: DEFAULT_MAX_HEIGHT,
            probability: DEFAULT_PROBABILITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = Options::default();
        assert_eq!(options.max_height, 32);
        assert_eq!(options.probability, 0.5);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_height() {
        assert_eq!(
            Options::default().max_height(0).validate(),
            Err(Error::ZeroHeight)
        );
    }

    #[test]
    fn rejects_excessive_height() {
        assert_eq!(
            Options::default().max_height(65).validate(),
            Err(Error::HeightTooLarge {
                requested: 65,
                limit: 64
            })
        );
        assert_eq!(Options::default().max_height(64).validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_probability() {
        for p in [0.0, 1.0, -0.5, 2.0] {
            assert_eq!(
                Options::default().probability(p).validate(),
                Err(Error::Probability(p))
            );
        }
        assert!(Options::default().probability(f64::NAN).validate().is_err());
    }
}
