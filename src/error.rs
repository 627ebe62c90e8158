//! Errors for configuration and structural checks.
//!
//! Looking up or removing an absent key is not an error; those return `None`.

use thiserror::Error;

/// Everything that can go wrong when building or verifying a skip list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A node must have at least one level.
    #[error("max height must be at least 1")]
    ZeroHeight,

    /// The requested height exceeds `options::MAX_HEIGHT`.
    #[error("max height {requested} exceeds the limit of {limit}")]
    HeightTooLarge { requested: usize, limit: usize },

    /// Promotion probability must lie strictly between 0 and 1.
    #[error("promotion probability {0} is outside (0, 1)")]
    Probability(f64),

    /// Two consecutive nodes at a level are not strictly increasing.
    #[error("level {level} is not strictly increasing at position {position}")]
    Unordered { level: usize, position: usize },

    /// A link at an upper level points to a node that is not on level 0 or
    /// is too short to participate in that level.
    #[error("level {level} links a node that does not belong there")]
    Stray { level: usize },

    /// A level misses a node tall enough to participate in it.
    #[error("level {level} skips a node that belongs to it")]
    Skipped { level: usize },

    /// The stored length disagrees with the level-0 chain.
    #[error("len is {len} but {reachable} nodes are reachable at level 0")]
    LenMismatch { len: usize, reachable: usize },

    /// The arena holds nodes that level 0 no longer reaches.
    #[error("{live} nodes are stored but only {reachable} are reachable")]
    Unreachable { live: usize, reachable: usize },

    /// The header is shorter than one of its nodes.
    #[error("node of height {node} is taller than the header ({header})")]
    HeaderTooShort { node: usize, header: usize },

    /// The header grew past the level generator's cap.
    #[error("header height {height} exceeds the generator maximum {max}")]
    HeightOutOfRange { height: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(Error::ZeroHeight.to_string(), "max height must be at least 1");
        assert_eq!(
            Error::LenMismatch { len: 3, reachable: 2 }.to_string(),
            "len is 3 but 2 nodes are reachable at level 0"
        );
        assert_eq!(
            Error::Probability(1.5).to_string(),
            "promotion probability 1.5 is outside (0, 1)"
        );
    }
}
