use serde::{Deserialize, Serialize};

/// Ordered repaint classes. Merging keeps the highest one, so any burst of
/// state changes between two frames collapses into a single pending repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Value or max value changed; layout metrics are still valid.
    Value,
    /// Drawing area, padding or style changed.
    Layout,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

/// Outcome of one render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderOutcome {
    /// A frame was built and handed to the renderer.
    Drawn,
    /// No usable layout: the drawing area is degenerate or was never set.
    Skipped,
    /// Nothing was pending, so no frame was needed.
    UpToDate,
}

#[cfg(test)]
mod tests {
    use super::InvalidationLevel;

    #[test]
    fn merge_preserves_highest_level() {
        let mut level = InvalidationLevel::None;
        level = level.max(InvalidationLevel::Value);
        assert_eq!(level, InvalidationLevel::Value);

        level = level.max(InvalidationLevel::Layout);
        level = level.max(InvalidationLevel::Value);
        assert_eq!(level, InvalidationLevel::Layout);
        assert!(!level.is_none());
    }
}
