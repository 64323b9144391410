//! Aspect-ratio classification for photos and pattern preferences.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width/height ratio below which a photo is portrait.
pub const PORTRAIT_BELOW: f64 = 0.85;
/// Width/height ratio above which a photo is landscape.
pub const LANDSCAPE_ABOVE: f64 = 1.15;

/// Orientation class of a photo, or the aspect a pattern prefers.
///
/// `Any` on a pattern accepts every dominant-aspect decision; on a photo it
/// means the dimensions are unknown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AspectClass {
    /// Ratio below [`PORTRAIT_BELOW`].
    Portrait,
    /// Ratio above [`LANDSCAPE_ABOVE`].
    Landscape,
    /// Ratio within `0.85..=1.15`.
    Square,
    /// Unknown dimensions, or no preference.
    #[default]
    Any,
}

impl AspectClass {
    /// Classify pixel dimensions.
    ///
    /// Missing width or height, or a zero height, yields [`Any`](Self::Any).
    ///
    /// ```
    /// use zenshowcase::AspectClass;
    ///
    /// assert_eq!(AspectClass::classify(Some(800), Some(1200)), AspectClass::Portrait);
    /// assert_eq!(AspectClass::classify(Some(1600), Some(900)), AspectClass::Landscape);
    /// assert_eq!(AspectClass::classify(Some(1000), Some(1000)), AspectClass::Square);
    /// assert_eq!(AspectClass::classify(Some(1000), None), AspectClass::Any);
    /// ```
    pub fn classify(width: Option<u32>, height: Option<u32>) -> Self {
        let (Some(w), Some(h)) = (width, height) else {
            return Self::Any;
        };
        if h == 0 {
            return Self::Any;
        }
        let ratio = w as f64 / h as f64;
        if ratio < PORTRAIT_BELOW {
            Self::Portrait
        } else if ratio > LANDSCAPE_ABOVE {
            Self::Landscape
        } else {
            Self::Square
        }
    }

    /// Majority orientation of a batch of photos.
    ///
    /// Only portraits and landscapes are counted. A tie, including a batch of
    /// only squares and unknowns, is [`Any`](Self::Any).
    pub fn dominant<I: IntoIterator<Item = AspectClass>>(aspects: I) -> Self {
        let (mut portrait, mut landscape) = (0usize, 0usize);
        for aspect in aspects {
            match aspect {
                Self::Portrait => portrait += 1,
                Self::Landscape => landscape += 1,
                Self::Square | Self::Any => {}
            }
        }
        match portrait.cmp(&landscape) {
            core::cmp::Ordering::Greater => Self::Portrait,
            core::cmp::Ordering::Less => Self::Landscape,
            core::cmp::Ordering::Equal => Self::Any,
        }
    }

    /// Whether a pattern preferring `self` suits a batch whose dominant
    /// aspect is `dominant`.
    pub fn accepts(self, dominant: AspectClass) -> bool {
        self == dominant || self == Self::Any
    }
}
