//! Layout tunables.
//!
//! [`ShowcaseConfig::default()`] reproduces the reference layout exactly;
//! changing any value changes every recorded layout.
//!
//! ```
//! use zenshowcase::{Jitter, ShowcaseConfig};
//!
//! let calm = ShowcaseConfig::default()
//!     .text_card_probability(0.0)
//!     .jitter(Jitter { position: 0.5, size: 0.5, rotation: 0.0 });
//! assert!(calm.validate().is_ok());
//!
//! let broken = ShowcaseConfig::default().text_card_probability(1.5);
//! assert!(broken.validate().is_err());
//! ```

use alloc::vec::Vec;

use crate::color::HexColor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed interval `min..=max`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the span.
    pub fn clamp(self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    fn is_ordered(self) -> bool {
        self.min <= self.max
    }
}

/// Where jittered slots may land, in percent of the panel viewport.
///
/// Each jittered value is clamped to its span, then width and height are
/// clipped so the slot ends at or before `right_edge` / `bottom_edge`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SafeArea {
    pub x: Span,
    pub y: Span,
    pub w: Span,
    pub h: Span,
    pub right_edge: f64,
    pub bottom_edge: f64,
}

impl Default for SafeArea {
    fn default() -> Self {
        Self {
            x: Span::new(65.0, 92.0),
            y: Span::new(18.0, 82.0),
            w: Span::new(10.0, 50.0),
            h: Span::new(15.0, 80.0),
            right_edge: 96.0,
            bottom_edge: 82.0,
        }
    }
}

/// Jitter amplitudes: a value moves uniformly within `±amplitude`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Jitter {
    /// For x and y, in percent.
    pub position: f64,
    /// For w and h, in percent.
    pub size: f64,
    /// For rotation, in degrees.
    pub rotation: f64,
}

impl Default for Jitter {
    fn default() -> Self {
        Self {
            position: 2.0,
            size: 2.5,
            rotation: 1.5,
        }
    }
}

/// Option sets text cards draw from, each uniformly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardOptions {
    pub palette: Vec<HexColor>,
    /// Widths, % of viewport width.
    pub widths: Vec<u32>,
    /// Heights, % of viewport height.
    pub heights: Vec<u32>,
    /// Left offsets, % of viewport width.
    pub xs: Vec<u32>,
    /// Top offsets, % of viewport height.
    pub ys: Vec<u32>,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            palette: HexColor::PALETTE.to_vec(),
            widths: [25, 30, 35, 40, 45].to_vec(),
            heights: [30, 40, 50, 60, 70].to_vec(),
            xs: [55, 60, 65, 70].to_vec(),
            ys: [25, 35, 45].to_vec(),
        }
    }
}

/// Every tunable of the layout engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ShowcaseConfig {
    /// Chance of a text card before each photo panel (never first, never twice in a row).
    pub text_card_probability: f64,
    /// How many upcoming photos vote on the dominant aspect.
    pub lookahead: usize,
    pub jitter: Jitter,
    pub safe_area: SafeArea,
    pub cards: CardOptions,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            text_card_probability: 0.15,
            lookahead: 4,
            jitter: Jitter::default(),
            safe_area: SafeArea::default(),
            cards: CardOptions::default(),
        }
    }
}

impl ShowcaseConfig {
    /// Set the text-card probability (`0.0` disables text cards).
    pub fn text_card_probability(mut self, probability: f64) -> Self {
        self.text_card_probability = probability;
        self
    }

    /// Set the aspect look-ahead window.
    pub fn lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn safe_area(mut self, safe_area: SafeArea) -> Self {
        self.safe_area = safe_area;
        self
    }

    pub fn card_options(mut self, cards: CardOptions) -> Self {
        self.cards = cards;
        self
    }

    /// Replace only the text-card palette.
    pub fn palette(mut self, palette: impl Into<Vec<HexColor>>) -> Self {
        self.cards.palette = palette.into();
        self
    }

    /// Check that the engine can run with these values without panicking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.text_card_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ProbabilityOutOfRange { value: p });
        }
        if self.lookahead == 0 {
            return Err(ConfigError::ZeroLookahead);
        }
        let Jitter {
            position,
            size,
            rotation,
        } = self.jitter;
        // Negated so NaN fails too.
        if !(position >= 0.0 && size >= 0.0 && rotation >= 0.0) {
            return Err(ConfigError::NegativeJitter);
        }
        let area = &self.safe_area;
        for (axis, span) in [("x", area.x), ("y", area.y), ("w", area.w), ("h", area.h)] {
            if !span.is_ordered() {
                return Err(ConfigError::InvertedRange { axis });
            }
        }
        // Clipping against an edge left of (or above) the farthest origin
        // would produce negative sizes.
        for (axis, edge, origin) in [
            ("x", area.right_edge, area.x),
            ("y", area.bottom_edge, area.y),
        ] {
            if !(edge.is_finite() && edge >= origin.max) {
                return Err(ConfigError::EdgeInsideRange { axis });
            }
        }
        let cards = &self.cards;
        for (field, empty) in [
            ("palette", cards.palette.is_empty()),
            ("widths", cards.widths.is_empty()),
            ("heights", cards.heights.is_empty()),
            ("xs", cards.xs.is_empty()),
            ("ys", cards.ys.is_empty()),
        ] {
            if empty {
                return Err(ConfigError::EmptyOptions { field });
            }
        }
        Ok(())
    }
}

/// Configuration validation error.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("text card probability {value} is outside 0..=1")]
    ProbabilityOutOfRange { value: f64 },
    #[error("aspect lookahead must be at least 1")]
    ZeroLookahead,
    #[error("jitter amplitudes must be non-negative")]
    NegativeJitter,
    /// A safe-area span has `min > max` (or a NaN bound).
    #[error("safe area `{axis}` range has min > max")]
    InvertedRange { axis: &'static str },
    /// A clip edge is non-finite or lies inside the origin range on `axis`.
    #[error("safe area edge for `{axis}` must be finite and at or beyond the range max")]
    EdgeInsideRange { axis: &'static str },
    /// A text-card option set is empty.
    #[error("text card option set `{field}` is empty")]
    EmptyOptions { field: &'static str },
}
