//! Layout output: photo panels and text cards.
//!
//! With the `serde` feature, panels serialize to the flat JSON shape the
//! showcase front end consumes:
//!
//! ```text
//! {"layout": "duo_tall", "slots": [{"photo": {..}, "x": 65.0, "y": 24.1, "w": 19.6, "h": 47.2, "z": 1, "rot": 0.4}, ..]}
//! {"layout": "text_card", "color": "#00897B", "width": 35, "height": 50, "x": 60, "y": 35}
//! ```

use alloc::vec::Vec;

use crate::color::HexColor;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Layout name emitted for text cards. Patterns may not use it.
pub const TEXT_CARD_LAYOUT: &str = "text_card";

/// One placed photo. Geometry is in percent of the panel viewport, rounded
/// to two decimals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Slot<P> {
    /// The caller's photo, unchanged.
    pub photo: P,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Layer order, copied from the pattern.
    pub z: i32,
    /// Rotation in degrees.
    pub rot: f64,
}

/// A cluster of photos arranged by a pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PhotoPanel<P> {
    /// Name of the pattern used.
    pub layout: &'static str,
    pub slots: Vec<Slot<P>>,
}

/// A solid-color interstitial rectangle. Dimensions and offsets are whole
/// percentages of the viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextCard {
    pub color: HexColor,
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

/// One visual unit of the showcase.
#[derive(Clone, Debug, PartialEq)]
pub enum Panel<P> {
    Photo(PhotoPanel<P>),
    TextCard(TextCard),
}

impl<P> Panel<P> {
    /// Pattern name, or [`TEXT_CARD_LAYOUT`].
    pub fn layout(&self) -> &'static str {
        match self {
            Self::Photo(panel) => panel.layout,
            Self::TextCard(_) => TEXT_CARD_LAYOUT,
        }
    }

    pub fn is_text_card(&self) -> bool {
        matches!(self, Self::TextCard(_))
    }

    /// Placed photos; empty for text cards.
    pub fn slots(&self) -> &[Slot<P>] {
        match self {
            Self::Photo(panel) => &panel.slots,
            Self::TextCard(_) => &[],
        }
    }

    /// Number of photos this panel places.
    pub fn photo_count(&self) -> usize {
        self.slots().len()
    }

    pub fn as_photo_panel(&self) -> Option<&PhotoPanel<P>> {
        match self {
            Self::Photo(panel) => Some(panel),
            Self::TextCard(_) => None,
        }
    }

    pub fn as_text_card(&self) -> Option<&TextCard> {
        match self {
            Self::Photo(_) => None,
            Self::TextCard(card) => Some(card),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for TextCard {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("TextCard", 6)?;
        s.serialize_field("layout", TEXT_CARD_LAYOUT)?;
        s.serialize_field("color", &self.color)?;
        s.serialize_field("width", &self.width)?;
        s.serialize_field("height", &self.height)?;
        s.serialize_field("x", &self.x)?;
        s.serialize_field("y", &self.y)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<P: Serialize> Serialize for Panel<P> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Photo(panel) => panel.serialize(serializer),
            Self::TextCard(card) => card.serialize(serializer),
        }
    }
}
