//! Photo input: the [`Photo`] trait and the [`PhotoDescriptor`] record.

use alloc::string::String;

use crate::aspect::AspectClass;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Anything the layout engine can place.
///
/// The engine only reads pixel dimensions; everything else on the value is
/// carried into the output slot untouched.
pub trait Photo {
    /// Pixel width, if known.
    fn width(&self) -> Option<u32>;
    /// Pixel height, if known.
    fn height(&self) -> Option<u32>;

    /// Orientation class from the dimensions.
    fn aspect(&self) -> AspectClass {
        AspectClass::classify(self.width(), self.height())
    }
}

impl<T: Photo + ?Sized> Photo for &T {
    fn width(&self) -> Option<u32> {
        (**self).width()
    }

    fn height(&self) -> Option<u32> {
        (**self).height()
    }
}

/// A displayable photo with optional caption and camera metadata.
///
/// Serializes with camelCase keys; unset fields are omitted, so a record
/// passes through a layout unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PhotoDescriptor {
    /// Display URL.
    pub url: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alt: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub width: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub height: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub location: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub year: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub iso: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub focal_length: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub aperture: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub shutter_speed: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub exposure_compensation: Option<String>,
}

impl PhotoDescriptor {
    /// A photo with only a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set pixel dimensions.
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set alt text.
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn iso(mut self, iso: u32) -> Self {
        self.iso = Some(iso);
        self
    }

    pub fn focal_length(mut self, focal_length: impl Into<String>) -> Self {
        self.focal_length = Some(focal_length.into());
        self
    }

    pub fn aperture(mut self, aperture: impl Into<String>) -> Self {
        self.aperture = Some(aperture.into());
        self
    }

    pub fn shutter_speed(mut self, shutter_speed: impl Into<String>) -> Self {
        self.shutter_speed = Some(shutter_speed.into());
        self
    }

    pub fn exposure_compensation(mut self, exposure_compensation: impl Into<String>) -> Self {
        self.exposure_compensation = Some(exposure_compensation.into());
        self
    }
}

impl Photo for PhotoDescriptor {
    fn width(&self) -> Option<u32> {
        self.width
    }

    fn height(&self) -> Option<u32> {
        self.height
    }
}
