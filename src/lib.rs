//! Deterministic seeded showcase layout for photo collections.
//!
//! Turns an ordered photo sequence into an ordered sequence of panels:
//! jittered pattern-based photo clusters and interstitial text cards. The
//! layout is a pure function of the photos and a seed key, so the same
//! collection always renders the same way while different collections look
//! distinct. No I/O, `no_std` compatible (requires `alloc`).
//!
//! # Modules
//!
//! - [`rng`]: 32-bit xorshift generator and seed-key checksum
//! - [`aspect`]: Portrait / Landscape / Square / Any classification
//! - [`pattern`]: Slot templates, patterns, and the validated pattern catalog
//! - [`photo`]: The [`Photo`] trait and the [`PhotoDescriptor`] input record
//! - [`panel`]: Output panels: photo clusters and text cards
//! - [`color`]: `#RRGGBB` colors for the text-card palette
//! - [`config`]: Tunables: jitter, safe area, text-card options
//! - [`builder`]: The layout engine, [`ShowcaseBuilder`]
//! - `svg`: SVG visualization of a panel sequence (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenshowcase::{PhotoDescriptor, ShowcaseBuilder};
//!
//! let photos = vec![
//!     PhotoDescriptor::new("/photos/01.jpg").dimensions(1200, 800),
//!     PhotoDescriptor::new("/photos/02.jpg").dimensions(800, 1200),
//!     PhotoDescriptor::new("/photos/03.jpg"),
//! ];
//!
//! let builder = ShowcaseBuilder::default();
//! let panels = builder.build(&photos, "harbour-series");
//!
//! // Every photo lands in exactly one slot, in input order.
//! let placed: usize = panels.iter().map(|p| p.photo_count()).sum();
//! assert_eq!(placed, photos.len());
//! assert!(!panels[0].is_text_card());
//!
//! // Same key, same layout.
//! assert_eq!(panels, builder.build(&photos, "harbour-series"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod aspect;
pub mod builder;
pub mod color;
pub mod config;
pub mod panel;
pub mod pattern;
pub mod photo;
pub mod rng;
#[cfg(feature = "svg")]
pub mod svg;

pub use aspect::AspectClass;
pub use builder::ShowcaseBuilder;
pub use color::HexColor;
pub use config::{CardOptions, ConfigError, Jitter, SafeArea, ShowcaseConfig, Span};
pub use panel::{Panel, PhotoPanel, Slot, TEXT_CARD_LAYOUT, TextCard};
pub use pattern::{CatalogError, Pattern, PatternCatalog, REFERENCE_PATTERNS, SlotTemplate};
pub use photo::{Photo, PhotoDescriptor};
pub use rng::{SeededRng, seed_from_key};
