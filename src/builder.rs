//! The showcase layout engine.
//!
//! One pass over the photos, front to back. Each step either emits a text
//! card or picks a pattern that fits the remaining photo count and the
//! dominant aspect of the next few photos, consumes that many photos, and
//! jitters the pattern's slots into the safe area. All randomness comes from
//! one [`SeededRng`] per call, so the output is a pure function of the
//! photos, the seed, the catalog and the config.

use alloc::vec::Vec;

use num_traits::Float;

use crate::aspect::AspectClass;
use crate::config::{ConfigError, ShowcaseConfig};
use crate::panel::{Panel, PhotoPanel, Slot, TextCard};
use crate::pattern::{Pattern, PatternCatalog, SlotTemplate};
use crate::photo::Photo;
use crate::rng::{SeededRng, seed_from_key};

/// Builds deterministic showcase layouts.
///
/// Immutable once built; share it freely across threads. Each `build` call
/// owns its own generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowcaseBuilder {
    catalog: PatternCatalog,
    config: ShowcaseConfig,
}

impl ShowcaseBuilder {
    /// Builder over a catalog and config. The catalog is validated on
    /// construction; the config is validated here.
    pub fn new(catalog: PatternCatalog, config: ShowcaseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Reference catalog with a custom config.
    pub fn with_config(config: ShowcaseConfig) -> Result<Self, ConfigError> {
        Self::new(PatternCatalog::reference(), config)
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Lay out `photos`, seeding the generator from `seed_key` (typically a
    /// collection slug) via [`seed_from_key`].
    ///
    /// Empty input yields no panels. Photos appear in input order, each in
    /// exactly one slot.
    pub fn build<P: Photo + Clone>(&self, photos: &[P], seed_key: &str) -> Vec<Panel<P>> {
        if photos.is_empty() {
            return Vec::new();
        }
        let seed = seed_from_key(seed_key);
        tracing::debug!(seed_key, seed, photos = photos.len(), "building showcase");
        self.build_with_seed(photos, seed)
    }

    /// Lay out `photos` with an explicit generator seed.
    pub fn build_with_seed<P: Photo + Clone>(&self, photos: &[P], seed: u32) -> Vec<Panel<P>> {
        if photos.is_empty() {
            return Vec::new();
        }

        let mut rng = SeededRng::new(seed);
        let mut panels = Vec::new();
        let mut remaining = photos;
        let mut last_was_text_card = false;

        while !remaining.is_empty() {
            // The roll is drawn even before the first panel; only its result
            // is ignored there.
            if !last_was_text_card {
                let roll = rng.next_f64();
                if roll < self.config.text_card_probability && !panels.is_empty() {
                    let card = self.text_card(&mut rng);
                    tracing::trace!(color = %card.color, width = card.width, height = card.height, "text card");
                    panels.push(Panel::TextCard(card));
                    last_was_text_card = true;
                    continue;
                }
            }
            last_was_text_card = false;

            let pattern = self.select_pattern(remaining, &mut rng);
            let (taken, rest) = remaining.split_at(pattern.slots_needed().min(remaining.len()));
            tracing::trace!(pattern = pattern.name, remaining = rest.len(), "photo panel");
            panels.push(Panel::Photo(self.photo_panel(pattern, taken, &mut rng)));
            remaining = rest;
        }

        tracing::debug!(panels = panels.len(), "showcase built");
        panels
    }

    /// Pick a pattern for the front of `remaining`.
    ///
    /// Candidates are the patterns that fit the remaining count, narrowed to
    /// those whose preference accepts the dominant aspect of the look-ahead
    /// window (unless that leaves nothing). Catalog order is kept throughout.
    fn select_pattern<P: Photo>(&self, remaining: &[P], rng: &mut SeededRng) -> &'static Pattern {
        let count = remaining.len();
        let mut candidates: Vec<&'static Pattern> = self
            .catalog
            .patterns()
            .iter()
            .filter(|p| p.slots_needed() <= count)
            .collect();
        if candidates.is_empty() {
            candidates.push(self.catalog.fallback());
        }

        let window = &remaining[..count.min(self.config.lookahead)];
        let dominant = AspectClass::dominant(window.iter().map(|p| p.aspect()));

        let preferred: Vec<&'static Pattern> = candidates
            .iter()
            .copied()
            .filter(|p| p.preferred_aspect.accepts(dominant))
            .collect();
        let pool = if preferred.is_empty() {
            &candidates
        } else {
            &preferred
        };

        pool[rng.int_in_range(0, pool.len() - 1)]
    }

    fn photo_panel<P: Clone>(
        &self,
        pattern: &'static Pattern,
        photos: &[P],
        rng: &mut SeededRng,
    ) -> PhotoPanel<P> {
        let slots = pattern
            .slots
            .iter()
            .zip(photos)
            .map(|(template, photo)| self.place(template, photo.clone(), rng))
            .collect();
        PhotoPanel {
            layout: pattern.name,
            slots,
        }
    }

    /// Jitter one slot template, clamp it into the safe area, and clip it to
    /// the right and bottom edges. Draws x, y, w, h, rot in that order.
    fn place<P>(&self, template: &SlotTemplate, photo: P, rng: &mut SeededRng) -> Slot<P> {
        let area = &self.config.safe_area;
        let jitter = &self.config.jitter;

        let x = area.x.clamp(rng.jitter(template.x, jitter.position));
        let y = area.y.clamp(rng.jitter(template.y, jitter.position));
        let mut w = area.w.clamp(rng.jitter(template.w, jitter.size));
        let mut h = area.h.clamp(rng.jitter(template.h, jitter.size));
        let rot = rng.jitter(template.rot, jitter.rotation);

        if x + w > area.right_edge {
            w = area.right_edge - x;
        }
        if y + h > area.bottom_edge {
            h = area.bottom_edge - y;
        }

        Slot {
            photo,
            x: round2(x),
            y: round2(y),
            w: round2(w),
            h: round2(h),
            z: template.z,
            rot: round2(rot),
        }
    }

    /// Draws color, width, height, x, y in that order.
    fn text_card(&self, rng: &mut SeededRng) -> TextCard {
        let cards = &self.config.cards;
        TextCard {
            color: cards.palette[rng.int_in_range(0, cards.palette.len() - 1)],
            width: cards.widths[rng.int_in_range(0, cards.widths.len() - 1)],
            height: cards.heights[rng.int_in_range(0, cards.heights.len() - 1)],
            x: cards.xs[rng.int_in_range(0, cards.xs.len() - 1)],
            y: cards.ys[rng.int_in_range(0, cards.ys.len() - 1)],
        }
    }
}

/// Round to two decimals, halves away from zero.
fn round2(v: f64) -> f64 {
    Float::round(v * 100.0) / 100.0
}
