//! Slot templates, layout patterns, and the pattern catalog.
//!
//! All geometry is in percent of the panel viewport. Slots cluster in the
//! right-hand part of the panel (x ≈ 56–84, y ≈ 18–64); the layout engine
//! jitters and clamps them into the safe area before emitting.
//!
//! ```text
//!     hero_right            duo_tall               quad_cluster
//!     ┌──────────────┐      ┌──────────────┐       ┌──────────────┐
//!     │         ┌───┐│      │        ┌─┐   │       │        ┌─┐┌─┐│
//!     │         │   ││      │        │ │┌─┐│       │        └─┘└─┘│
//!     │         │   ││      │        └─┘│ ││       │        ┌─┐┌─┐│
//!     │         └───┘│      │           └─┘│       │        └─┘└─┘│
//!     └──────────────┘      └──────────────┘       └──────────────┘
//! ```

use crate::aspect::AspectClass;
use crate::panel::TEXT_CARD_LAYOUT;

/// Nominal placement of one photo within a pattern, before jitter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotTemplate {
    /// Left edge, % of panel width.
    pub x: f64,
    /// Top edge, % of panel height.
    pub y: f64,
    /// Width, % of panel width.
    pub w: f64,
    /// Height, % of panel height.
    pub h: f64,
    /// Layer order (higher = on top).
    pub z: i32,
    /// Rotation in degrees (positive = clockwise).
    pub rot: f64,
}

impl SlotTemplate {
    pub const fn new(x: f64, y: f64, w: f64, h: f64, z: i32, rot: f64) -> Self {
        Self { x, y, w, h, z, rot }
    }
}

/// A named arrangement of photo slots.
///
/// The number of photos a pattern consumes is the number of its slots.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pattern {
    /// Unique name, emitted as the panel's `layout`.
    pub name: &'static str,
    /// Slot templates, filled in photo order.
    pub slots: &'static [SlotTemplate],
    /// Photo orientation this pattern is designed for.
    pub preferred_aspect: AspectClass,
}

impl Pattern {
    pub const fn new(
        name: &'static str,
        slots: &'static [SlotTemplate],
        preferred_aspect: AspectClass,
    ) -> Self {
        Self {
            name,
            slots,
            preferred_aspect,
        }
    }

    /// Number of photos this pattern consumes.
    pub const fn slots_needed(&self) -> usize {
        self.slots.len()
    }
}

/// The reference pattern table, in selection order.
pub const REFERENCE_PATTERNS: &[Pattern] = &[
    // Single large image, right-anchored
    Pattern::new(
        "hero_right",
        &[SlotTemplate::new(65.0, 32.0, 32.0, 54.0, 1, 0.0)],
        AspectClass::Any,
    ),
    // Two portraits, slight overlap
    Pattern::new(
        "duo_tall",
        &[
            SlotTemplate::new(64.0, 24.0, 20.0, 48.0, 1, 0.0),
            SlotTemplate::new(80.0, 38.0, 18.0, 44.0, 2, -0.8),
        ],
        AspectClass::Portrait,
    ),
    // Three overlapping images
    Pattern::new(
        "stack_3",
        &[
            SlotTemplate::new(58.0, 24.0, 26.0, 36.0, 1, 0.5),
            SlotTemplate::new(70.0, 38.0, 24.0, 34.0, 2, -1.0),
            SlotTemplate::new(64.0, 54.0, 22.0, 30.0, 3, 0.3),
        ],
        AspectClass::Any,
    ),
    // Two larger floats, well separated
    Pattern::new(
        "floating_2",
        &[
            SlotTemplate::new(64.0, 18.0, 24.0, 30.0, 1, -0.5),
            SlotTemplate::new(72.0, 62.0, 22.0, 28.0, 2, 1.2),
        ],
        AspectClass::Landscape,
    ),
    // Three medium images in a vertical cluster.
    // Last slot tops out at y=64 after jitter so the bottom clip leaves h >= 18.
    Pattern::new(
        "strip_3",
        &[
            SlotTemplate::new(68.0, 18.0, 22.0, 20.0, 1, 0.0),
            SlotTemplate::new(72.0, 44.0, 20.0, 22.0, 2, -0.6),
            SlotTemplate::new(66.0, 62.0, 21.0, 18.0, 3, 0.8),
        ],
        AspectClass::Landscape,
    ),
    // One dominant, one accent
    Pattern::new(
        "large_small",
        &[
            SlotTemplate::new(62.0, 30.0, 30.0, 50.0, 1, 0.0),
            SlotTemplate::new(84.0, 64.0, 12.0, 16.0, 2, -1.5),
        ],
        AspectClass::Any,
    ),
    // Four images with room between them
    Pattern::new(
        "quad_cluster",
        &[
            SlotTemplate::new(58.0, 18.0, 20.0, 26.0, 1, 0.3),
            SlotTemplate::new(78.0, 22.0, 18.0, 24.0, 2, -0.8),
            SlotTemplate::new(56.0, 54.0, 22.0, 24.0, 3, 1.0),
            SlotTemplate::new(76.0, 60.0, 18.0, 22.0, 4, -0.4),
        ],
        AspectClass::Any,
    ),
    // Two images stacked vertically
    Pattern::new(
        "vertical_pair",
        &[
            SlotTemplate::new(68.0, 20.0, 24.0, 26.0, 1, 0.0),
            SlotTemplate::new(66.0, 60.0, 26.0, 28.0, 2, -0.6),
        ],
        AspectClass::Landscape,
    ),
    // Tall portrait, right edge
    Pattern::new(
        "single_portrait",
        &[SlotTemplate::new(72.0, 28.0, 22.0, 58.0, 1, 0.0)],
        AspectClass::Portrait,
    ),
    // Single wide image
    Pattern::new(
        "wide_landscape",
        &[SlotTemplate::new(58.0, 40.0, 38.0, 30.0, 1, 0.0)],
        AspectClass::Landscape,
    ),
];

/// Catalog validation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no patterns.
    #[error("pattern catalog is empty")]
    Empty,
    /// A pattern has no slots.
    #[error("pattern `{name}` has no slots")]
    EmptyPattern { name: &'static str },
    /// No single-slot pattern to fall back on for a lone remaining photo.
    #[error("pattern catalog has no single-slot pattern")]
    NoSingleSlot,
    /// Two patterns share a name.
    #[error("pattern name `{name}` is used more than once")]
    DuplicateName { name: &'static str },
    /// A pattern uses the layout name reserved for text cards.
    #[error("pattern name `text_card` is reserved")]
    ReservedName,
}

/// A validated, read-only, ordered set of patterns.
///
/// Order matters: candidate filtering keeps catalog order, and the seeded
/// pick indexes into the filtered list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PatternCatalog {
    patterns: &'static [Pattern],
    fallback: usize,
}

const REFERENCE_CATALOG: PatternCatalog = match validate(REFERENCE_PATTERNS) {
    Ok(fallback) => PatternCatalog {
        patterns: REFERENCE_PATTERNS,
        fallback,
    },
    Err(_) => panic!("reference pattern catalog is invalid"),
};

impl PatternCatalog {
    /// The reference catalog ([`REFERENCE_PATTERNS`]), validated at compile time.
    pub const fn reference() -> Self {
        REFERENCE_CATALOG
    }

    /// Validate a custom pattern table.
    ///
    /// ```
    /// use zenshowcase::{AspectClass, CatalogError, Pattern, PatternCatalog, SlotTemplate};
    ///
    /// static PAIRS_ONLY: &[Pattern] = &[Pattern::new(
    ///     "pair",
    ///     &[
    ///         SlotTemplate::new(66.0, 20.0, 24.0, 26.0, 1, 0.0),
    ///         SlotTemplate::new(70.0, 56.0, 22.0, 24.0, 2, 0.5),
    ///     ],
    ///     AspectClass::Any,
    /// )];
    ///
    /// assert_eq!(PatternCatalog::new(PAIRS_ONLY), Err(CatalogError::NoSingleSlot));
    /// ```
    pub fn new(patterns: &'static [Pattern]) -> Result<Self, CatalogError> {
        let fallback = validate(patterns)?;
        Ok(Self { patterns, fallback })
    }

    /// All patterns, in catalog order.
    pub fn patterns(&self) -> &'static [Pattern] {
        self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Look a pattern up by name.
    pub fn get(&self, name: &str) -> Option<&'static Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// The first single-slot pattern, used when nothing else fits.
    pub fn fallback(&self) -> &'static Pattern {
        &self.patterns[self.fallback]
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

/// Check catalog rules; on success return the fallback pattern's index.
const fn validate(patterns: &[Pattern]) -> Result<usize, CatalogError> {
    if patterns.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut fallback = None;
    let mut i = 0;
    while i < patterns.len() {
        let p = &patterns[i];
        if p.slots.is_empty() {
            return Err(CatalogError::EmptyPattern { name: p.name });
        }
        if str_eq(p.name, TEXT_CARD_LAYOUT) {
            return Err(CatalogError::ReservedName);
        }
        let mut j = 0;
        while j < i {
            if str_eq(patterns[j].name, p.name) {
                return Err(CatalogError::DuplicateName { name: p.name });
            }
            j += 1;
        }
        if fallback.is_none() && p.slots.len() == 1 {
            fallback = Some(i);
        }
        i += 1;
    }
    match fallback {
        Some(index) => Ok(index),
        None => Err(CatalogError::NoSingleSlot),
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const ONE: &[SlotTemplate] = &[SlotTemplate::new(70.0, 30.0, 20.0, 40.0, 1, 0.0)];
    const TWO: &[SlotTemplate] = &[
        SlotTemplate::new(66.0, 20.0, 24.0, 26.0, 1, 0.0),
        SlotTemplate::new(70.0, 56.0, 22.0, 24.0, 2, 0.5),
    ];

    #[test]
    fn reference_catalog_order() {
        let names: Vec<_> = PatternCatalog::reference()
            .patterns()
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            [
                "hero_right",
                "duo_tall",
                "stack_3",
                "floating_2",
                "strip_3",
                "large_small",
                "quad_cluster",
                "vertical_pair",
                "single_portrait",
                "wide_landscape",
            ]
        );
    }

    #[test]
    fn reference_catalog_shape() {
        let catalog = PatternCatalog::reference();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
        let counts: Vec<_> = catalog.patterns().iter().map(|p| p.slots_needed()).collect();
        assert_eq!(counts.iter().min(), Some(&1));
        assert_eq!(counts.iter().max(), Some(&4));
        for n in 1..=4 {
            assert!(counts.contains(&n), "no pattern with {n} slots");
        }
        for aspect in [AspectClass::Portrait, AspectClass::Landscape, AspectClass::Any] {
            assert!(
                catalog.patterns().iter().any(|p| p.preferred_aspect == aspect),
                "no pattern prefers {aspect:?}"
            );
        }
    }

    #[test]
    fn reference_fallback_is_hero() {
        let catalog = PatternCatalog::reference();
        assert_eq!(catalog.fallback().name, "hero_right");
        assert_eq!(catalog.fallback().slots_needed(), 1);
        assert_eq!(PatternCatalog::default(), catalog);
    }

    #[test]
    fn z_orders_are_sequential() {
        for p in REFERENCE_PATTERNS {
            for (i, slot) in p.slots.iter().enumerate() {
                assert_eq!(slot.z, i as i32 + 1, "{} slot {i}", p.name);
            }
        }
    }

    #[test]
    fn reference_slots_survive_worst_case_clip() {
        // Position jitter ±2, clip edges 96 (right) and 82 (bottom),
        // minimum clamped width 10 and height 15.
        for p in REFERENCE_PATTERNS {
            for slot in p.slots {
                let worst_x = slot.x.max(65.0) + 2.0;
                let worst_y = slot.y.max(18.0) + 2.0;
                assert!(96.0 - worst_x >= 10.0, "{} x={}", p.name, slot.x);
                assert!(82.0 - worst_y >= 15.0, "{} y={}", p.name, slot.y);
            }
        }
    }

    #[test]
    fn get_by_name() {
        let catalog = PatternCatalog::reference();
        assert_eq!(catalog.get("quad_cluster").map(|p| p.slots_needed()), Some(4));
        assert_eq!(
            catalog.get("single_portrait").map(|p| p.preferred_aspect),
            Some(AspectClass::Portrait)
        );
        assert!(catalog.get("text_card").is_none());
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn custom_catalog_fallback_is_first_single() {
        static PATTERNS: &[Pattern] = &[
            Pattern::new("pair", TWO, AspectClass::Any),
            Pattern::new("solo_a", ONE, AspectClass::Landscape),
            Pattern::new("solo_b", ONE, AspectClass::Any),
        ];
        let catalog = PatternCatalog::new(PATTERNS).unwrap();
        assert_eq!(catalog.fallback().name, "solo_a");
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(PatternCatalog::new(&[]), Err(CatalogError::Empty));
    }

    #[test]
    fn rejects_pattern_without_slots() {
        static PATTERNS: &[Pattern] = &[
            Pattern::new("solo", ONE, AspectClass::Any),
            Pattern::new("hollow", &[], AspectClass::Any),
        ];
        assert_eq!(
            PatternCatalog::new(PATTERNS),
            Err(CatalogError::EmptyPattern { name: "hollow" })
        );
    }

    #[test]
    fn rejects_missing_single_slot() {
        static PATTERNS: &[Pattern] = &[Pattern::new("pair", TWO, AspectClass::Any)];
        assert_eq!(PatternCatalog::new(PATTERNS), Err(CatalogError::NoSingleSlot));
    }

    #[test]
    fn rejects_duplicate_names() {
        static PATTERNS: &[Pattern] = &[
            Pattern::new("solo", ONE, AspectClass::Any),
            Pattern::new("pair", TWO, AspectClass::Any),
            Pattern::new("solo", TWO, AspectClass::Portrait),
        ];
        assert_eq!(
            PatternCatalog::new(PATTERNS),
            Err(CatalogError::DuplicateName { name: "solo" })
        );
    }

    #[test]
    fn rejects_reserved_name() {
        static PATTERNS: &[Pattern] = &[
            Pattern::new("solo", ONE, AspectClass::Any),
            Pattern::new("text_card", ONE, AspectClass::Any),
        ];
        assert_eq!(PatternCatalog::new(PATTERNS), Err(CatalogError::ReservedName));
    }

    #[test]
    fn error_messages() {
        use alloc::string::ToString;
        assert_eq!(
            CatalogError::EmptyPattern { name: "hollow" }.to_string(),
            "pattern `hollow` has no slots"
        );
        assert_eq!(
            CatalogError::NoSingleSlot.to_string(),
            "pattern catalog has no single-slot pattern"
        );
    }
}
