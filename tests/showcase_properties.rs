//! Layout invariants over arbitrary photo sequences and seed keys.
//!
//! Photos are generated with random (possibly missing) dimensions so every
//! aspect class and every remainder size gets exercised. Each property is
//! checked against the default configuration, which is what ships.

use proptest::prelude::*;
use zenshowcase::{
    AspectClass, Panel, Photo, PhotoDescriptor, REFERENCE_PATTERNS, ShowcaseBuilder,
    ShowcaseConfig,
};

/// Dimensions that land in each aspect class, plus unknown sizes.
fn dims_strategy() -> impl Strategy<Value = Option<(u32, u32)>> {
    prop_oneof![
        Just(None),
        (400u32..4000, 400u32..4000).prop_map(Some),
        (1200u32..4000).prop_map(|w| Some((w, w * 2 / 3))),
        (1200u32..4000).prop_map(|h| Some((h * 2 / 3, h))),
        (400u32..4000).prop_map(|s| Some((s, s))),
    ]
}

fn photos_strategy(max: usize) -> impl Strategy<Value = Vec<PhotoDescriptor>> {
    prop::collection::vec(dims_strategy(), 0..max).prop_map(|dims| {
        dims.into_iter()
            .enumerate()
            .map(|(i, d)| {
                let p = PhotoDescriptor::new(format!("/photos/{i:03}.jpg"));
                match d {
                    Some((w, h)) => p.dimensions(w, h),
                    None => p,
                }
            })
            .collect()
    })
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9-]{0,24}"
}

fn placed_urls(panels: &[Panel<PhotoDescriptor>]) -> Vec<&str> {
    panels
        .iter()
        .flat_map(|p| p.slots())
        .map(|s| s.photo.url.as_str())
        .collect()
}

proptest! {
    #[test]
    fn same_input_same_layout(photos in photos_strategy(40), key in key_strategy()) {
        let builder = ShowcaseBuilder::default();
        prop_assert_eq!(builder.build(&photos, &key), builder.build(&photos, &key));
    }

    #[test]
    fn every_photo_placed_once_in_order(photos in photos_strategy(60), key in key_strategy()) {
        let panels = ShowcaseBuilder::default().build(&photos, &key);
        let expected: Vec<&str> = photos.iter().map(|p| p.url.as_str()).collect();
        prop_assert_eq!(placed_urls(&panels), expected);
    }

    #[test]
    fn slots_stay_inside_safe_area(photos in photos_strategy(60), key in key_strategy()) {
        for panel in ShowcaseBuilder::default().build(&photos, &key) {
            for s in panel.slots() {
                prop_assert!((65.0..=96.0).contains(&s.x), "x {}", s.x);
                prop_assert!((18.0..=82.0).contains(&s.y), "y {}", s.y);
                prop_assert!(s.w >= 10.0 && s.w <= 50.0, "w {}", s.w);
                prop_assert!(s.h >= 15.0 && s.h <= 80.0, "h {}", s.h);
                // x and w are each rounded half away from zero after clipping,
                // so a clipped pair can overshoot the edge by one 0.01 step
                // (70.125 + 25.875 becomes 70.13 + 25.88).
                prop_assert!(s.x + s.w <= 96.0 + 0.011, "right edge {}", s.x + s.w);
                prop_assert!(s.y + s.h <= 82.0 + 0.011, "bottom edge {}", s.y + s.h);
                prop_assert!(s.rot.abs() <= 3.0 + 1e-9, "rot {}", s.rot);
            }
        }
    }

    #[test]
    fn geometry_rounded_to_hundredths(photos in photos_strategy(30), key in key_strategy()) {
        for panel in ShowcaseBuilder::default().build(&photos, &key) {
            for s in panel.slots() {
                for v in [s.x, s.y, s.w, s.h, s.rot] {
                    let scaled = v * 100.0;
                    prop_assert!((scaled - scaled.round()).abs() < 1e-6, "{v} not rounded");
                }
            }
        }
    }

    #[test]
    fn text_cards_never_lead_or_repeat(photos in photos_strategy(60), key in key_strategy()) {
        let panels = ShowcaseBuilder::default().build(&photos, &key);
        if let Some(first) = panels.first() {
            prop_assert!(!first.is_text_card());
        }
        for pair in panels.windows(2) {
            prop_assert!(!(pair[0].is_text_card() && pair[1].is_text_card()));
        }
    }

    #[test]
    fn text_cards_come_from_palette(photos in photos_strategy(60), key in key_strategy()) {
        let config = ShowcaseConfig::default();
        for panel in ShowcaseBuilder::default().build(&photos, &key) {
            if let Some(card) = panel.as_text_card() {
                prop_assert!(config.cards.palette.contains(&card.color));
                prop_assert!(config.cards.widths.contains(&card.width));
                prop_assert!(config.cards.heights.contains(&card.height));
                prop_assert!(config.cards.xs.contains(&card.x));
                prop_assert!(config.cards.ys.contains(&card.y));
            }
        }
    }

    #[test]
    fn panels_match_their_pattern(photos in photos_strategy(40), key in key_strategy()) {
        for panel in ShowcaseBuilder::default().build(&photos, &key) {
            let Some(photo_panel) = panel.as_photo_panel() else { continue };
            let pattern = REFERENCE_PATTERNS
                .iter()
                .find(|p| p.name == photo_panel.layout)
                .expect("layout names a catalog pattern");
            prop_assert_eq!(photo_panel.slots.len(), pattern.slots_needed());
            for (slot, template) in photo_panel.slots.iter().zip(pattern.slots) {
                prop_assert_eq!(slot.z, template.z);
            }
        }
    }

    #[test]
    fn preferred_aspect_respected(photos in photos_strategy(40), key in key_strategy()) {
        let panels = ShowcaseBuilder::default().build(&photos, &key);
        let mut consumed = 0;
        for panel in &panels {
            let Some(photo_panel) = panel.as_photo_panel() else { continue };
            let dominant = AspectClass::dominant(
                photos[consumed..].iter().take(4).map(|p| p.aspect()),
            );
            let pattern = REFERENCE_PATTERNS
                .iter()
                .find(|p| p.name == photo_panel.layout)
                .unwrap();
            // Only portraits or landscapes can exclude a pattern; every size
            // has an Any pattern that fits, so the preferred pool is never empty.
            prop_assert!(
                pattern.preferred_aspect.accepts(dominant),
                "{} chosen for {:?}",
                pattern.name,
                dominant
            );
            consumed += photo_panel.slots.len();
        }
    }
}

#[test]
fn empty_input_empty_output() {
    let panels = ShowcaseBuilder::default().build::<PhotoDescriptor>(&[], "anything");
    assert!(panels.is_empty());
}

#[test]
fn single_photo_any_key() {
    let photo = [PhotoDescriptor::new("/photos/only.jpg").dimensions(1200, 800)];
    for key in ["", "a", "solo", "test-album-2024", "north-coast"] {
        let panels = ShowcaseBuilder::default().build(&photo, key);
        assert_eq!(panels.len(), 1, "key {key:?}");
        assert_eq!(panels[0].photo_count(), 1);
        assert!(!panels[0].is_text_card());
    }
}

#[test]
fn seed_keys_spread_layouts() {
    let photos: Vec<_> = (0..24)
        .map(|i| PhotoDescriptor::new(format!("/photos/{i:02}.jpg")).dimensions(1200, 800))
        .collect();
    let builder = ShowcaseBuilder::default();
    let layouts: Vec<Vec<&str>> = (0..16)
        .map(|i| {
            builder
                .build(&photos, &format!("album-{i}"))
                .iter()
                .map(|p| p.layout())
                .collect()
        })
        .collect();
    let mut distinct = layouts.clone();
    distinct.sort();
    distinct.dedup();
    assert!(distinct.len() > 8, "only {} distinct layouts", distinct.len());
}
