//! SVG visualization of a showcase layout.
//!
//! Draws each panel as a 16:9 viewport frame, top to bottom in showcase
//! order: photo slots as rotated, z-ordered boxes labelled with their photo
//! index, text cards as filled rectangles in their card color. Useful for
//! eyeballing pattern geometry and jitter without a front end.
//!
//! # Example
//!
//! ```
//! use zenshowcase::{PhotoDescriptor, ShowcaseBuilder, svg::render_showcase_svg};
//!
//! let photos: Vec<_> = (0..6)
//!     .map(|i| PhotoDescriptor::new(format!("/p/{i}.jpg")).dimensions(1200, 800))
//!     .collect();
//! let panels = ShowcaseBuilder::default().build(&photos, "harbour-series");
//!
//! let svg = render_showcase_svg(&panels);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::panel::{Panel, Slot, TextCard};

/// Frame width for one panel.
const FRAME_W: f64 = 320.0;
/// Frame height for one panel (16:9).
const FRAME_H: f64 = 180.0;
/// Vertical gap between frames.
const FRAME_GAP: f64 = 24.0;
/// Horizontal margin.
const MARGIN_X: f64 = 40.0;
/// Top and bottom margin.
const MARGIN_Y: f64 = 24.0;
/// Height of label text area above each frame.
const LABEL_H: f64 = 22.0;

/// Render a complete SVG document for a panel sequence.
///
/// Slots are drawn in ascending z within each panel, so overlaps look the
/// way the front end stacks them.
pub fn render_showcase_svg<P>(panels: &[Panel<P>]) -> String {
    if panels.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let total_w = FRAME_W + 2.0 * MARGIN_X;
    let n = panels.len() as f64;
    let total_h = 2.0 * MARGIN_Y + n * (LABEL_H + FRAME_H) + (n - 1.0) * FRAME_GAP;

    let mut svg = String::with_capacity(1024 + panels.len() * 512);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light and dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .index { font-size: 10px; fill: #fff; }
  .frame { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .safe { fill: none; stroke: #bbb; stroke-width: 0.75; stroke-dasharray: 3,2; }
  .slot { fill: #6ba3d6; fill-opacity: 0.85; stroke: #2c6faa; stroke-width: 1.2; }
  .card { stroke: #333; stroke-width: 0.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .frame { fill: #2d2d2d; stroke: #555; }
    .safe { stroke: #666; }
    .slot { fill: #3a72a4; stroke: #5a9fd4; }
    .card { stroke: #aaa; }
  }
</style>
"##,
    );

    let center_x = total_w / 2.0;
    let mut y = MARGIN_Y;
    let mut placed = 0usize;

    for (i, panel) in panels.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel_label(i, panel))
        ));
        svg.push('\n');
        y += LABEL_H;

        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="frame" rx="2"/>"#,
            MARGIN_X, y, FRAME_W, FRAME_H
        ));
        svg.push('\n');

        match panel {
            Panel::Photo(photo_panel) => {
                render_safe_area(&mut svg, y);
                let mut order: Vec<(usize, &Slot<P>)> =
                    photo_panel.slots.iter().enumerate().collect();
                order.sort_by_key(|(_, slot)| slot.z);
                for (k, slot) in order {
                    render_slot(&mut svg, y, slot, placed + k + 1);
                }
                placed += photo_panel.slots.len();
            }
            Panel::TextCard(card) => render_card(&mut svg, y, card),
        }

        y += FRAME_H + FRAME_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

fn panel_label<P>(index: usize, panel: &Panel<P>) -> String {
    match panel {
        Panel::Photo(p) => {
            let noun = if p.slots.len() == 1 { "photo" } else { "photos" };
            format!("{}  {}  ({} {noun})", index + 1, p.layout, p.slots.len())
        }
        Panel::TextCard(card) => {
            format!("{}  text_card  {} {}×{}%", index + 1, card.color, card.width, card.height)
        }
    }
}

/// Dashed outline of the region slot origins are clamped to (x 65–92, y 18–82).
fn render_safe_area(svg: &mut String, frame_y: f64) {
    let (x, y) = to_frame(65.0, 18.0, frame_y);
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="safe"/>"#,
        x,
        y,
        pct_w(31.0),
        pct_h(64.0)
    ));
    svg.push('\n');
}

fn render_slot<P>(svg: &mut String, frame_y: f64, slot: &Slot<P>, number: usize) {
    let (x, y) = to_frame(slot.x, slot.y, frame_y);
    let (w, h) = (pct_w(slot.w), pct_h(slot.h));
    let (cx, cy) = (x + w / 2.0, y + h / 2.0);
    svg.push_str(&format!(
        r#"<g transform="rotate({:.2} {:.1} {:.1})"><rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="slot"/><text x="{:.1}" y="{:.1}" class="index" text-anchor="middle">{}</text></g>"#,
        slot.rot, cx, cy, x, y, w, h, cx, cy + 3.5, number
    ));
    svg.push('\n');
}

fn render_card(svg: &mut String, frame_y: f64, card: &TextCard) {
    let (x, y) = to_frame(card.x as f64, card.y as f64, frame_y);
    // Cards may extend past the frame; keep the drawing inside it.
    let w = pct_w(card.width as f64).min(MARGIN_X + FRAME_W - x);
    let h = pct_h(card.height as f64).min(frame_y + FRAME_H - y);
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="card" fill="{}"/>"#,
        x, y, w, h, card.color
    ));
    svg.push('\n');
}

/// Percent coordinates to SVG coordinates within the frame at `frame_y`.
fn to_frame(x_pct: f64, y_pct: f64, frame_y: f64) -> (f64, f64) {
    (MARGIN_X + pct_w(x_pct), frame_y + pct_h(y_pct))
}

fn pct_w(pct: f64) -> f64 {
    FRAME_W * pct / 100.0
}

fn pct_h(pct: f64) -> f64 {
    FRAME_H * pct / 100.0
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
