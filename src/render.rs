//! SVG output: the handle illustration and the four-axis radar polygon.

use crate::core_types::{Material, ToolParameters};
use crate::scorer::ErgonomicMetrics;
use std::fmt::Write;

const RADAR_CENTER: f32 = 50.0;
const RADAR_SCALE: f32 = 2.2;

// Handle pivot inside the 500x400 canvas
const PIVOT_X: f32 = 300.0;
const PIVOT_Y: f32 = 200.0;
const RING_OFFSET: f32 = 10.0;

/// Contact pressure (kPa) above which the finger-ring sensors light up.
pub const PRESSURE_ALARM_KPA: f32 = 80.0;

/// Vertices in order comfort (up), precision (right), stability (down), score (left).
pub fn radar_points(m: &ErgonomicMetrics) -> [(f32, f32); 4] {
    let c = RADAR_CENTER;
    [
        (c, c - m.comfort / RADAR_SCALE),
        (c + m.precision / RADAR_SCALE, c),
        (c, c + m.stability / RADAR_SCALE),
        (c - m.score / RADAR_SCALE, c),
    ]
}

pub fn radar_svg(m: &ErgonomicMetrics) -> String {
    let points = radar_points(m)
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    let _ = writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">"#);
    for r in [15.0f32, 30.0, 45.0] {
        let _ = writeln!(
            out,
            r##"  <circle cx="50" cy="50" r="{}" fill="none" stroke="#cbd5e1" stroke-width="0.5"/>"##,
            r
        );
    }
    let _ = writeln!(
        out,
        r##"  <polygon points="{}" fill="#6366f1" fill-opacity="0.4" stroke="#4f46e5" stroke-width="1"/>"##,
        points
    );
    out.push_str("</svg>\n");
    out
}

fn gradient_stops(material: Material) -> (&'static str, &'static str) {
    match material {
        Material::Polymer => ("#e2e8f0", "#cbd5e1"),
        Material::Silicone => ("#a5b4fc", "#6366f1"),
        Material::Steel => ("#94a3b8", "#475569"),
    }
}

fn handle_outline(p: &ToolParameters) -> String {
    let r = p.diameter / 2.0;
    let l = p.handle_length;
    format!("M 0,-{r} L {l},-{r} L {l},{r} L 0,{r} Z")
}

/// The 500x400 tool illustration. `baseline` adds a dashed ghost for comparison;
/// `metrics` past [`PRESSURE_ALARM_KPA`] add pulsing sensor markers at the rings.
pub fn handle_svg(
    p: &ToolParameters,
    metrics: &ErgonomicMetrics,
    baseline: Option<&ToolParameters>,
) -> String {
    let (top, bottom) = gradient_stops(p.material);
    let mut out = String::new();

    let _ = writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 500 400">"#);
    let _ = writeln!(
        out,
        r#"  <defs><linearGradient id="bodyGrad" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{top}"/><stop offset="100%" stop-color="{bottom}"/></linearGradient></defs>"#
    );

    if let Some(b) = baseline {
        let _ = writeln!(
            out,
            r#"  <g transform="translate({PIVOT_X}, {PIVOT_Y}) rotate({})" opacity="0.3">"#,
            b.curvature
        );
        let _ = writeln!(
            out,
            r##"    <path d="{}" fill="none" stroke="#ef4444" stroke-width="2" stroke-dasharray="5,5"/>"##,
            handle_outline(b)
        );
        for cy in [-b.diameter / 2.0, b.diameter / 2.0] {
            let _ = writeln!(
                out,
                r##"    <circle cx="{}" cy="{}" r="{}" fill="none" stroke="#ef4444" stroke-width="2" stroke-dasharray="5,5"/>"##,
                b.handle_length + RING_OFFSET,
                cy,
                b.diameter
            );
        }
        out.push_str("  </g>\n");
    }

    // Shaft and jaws
    out.push_str(r##"  <g transform="translate(50, 200)"><rect x="0" y="-4" width="250" height="8" fill="#64748b" rx="2"/><path d="M 0,0 L -35,-15" stroke="#64748b" stroke-width="4"/><path d="M 0,0 L -35,15" stroke="#64748b" stroke-width="4"/></g>"##);
    out.push('\n');

    let _ = writeln!(
        out,
        r#"  <g transform="translate({PIVOT_X}, {PIVOT_Y}) rotate({})">"#,
        p.curvature
    );
    out.push_str(r##"    <rect x="-20" y="-10" width="20" height="20" fill="#475569"/>"##);
    out.push('\n');
    let _ = writeln!(
        out,
        r##"    <path d="{}" fill="url(#bodyGrad)" stroke="#334155" stroke-width="1"/>"##,
        handle_outline(p)
    );
    for cy in [-p.diameter / 2.0, p.diameter / 2.0] {
        let _ = writeln!(
            out,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="none" stroke="url(#bodyGrad)" stroke-width="6"/>"#,
            p.handle_length + RING_OFFSET,
            cy,
            p.diameter
        );
    }
    if metrics.pressure > PRESSURE_ALARM_KPA {
        for cy in [-(p.diameter / 2.0 + p.diameter), p.diameter / 2.0 + p.diameter] {
            let _ = writeln!(
                out,
                r##"    <circle class="sensor" cx="{}" cy="{}" r="5" fill="#ef4444"><animate attributeName="opacity" values="1;0.3;1" dur="1s" repeatCount="indefinite"/></circle>"##,
                p.handle_length + RING_OFFSET,
                cy
            );
        }
    }
    out.push_str("  </g>\n</svg>\n");
    out
}
