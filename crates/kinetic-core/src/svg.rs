// File: crates/kinetic-core/src/svg.rs
// Summary: SVG output for the same snapshots the canvas renderer paints:
// one path per category, circles plus a cursor guide for cross-sections.

use std::fmt::Write as _;

use crate::color::to_hex;
use crate::error::ChartError;
use crate::render::RenderOptions;
use crate::snapshot::{ScaledPoint, Snapshot};

/// Polyline path data ("M x,y L x,y ...") for one category's ordered points.
/// Empty for fewer than one point.
pub fn path_data(points: &[ScaledPoint]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{},{}", cmd, fmt(p.x), fmt(p.y));
    }
    d
}

/// Standalone SVG document mirroring `CanvasRenderer::draw_frame` layering:
/// line paths first, then the cursor guide and cross-section markers.
pub fn render_document(
    lines: Option<&Snapshot>,
    points: Option<&Snapshot>,
    opts: &RenderOptions,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        opts.width, opts.height, opts.width, opts.height
    );
    let _ = writeln!(
        out,
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        to_hex(opts.theme.background)
    );

    if let Some(snapshot) = lines {
        for pts in snapshot.data.values() {
            if pts.len() < 2 {
                continue;
            }
            let _ = writeln!(
                out,
                "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                path_data(pts),
                to_hex(pts[0].color),
                opts.line_width
            );
        }
    }

    if let Some(snapshot) = points {
        if let Some(x) = snapshot.cursor_x() {
            let _ = writeln!(
                out,
                "  <line x1=\"{x}\" y1=\"{}\" x2=\"{x}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
                opts.margin.top,
                opts.height - opts.margin.bottom as i32,
                to_hex(opts.theme.cursor),
                x = fmt(x)
            );
        }
        for pts in snapshot.data.values() {
            for p in pts {
                let _ = writeln!(
                    out,
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                    fmt(p.x),
                    fmt(p.y),
                    opts.point_radius,
                    to_hex(p.color)
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

/// Write the SVG document to disk, creating parent directories.
pub fn write_svg(
    lines: Option<&Snapshot>,
    points: Option<&Snapshot>,
    opts: &RenderOptions,
    path: impl AsRef<std::path::Path>,
) -> Result<(), ChartError> {
    let doc = render_document(lines, points, opts);
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, doc)?;
    Ok(())
}

fn fmt(v: f32) -> String {
    // One decimal place keeps documents compact and stable.
    format!("{v:.1}")
}
