// File: crates/kinetic-core/src/render.rs
// Summary: Skia CPU-raster canvas renderer: clear, polylines, cross-section
// markers with cursor guide, plus whole-frame PNG/RGBA helpers.

use skia_safe as skia;

use crate::error::ChartError;
use crate::scale::Scales;
use crate::snapshot::Snapshot;
use crate::theme::Theme;
use crate::types::{Margin, HEIGHT, LINE_WIDTH, POINT_RADIUS, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub margin: Margin,
    pub theme: Theme,
    pub line_width: f32,
    pub point_radius: f32,
    /// Axis captions; disable for pixel-deterministic tests (font variance).
    pub draw_labels: bool,
    pub x_label: String,
    pub y_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margin: Margin::default(),
            theme: Theme::dark(),
            line_width: LINE_WIDTH,
            point_radius: POINT_RADIUS,
            draw_labels: true,
            x_label: "Year".to_string(),
            y_label: "Value".to_string(),
        }
    }
}

/// Paints snapshots onto a Skia canvas. Owns no surface; hosts and workers
/// each pair one renderer with the surface their context owns.
#[derive(Clone, Debug)]
pub struct CanvasRenderer {
    pub opts: RenderOptions,
}

impl CanvasRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    pub fn clear(&self, canvas: &skia::Canvas) {
        canvas.clear(self.opts.theme.background);
    }

    /// One stroked polyline per category in its series color. Categories with
    /// fewer than two points draw nothing.
    pub fn draw_lines(&self, canvas: &skia::Canvas, snapshot: &Snapshot) {
        for points in snapshot.data.values() {
            if points.len() < 2 {
                continue;
            }
            let mut path = skia::Path::new();
            path.move_to((points[0].x, points[0].y));
            for p in &points[1..] {
                path.line_to((p.x, p.y));
            }
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(self.opts.line_width);
            stroke.set_color(points[0].color);
            canvas.draw_path(&path, &stroke);
        }
    }

    /// Filled circles for every point; a cross-section additionally gets one
    /// vertical guide line at the shared x, painted beneath the markers.
    pub fn draw_points(&self, canvas: &skia::Canvas, snapshot: &Snapshot) {
        if let Some(x) = snapshot.cursor_x() {
            self.draw_cursor_line(canvas, x);
        }
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        for points in snapshot.data.values() {
            for p in points {
                fill.set_color(p.color);
                canvas.draw_circle((p.x, p.y), self.opts.point_radius, &fill);
            }
        }
    }

    fn draw_cursor_line(&self, canvas: &skia::Canvas, x: f32) {
        let m = self.opts.margin;
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(self.opts.theme.cursor);
        canvas.draw_line(
            (x, m.top as f32),
            (x, (self.opts.height - m.bottom as i32) as f32),
            &stroke,
        );
    }

    /// Full frame: background, grid, axes (with tick marks when scales are
    /// given), then the snapshots.
    pub fn draw_frame(
        &self,
        canvas: &skia::Canvas,
        scales: Option<&Scales>,
        lines: Option<&Snapshot>,
        points: Option<&Snapshot>,
    ) {
        self.clear(canvas);
        self.draw_grid(canvas);
        self.draw_axes(canvas, scales);
        if let Some(s) = lines {
            self.draw_lines(canvas, s);
        }
        if let Some(s) = points {
            self.draw_points(canvas, s);
        }
    }

    fn plot_rect(&self) -> (f32, f32, f32, f32) {
        let m = self.opts.margin;
        (
            m.left as f32,
            m.top as f32,
            (self.opts.width - m.right as i32) as f32,
            (self.opts.height - m.bottom as i32) as f32,
        )
    }

    fn draw_grid(&self, canvas: &skia::Canvas) {
        let (l, t, r, b) = self.plot_rect();
        let mut paint = skia::Paint::default();
        paint.set_color(self.opts.theme.grid);
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.0);

        for x in linspace(l as f64, r as f64, 10) {
            canvas.draw_line((x as f32, t), (x as f32, b), &paint);
        }
        for y in linspace(t as f64, b as f64, 6) {
            canvas.draw_line((l, y as f32), (r, y as f32), &paint);
        }
    }

    fn draw_axes(&self, canvas: &skia::Canvas, scales: Option<&Scales>) {
        let (l, t, r, b) = self.plot_rect();
        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(self.opts.theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.5);

        canvas.draw_line((l, b), (r, b), &axis_paint);
        canvas.draw_line((l, t), (l, b), &axis_paint);

        if let Some(scales) = scales {
            self.draw_ticks(canvas, scales);
        }

        if !self.opts.draw_labels {
            return;
        }
        let mut paint_text = skia::Paint::default();
        paint_text.set_color(self.opts.theme.axis_label);
        let mut font = skia::Font::default();
        font.set_size(14.0);

        canvas.draw_str(&self.opts.x_label, (r - 60.0, b + 24.0), &font, &paint_text);
        canvas.draw_str(&self.opts.y_label, (l - 56.0, t + 14.0), &font, &paint_text);
    }

    /// Tick marks at the scales' round values: short strokes below the x axis
    /// and left of the y axis, with value labels when captions are enabled.
    fn draw_ticks(&self, canvas: &skia::Canvas, scales: &Scales) {
        let (l, _, _, b) = self.plot_rect();
        let mut tick_paint = skia::Paint::default();
        tick_paint.set_color(self.opts.theme.tick);
        tick_paint.set_anti_alias(true);
        tick_paint.set_stroke_width(1.0);
        let mut label_paint = skia::Paint::default();
        label_paint.set_color(self.opts.theme.axis_label);
        let mut font = skia::Font::default();
        font.set_size(11.0);

        for v in scales.x.ticks(10) {
            let x = scales.x.apply(v);
            canvas.draw_line((x, b), (x, b + 6.0), &tick_paint);
            if self.opts.draw_labels {
                canvas.draw_str(&format!("{v}"), (x - 12.0, b + 18.0), &font, &label_paint);
            }
        }
        for v in scales.y.ticks(6) {
            let y = scales.y.apply(v);
            canvas.draw_line((l - 6.0, y), (l, y), &tick_paint);
            if self.opts.draw_labels {
                canvas.draw_str(&format!("{v}"), (l - 36.0, y + 4.0), &font, &label_paint);
            }
        }
    }

    fn raster_surface(&self) -> Result<skia::Surface, ChartError> {
        skia::surfaces::raster_n32_premul((self.opts.width, self.opts.height)).ok_or(
            ChartError::Surface { width: self.opts.width, height: self.opts.height },
        )
    }

    /// Render one frame to an RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(
        &self,
        scales: Option<&Scales>,
        lines: Option<&Snapshot>,
        points: Option<&Snapshot>,
    ) -> Result<(Vec<u8>, i32, i32, usize), ChartError> {
        let mut surface = self.raster_surface()?;
        self.draw_frame(surface.canvas(), scales, lines, points);

        let (w, h) = (self.opts.width, self.opts.height);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Encode { format: "rgba8" });
        }
        Ok((pixels, w, h, stride))
    }

    /// Render one frame to in-memory PNG bytes.
    pub fn render_to_png_bytes(
        &self,
        scales: Option<&Scales>,
        lines: Option<&Snapshot>,
        points: Option<&Snapshot>,
    ) -> Result<Vec<u8>, ChartError> {
        let mut surface = self.raster_surface()?;
        self.draw_frame(surface.canvas(), scales, lines, points);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode { format: "png" })?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render one frame to a PNG file, creating parent directories.
    pub fn render_to_png(
        &self,
        scales: Option<&Scales>,
        lines: Option<&Snapshot>,
        points: Option<&Snapshot>,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes(scales, lines, points)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
