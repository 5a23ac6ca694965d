// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for chart frames (PNG bytes / files).

pub mod text;

use anyhow::Result;
use balance_chart_core::geometry::{Point, RectF};
use balance_chart_core::scene::{Frame, Layer, Scene, TextAnchor};
use balance_chart_core::spline::{PathCommand, PathData};
use balance_chart_core::theme::Rgba;
use skia_safe as skia;
use tracing::debug;

pub use text::TextShaper;

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn rect(r: &RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn to_skia_path(data: &PathData) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in data.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => { path.move_to(pt(p)); }
            PathCommand::LineTo(p) => { path.line_to(pt(p)); }
            PathCommand::CurveTo { c1, c2, to } => { path.cubic_to(pt(c1), pt(c2), pt(to)); }
            PathCommand::Close => { path.close(); }
        }
    }
    path
}

pub struct SkiaRenderer {
    text: TextShaper,
    label_size: f32,
}

impl SkiaRenderer {
    pub fn new(label_size: f32) -> Self {
        Self { text: TextShaper::new(), label_size }
    }

    /// Rasterize `frame` and return RGBA8 pixels plus (width, height).
    pub fn render_to_rgba8(&self, frame: &Frame) -> Result<(Vec<u8>, i32, i32)> {
        let (w, h) = frame.size();
        let (w, h) = (w.ceil().max(1.0) as i32, h.ceil().max(1.0) as i32);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let mut surface = skia::surfaces::raster(&info, None, None)
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint_frame(surface.canvas(), frame);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((pixels, w, h))
    }

    /// Rasterize `frame` to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, frame: &Frame) -> Result<Vec<u8>> {
        let (w, h) = frame.size();
        let (w, h) = (w.ceil().max(1.0) as i32, h.ceil().max(1.0) as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint_frame(surface.canvas(), frame);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(width = w, height = h, bytes = data.len(), "frame rasterized");
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, frame: &Frame, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(frame)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn paint_frame(&self, canvas: &skia::Canvas, frame: &Frame) {
        canvas.clear(color(frame.background()));
        match frame {
            Frame::Placeholder(p) => {
                self.text.draw(
                    canvas,
                    &p.message,
                    (p.width * 0.5) as f32,
                    (p.height * 0.5) as f32,
                    self.label_size,
                    color(p.color),
                    TextAnchor::Middle,
                );
            }
            Frame::Chart(scene) => self.paint_scene(canvas, scene),
        }
    }

    fn paint_scene(&self, canvas: &skia::Canvas, scene: &Scene) {
        for layer in &scene.layers {
            match layer {
                Layer::GridLine { from, to, color: c } => {
                    let mut paint = skia::Paint::default();
                    paint.set_color(color(*c));
                    paint.set_anti_alias(true);
                    paint.set_stroke_width(1.0);
                    canvas.draw_line(pt(*from), pt(*to), &paint);
                }
                Layer::ValueLabel { at, text, color: c, anchor } | Layer::DateLabel { at, text, color: c, anchor } => {
                    self.text.draw(canvas, text, at.x as f32, at.y as f32, self.label_size, color(*c), *anchor);
                }
                Layer::AreaFill { path, gradient, clip } => {
                    let colors = [color(gradient.start), color(gradient.end)];
                    let shader = skia::gradient_shader::linear(
                        (pt(gradient.from), pt(gradient.to)),
                        &colors[..],
                        None,
                        skia::TileMode::Clamp,
                        None,
                        None,
                    );
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_style(skia::paint::Style::Fill);
                    paint.set_shader(shader);
                    canvas.save();
                    canvas.clip_rect(rect(clip), skia::ClipOp::Intersect, true);
                    canvas.draw_path(&to_skia_path(path), &paint);
                    canvas.restore();
                }
                Layer::Stroke { path, color: c, width, clip } => {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_style(skia::paint::Style::Stroke);
                    paint.set_stroke_width(*width as f32);
                    paint.set_stroke_cap(skia::paint::Cap::Round);
                    paint.set_color(color(*c));
                    canvas.save();
                    canvas.clip_rect(rect(clip), skia::ClipOp::Intersect, true);
                    canvas.draw_path(&to_skia_path(path), &paint);
                    canvas.restore();
                }
                Layer::GuideLine { from, to, color: c, width } => {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_stroke_width(*width as f32);
                    paint.set_color(color(*c));
                    paint.set_path_effect(skia::PathEffect::dash(&[4.0, 4.0], 0.0));
                    canvas.draw_line(pt(*from), pt(*to), &paint);
                }
                Layer::Marker { center, outer_radius, inner_radius, outer, inner } => {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_color(color(*outer));
                    canvas.draw_circle(pt(*center), *outer_radius as f32, &paint);
                    paint.set_color(color(*inner));
                    canvas.draw_circle(pt(*center), *inner_radius as f32, &paint);
                }
                Layer::HoverMarker { center, radius, color: c } => {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_color(color(*c));
                    canvas.draw_circle(pt(*center), *radius as f32, &paint);
                }
            }
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(11.0) }
}
