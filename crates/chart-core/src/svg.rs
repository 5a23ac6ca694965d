// File: crates/chart-core/src/svg.rs
// Summary: Serialize a rendered frame into a standalone SVG document.

use std::fmt::Write as _;

use crate::geometry::RectF;
use crate::scene::{Frame, Layer, TextAnchor};
use crate::theme::Rgba;

fn anchor(a: TextAnchor) -> &'static str {
    match a {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn paint(attr: &str, c: Rgba) -> String {
    if c.a == 255 {
        format!(r#"{attr}="{c}""#)
    } else {
        format!(r#"{attr}="{c}" {attr}-opacity="{:.3}""#, c.opacity())
    }
}

fn clip_def(out: &mut String, id: &str, r: &RectF) {
    let _ = write!(
        out,
        r#"<clipPath id="{id}"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/></clipPath>"#,
        r.left,
        r.top,
        r.width(),
        r.height()
    );
}

/// SVG text for `frame`. Layers are written in scene order, so document
/// order matches paint order.
pub fn frame_to_svg(frame: &Frame, label_size: f64) -> String {
    let (w, h) = frame.size();
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = write!(out, r#"<rect width="100%" height="100%" {}/>"#, paint("fill", frame.background()));

    let scene = match frame {
        Frame::Placeholder(p) => {
            let _ = write!(
                out,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-family="sans-serif" font-size="{label_size}" {}>{}</text>"#,
                w / 2.0,
                h / 2.0,
                paint("fill", p.color),
                escape(&p.message)
            );
            out.push_str("</svg>");
            return out;
        }
        Frame::Chart(scene) => scene,
    };

    for (i, layer) in scene.layers.iter().enumerate() {
        match layer {
            Layer::GridLine { from, to, color } => {
                let _ = write!(
                    out,
                    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke-width="1" {}/>"#,
                    from.x, from.y, to.x, to.y, paint("stroke", *color)
                );
            }
            Layer::ValueLabel { at, text, color, anchor: a } | Layer::DateLabel { at, text, color, anchor: a } => {
                let _ = write!(
                    out,
                    r#"<text x="{:.2}" y="{:.2}" text-anchor="{}" font-family="sans-serif" font-size="{label_size}" {}>{}</text>"#,
                    at.x,
                    at.y,
                    anchor(*a),
                    paint("fill", *color),
                    escape(text)
                );
            }
            Layer::AreaFill { path, gradient, clip } => {
                let (grad_id, clip_id) = (format!("fill{i}"), format!("clip{i}"));
                out.push_str("<defs>");
                let _ = write!(
                    out,
                    r#"<linearGradient id="{grad_id}" gradientUnits="userSpaceOnUse" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"><stop offset="0" stop-color="{}" stop-opacity="{:.3}"/><stop offset="1" stop-color="{}" stop-opacity="{:.3}"/></linearGradient>"#,
                    gradient.from.x,
                    gradient.from.y,
                    gradient.to.x,
                    gradient.to.y,
                    gradient.start,
                    gradient.start.opacity(),
                    gradient.end,
                    gradient.end.opacity()
                );
                clip_def(&mut out, &clip_id, clip);
                out.push_str("</defs>");
                let _ = write!(out, r#"<path d="{path}" fill="url(#{grad_id})" clip-path="url(#{clip_id})"/>"#);
            }
            Layer::Stroke { path, color, width, clip } => {
                let clip_id = format!("clip{i}");
                out.push_str("<defs>");
                clip_def(&mut out, &clip_id, clip);
                out.push_str("</defs>");
                let _ = write!(
                    out,
                    r#"<path d="{path}" fill="none" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round" {} clip-path="url(#{clip_id})"/>"#,
                    paint("stroke", *color)
                );
            }
            Layer::GuideLine { from, to, color, width } => {
                let _ = write!(
                    out,
                    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke-width="{width}" stroke-dasharray="4 4" {}/>"#,
                    from.x, from.y, to.x, to.y, paint("stroke", *color)
                );
            }
            Layer::Marker { center, outer_radius, inner_radius, outer, inner } => {
                let _ = write!(
                    out,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{outer_radius}" {}/><circle cx="{:.2}" cy="{:.2}" r="{inner_radius}" {}/>"#,
                    center.x, center.y, paint("fill", *outer), center.x, center.y, paint("fill", *inner)
                );
            }
            Layer::HoverMarker { center, radius, color } => {
                let _ = write!(
                    out,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{radius}" {}/>"#,
                    center.x, center.y, paint("fill", *color)
                );
            }
        }
    }
    out.push_str("</svg>");
    out
}
