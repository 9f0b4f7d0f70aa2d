/*
 * Renderer Module
 *
 * This module turns the draw commands recorded for a frame into nannou
 * draw calls. Surface space (top-left origin, y down) is mapped into
 * nannou's centered, y-up window space, and every alpha is scaled by
 * the layer opacity so the field sits faintly behind page content.
 *
 * nannou has no shadow blur, so a particle's glow is drawn as a few
 * faint concentric halos out to the blur radius, under the particle
 * itself. Each circle command carries its own blur, so a halo is only
 * ever drawn for the particle it belongs to.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::debug;
use crate::surface::{CircleStyle, DrawCommand, DrawList, LineStyle, SurfaceSize};

// Page background behind the field
pub const PAGE_BACKGROUND: (u8, u8, u8) = (11, 17, 32);

const HALO_RINGS: usize = 4;
const HALO_ALPHA: f32 = 0.08;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    let (r, g, b) = PAGE_BACKGROUND;
    draw.background().color(rgb(r, g, b));

    // An unmounted background draws nothing, whatever the list still holds
    if model.background.is_some() {
        draw_list(&draw, &model.draw_list, model.params.layer_opacity);
    }

    if model.show_debug {
        debug::draw_debug_info(&draw, &model.debug_info, app.window_rect());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::error!(error = ?err, "failed to submit frame");
    }
}

// Replay a recorded frame
pub fn draw_list(draw: &Draw, list: &DrawList, opacity: f32) {
    let Some(size) = list.size() else {
        return;
    };

    for command in list.commands() {
        match command {
            DrawCommand::Clear(_) => {}
            DrawCommand::Line { from, to, style } => draw_line(draw, size, *from, *to, style, opacity),
            DrawCommand::Circle { center, radius, style } => {
                draw_circle(draw, size, *center, *radius, style, opacity)
            }
        }
    }
}

fn draw_line(draw: &Draw, size: SurfaceSize, from: Vec2, to: Vec2, style: &LineStyle, opacity: f32) {
    draw.line()
        .start(size.to_window(from))
        .end(size.to_window(to))
        .weight(style.width)
        .color(with_alpha(style.color, style.alpha * opacity));
}

fn draw_circle(draw: &Draw, size: SurfaceSize, center: Vec2, radius: f32, style: &CircleStyle, opacity: f32) {
    let position = size.to_window(center);

    if style.blur > 0.0 {
        for ring in (1..=HALO_RINGS).rev() {
            let spread = style.blur * ring as f32 / HALO_RINGS as f32;
            let fade = (HALO_RINGS + 1 - ring) as f32 / HALO_RINGS as f32;
            draw.ellipse()
                .xy(position)
                .radius(radius + spread)
                .color(with_alpha(style.blur_color, HALO_ALPHA * fade * style.alpha * opacity));
        }
    }

    draw.ellipse()
        .xy(position)
        .radius(radius)
        .color(with_alpha(style.color, style.alpha * opacity));
}

fn with_alpha(color: Rgb<u8>, alpha: f32) -> Rgba {
    rgba(
        color.red as f32 / 255.0,
        color.green as f32 / 255.0,
        color.blue as f32 / 255.0,
        alpha.clamp(0.0, 1.0),
    )
}
