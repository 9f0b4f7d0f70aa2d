/*
 * Glow Module
 *
 * Pointer proximity drives every visual intensity of the field.
 * glow_strength maps a distance to a 0..1 scalar that fades linearly
 * to zero at the glow radius; the style helpers turn that scalar into
 * edge and particle styles using the gains from FieldParams.
 */

use nannou::prelude::*;

use crate::params::FieldParams;
use crate::surface::{CircleStyle, LineStyle};

// 1 at the pointer, 0 at and beyond `radius`
#[inline]
pub fn glow_strength(distance: f32, radius: f32) -> f32 {
    (1.0 - distance / radius).clamp(0.0, 1.0)
}

// Glow of a point relative to the pointer
#[inline]
pub fn glow_at(point: Vec2, pointer: Vec2, radius: f32) -> f32 {
    glow_strength(point.distance(pointer), radius)
}

pub fn edge_style(glow: f32, params: &FieldParams) -> LineStyle {
    LineStyle {
        color: params.edge_color,
        alpha: params.edge_alpha_base + glow * params.edge_alpha_gain,
        width: params.edge_width_base + glow * params.edge_width_gain,
    }
}

pub fn particle_style(color: Rgb<u8>, glow: f32, params: &FieldParams) -> CircleStyle {
    CircleStyle {
        color,
        alpha: params.particle_alpha_base + glow * params.particle_alpha_gain,
        blur: glow * params.blur_gain,
        blur_color: color,
    }
}
