/*
 * Field Parameters Module
 *
 * This module defines the FieldParams struct that holds every tunable
 * constant of the particle field: particle count, proximity thresholds,
 * the glow gains that drive size/opacity/blur, the palette and the
 * layer opacity. The component takes no props, so the defaults are the
 * values the background always runs with.
 */

use nannou::prelude::*;

use crate::error::FieldError;

// Particle palette, assigned once per particle at seeding time
pub const PALETTE: [(u8, u8, u8); 4] = [
    (0x25, 0x63, 0xeb),
    (0x3b, 0x82, 0xf6),
    (0x60, 0xa5, 0xfa),
    (0x93, 0xc5, 0xfd),
];

// Hue used for every edge; only its alpha varies
pub const EDGE_HUE: (u8, u8, u8) = (37, 99, 235);

#[derive(Debug, Clone, PartialEq)]
pub struct FieldParams {
    pub particle_count: usize,
    pub edge_threshold: f32,
    pub glow_radius: f32,
    pub parallax_factor: f32,
    // Seeding ranges (half-open)
    pub min_radius: f32,
    pub max_radius: f32,
    pub max_speed: f32,
    // Edge styling: value = base + glow * gain
    pub edge_alpha_base: f32,
    pub edge_alpha_gain: f32,
    pub edge_width_base: f32,
    pub edge_width_gain: f32,
    // Particle styling
    pub particle_alpha_base: f32,
    pub particle_alpha_gain: f32,
    pub radius_gain: f32,
    pub blur_gain: f32,
    pub palette: Vec<Rgb<u8>>,
    pub edge_color: Rgb<u8>,
    // Opacity of the whole layer over the page background
    pub layer_opacity: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: 80,
            edge_threshold: 140.0,
            glow_radius: 200.0,
            parallax_factor: 0.00015,
            min_radius: 1.0,
            max_radius: 3.0,
            max_speed: 0.25,
            edge_alpha_base: 0.15,
            edge_alpha_gain: 0.4,
            edge_width_base: 1.0,
            edge_width_gain: 1.5,
            particle_alpha_base: 0.7,
            particle_alpha_gain: 0.3,
            radius_gain: 2.0,
            blur_gain: 15.0,
            palette: PALETTE.iter().map(|&(r, g, b)| rgb(r, g, b)).collect(),
            edge_color: rgb(EDGE_HUE.0, EDGE_HUE.1, EDGE_HUE.2),
            layer_opacity: 0.55,
        }
    }
}

impl FieldParams {
    // Reject values that would make glow or seeding ranges meaningless.
    // Checked once at mount; the frame loop assumes a valid set.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !(self.glow_radius > 0.0 && self.glow_radius.is_finite()) {
            return Err(FieldError::InvalidParams("glow radius must be positive and finite"));
        }
        if !(self.edge_threshold >= 0.0 && self.edge_threshold.is_finite()) {
            return Err(FieldError::InvalidParams("edge threshold must be non-negative"));
        }
        if !(self.min_radius > 0.0 && self.min_radius < self.max_radius) {
            return Err(FieldError::InvalidParams("radius range must be non-empty and positive"));
        }
        if !(self.max_speed > 0.0 && self.max_speed.is_finite()) {
            return Err(FieldError::InvalidParams("max speed must be positive"));
        }
        if !self.parallax_factor.is_finite() {
            return Err(FieldError::InvalidParams("parallax factor must be finite"));
        }
        if self.palette.is_empty() {
            return Err(FieldError::InvalidParams("palette must not be empty"));
        }
        Ok(())
    }

    // Number of pairwise distance checks the edge pass performs per frame
    pub fn pair_checks(&self) -> usize {
        self.particle_count * self.particle_count.saturating_sub(1) / 2
    }
}
