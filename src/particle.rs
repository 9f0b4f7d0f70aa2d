/*
 * Particle Module
 *
 * This module defines the Particle struct and its per-frame movement.
 * A particle drifts with a constant velocity and bounces off the
 * surface edges by flipping the sign of the offending velocity component.
 * The bounce is checked after the move, so a particle may sit slightly
 * outside the surface for a frame before heading back in.
 */

use nannou::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::params::FieldParams;
use crate::surface::SurfaceSize;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub radius: f32,
    pub velocity: Vec2,
    pub color: Rgb<u8>,
}

impl Particle {
    pub fn new(position: Vec2, radius: f32, velocity: Vec2, color: Rgb<u8>) -> Self {
        Self {
            position,
            radius,
            velocity,
            color,
        }
    }

    // Uniform position inside the surface, radius in [min, max),
    // velocity components in [-max_speed, max_speed), palette color
    pub fn random<R: Rng + ?Sized>(rng: &mut R, size: SurfaceSize, params: &FieldParams) -> Self {
        let x = rng.gen::<f32>() * size.width;
        let y = rng.gen::<f32>() * size.height;
        let radius = rng.gen_range(params.min_radius..params.max_radius);
        let dx = rng.gen_range(-params.max_speed..params.max_speed);
        let dy = rng.gen_range(-params.max_speed..params.max_speed);
        let color = params
            .palette
            .choose(rng)
            .copied()
            .unwrap_or(params.edge_color);

        Self::new(vec2(x, y), radius, vec2(dx, dy), color)
    }

    // Move one frame and bounce off the edges.
    //
    // The parallax offset only nudges this frame's displacement; it never
    // accumulates into the stored velocity. It is ignored on an axis where
    // the particle is already outside, and a component is only flipped
    // while it still points outward. Together these keep the overshoot
    // within one frame's displacement.
    pub fn advance(&mut self, parallax: Vec2, size: SurfaceSize) {
        let inside_x = (0.0..=size.width).contains(&self.position.x);
        let inside_y = (0.0..=size.height).contains(&self.position.y);
        let nudge = vec2(
            if inside_x { parallax.x } else { 0.0 },
            if inside_y { parallax.y } else { 0.0 },
        );

        self.position += self.velocity + nudge;

        if (self.position.x < 0.0 && self.velocity.x < 0.0)
            || (self.position.x > size.width && self.velocity.x > 0.0)
        {
            self.velocity.x = -self.velocity.x;
        }
        if (self.position.y < 0.0 && self.velocity.y < 0.0)
            || (self.position.y > size.height && self.velocity.y > 0.0)
        {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn drawn_radius(&self, glow: f32, params: &FieldParams) -> f32 {
        self.radius + glow * params.radius_gain
    }
}
