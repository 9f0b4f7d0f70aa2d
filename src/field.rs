/*
 * Particle Field Module
 *
 * This module owns the particle simulation: a fixed set of particles,
 * the current surface size and the pointer position. Each frame it
 *
 * 1. clears the surface,
 * 2. draws an edge between every pair of particles closer than the
 *    edge threshold, brighter and wider near the pointer,
 * 3. moves every particle (velocity + pointer parallax), bounces it
 *    off the edges and draws it with a pointer-proximity glow.
 *
 * The edge pass is a plain O(n^2) sweep over unordered pairs. At the
 * default 80 particles that is 3160 distance checks per frame; raising
 * the particle count raises that cost quadratically.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::glow::{edge_style, glow_at, particle_style};
use crate::params::FieldParams;
use crate::particle::Particle;
use crate::surface::{Surface, SurfaceSize};

// What a single step put on the surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub edges: usize,
    pub particles: usize,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    size: SurfaceSize,
    pointer: Vec2,
    params: FieldParams,
}

impl ParticleField {
    // Seed `params.particle_count` random particles inside `size`.
    // The pointer starts at the surface origin until the first move event.
    pub fn seed<R: Rng + ?Sized>(size: SurfaceSize, params: FieldParams, rng: &mut R) -> Self {
        let particles = (0..params.particle_count)
            .map(|_| Particle::random(rng, size, &params))
            .collect();

        Self::from_particles(particles, size, params)
    }

    // Build a field from explicit particles
    pub fn from_particles(particles: Vec<Particle>, size: SurfaceSize, params: FieldParams) -> Self {
        Self {
            particles,
            size,
            pointer: Vec2::ZERO,
            params,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    // New bounds take effect at the next boundary check; particles stay put
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = position;
    }

    // Per-frame drift from the pointer's offset to the surface center
    pub fn parallax(&self) -> Vec2 {
        (self.pointer - self.size.center()) * self.params.parallax_factor
    }

    // Draw an edge between every unordered pair closer than the threshold
    pub fn edge_pass<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        let threshold = self.params.edge_threshold;
        let mut edges = 0;

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance < threshold {
                    let midpoint = (a.position + b.position) / 2.0;
                    let glow = glow_at(midpoint, self.pointer, self.params.glow_radius);
                    surface.stroke_line(a.position, b.position, edge_style(glow, &self.params));
                    edges += 1;
                }
            }
        }

        edges
    }

    // Move, bounce and draw every particle
    pub fn particle_pass<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let parallax = self.parallax();
        let size = self.size;
        let pointer = self.pointer;
        let params = &self.params;

        for particle in &mut self.particles {
            particle.advance(parallax, size);

            let glow = glow_at(particle.position, pointer, params.glow_radius);
            surface.fill_circle(
                particle.position,
                particle.drawn_radius(glow, params),
                particle_style(particle.color, glow, params),
            );
        }

        self.particles.len()
    }

    // One full frame: clear, edges, particles
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        surface.clear(self.size);
        let edges = self.edge_pass(surface);
        let particles = self.particle_pass(surface);

        FrameStats { edges, particles }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, DrawList};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f32, y: f32) -> Particle {
        Particle::new(vec2(x, y), 2.0, Vec2::ZERO, rgb(59, 130, 246))
    }

    fn field_of(particles: Vec<Particle>) -> ParticleField {
        ParticleField::from_particles(particles, SurfaceSize::new(1000.0, 1000.0), FieldParams::default())
    }

    #[test]
    fn seed_creates_the_configured_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = ParticleField::seed(SurfaceSize::new(1280.0, 720.0), FieldParams::default(), &mut rng);

        assert_eq!(field.len(), 80);
        assert_eq!(field.pointer(), Vec2::ZERO);
    }

    #[test]
    fn edge_at_exact_threshold_is_not_drawn() {
        let field = field_of(vec![still(100.0, 100.0), still(240.0, 100.0)]);
        let mut list = DrawList::new();

        assert_eq!(field.edge_pass(&mut list), 0);
        assert_eq!(list.line_count(), 0);
    }

    #[test]
    fn edge_just_inside_threshold_is_drawn() {
        let field = field_of(vec![still(100.0, 100.0), still(239.99, 100.0)]);
        let mut list = DrawList::new();

        assert_eq!(field.edge_pass(&mut list), 1);
        assert_eq!(list.line_count(), 1);
    }

    #[test]
    fn each_unordered_pair_is_considered_once() {
        // three mutually close particles -> three edges, not six
        let field = field_of(vec![still(0.0, 0.0), still(10.0, 0.0), still(0.0, 10.0)]);
        let mut list = DrawList::new();

        assert_eq!(field.edge_pass(&mut list), 3);
    }

    #[test]
    fn edge_glow_uses_the_midpoint() {
        let mut field = field_of(vec![still(100.0, 100.0), still(200.0, 100.0)]);
        field.pointer_moved(vec2(150.0, 100.0));
        let mut list = DrawList::new();
        field.edge_pass(&mut list);

        match &list.commands()[0] {
            DrawCommand::Line { style, .. } => {
                assert!((style.alpha - 0.55).abs() < 1e-5);
                assert!((style.width - 2.5).abs() < 1e-5);
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn parallax_is_zero_with_pointer_at_center() {
        let mut field = field_of(vec![]);
        field.pointer_moved(vec2(500.0, 500.0));
        assert_eq!(field.parallax(), Vec2::ZERO);

        field.pointer_moved(vec2(1000.0, 0.0));
        let parallax = field.parallax();
        assert!((parallax.x - 0.075).abs() < 1e-6);
        assert!((parallax.y + 0.075).abs() < 1e-6);
    }

    #[test]
    fn step_clears_then_draws_edges_then_particles() {
        let mut field = field_of(vec![still(100.0, 100.0), still(150.0, 100.0), still(900.0, 900.0)]);
        field.pointer_moved(vec2(500.0, 500.0));
        let mut list = DrawList::new();

        let stats = field.step(&mut list);

        assert_eq!(stats, FrameStats { edges: 1, particles: 3 });
        assert!(matches!(list.commands()[0], DrawCommand::Clear(_)));
        assert!(matches!(list.commands()[1], DrawCommand::Line { .. }));
        assert!(list.commands()[2..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Circle { .. })));
    }

    #[test]
    fn particle_near_pointer_is_larger_and_brighter() {
        let mut field = field_of(vec![still(100.0, 100.0), still(800.0, 800.0)]);
        field.pointer_moved(vec2(100.0, 100.0));
        let mut list = DrawList::new();
        field.particle_pass(&mut list);

        let circles: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { radius, style, .. } => Some((*radius, *style)),
                _ => None,
            })
            .collect();

        let (near_radius, near) = circles[0];
        let (far_radius, far) = circles[1];
        assert!(near_radius > far_radius);
        assert!(near.alpha > far.alpha);
        assert!(near.blur > 0.0);
        assert_eq!(far.blur, 0.0);
    }

    #[test]
    fn resize_keeps_particle_positions() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::seed(SurfaceSize::new(1280.0, 720.0), FieldParams::default(), &mut rng);
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();

        field.resize(SurfaceSize::new(400.0, 300.0));

        let after: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
        assert_eq!(field.size(), SurfaceSize::new(400.0, 300.0));
    }
}
