// Tunable constants for the particle field. Defaults reproduce the page's
// neon background.

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub area_per_particle: f64,
    pub max_speed: f64,
    pub link_distance: f64,
    pub link_max_alpha: f64,
    pub line_width: f64,
    pub dot_radius: f64,
    pub dot_alpha: f64,
    pub color: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            max_particles: 60,
            area_per_particle: 18000.0,
            max_speed: 0.15,
            link_distance: 160.0,
            link_max_alpha: 0.18,
            line_width: 0.8,
            dot_radius: 1.5,
            dot_alpha: 0.3,
            color: Color::NEON,
        }
    }
}

impl FieldConfig {
    /// Number of particles for a surface of `width` x `height`:
    /// `min(max_particles, floor(width * height / area_per_particle))`.
    /// Degenerate or non-finite sizes give zero.
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        let area = width * height;
        if !area.is_finite() || width <= 0.0 || height <= 0.0 || self.area_per_particle <= 0.0 {
            return 0;
        }
        let by_area = (area / self.area_per_particle).floor();
        if by_area >= self.max_particles as f64 {
            self.max_particles
        } else {
            by_area as usize
        }
    }

    /// Opacity of the line joining two particles `distance` apart. Falls off
    /// linearly from `link_max_alpha` at zero to nothing at `link_distance`.
    pub fn link_alpha(&self, distance: f64) -> f64 {
        if !(distance < self.link_distance) {
            return 0.0;
        }
        let falloff = 1.0 - distance.max(0.0) / self.link_distance;
        falloff * self.link_max_alpha
    }
}
