// Particle field: owns the moving points behind the page and draws the
// connecting lines and dots once per frame.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldState {
    Uninitialized,
    Running,
}

pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    state: FieldState,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic field, used by tests.
    pub fn with_seed(config: FieldConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FieldConfig, rng: StdRng) -> Self {
        ParticleField {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            state: FieldState::Uninitialized,
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopts new surface dimensions and regenerates the whole particle set
    /// at the count those dimensions allow.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        let count = self.config.particle_count(width, height);
        self.initialize(count);
        log::debug!(
            "particle field resized to {}x{}, {} particles",
            width,
            height,
            count
        );
    }

    pub fn initialize(&mut self, count: usize) {
        let (width, height, max_speed) = (self.width, self.height, self.config.max_speed);
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::random(&mut *rng, width, height, max_speed))
            .collect();
        self.state = FieldState::Running;
    }

    /// Moves every particle one frame, reflecting off the surface edges.
    pub fn step(&mut self) {
        if self.state == FieldState::Uninitialized {
            return;
        }
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Clears the surface, then draws a line for every pair closer than the
    /// link distance and a dot for every particle.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        if self.state == FieldState::Uninitialized {
            return Ok(());
        }
        let config = &self.config;
        surface.clear(self.width, self.height)?;

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.distance_to(b);
                if distance < config.link_distance {
                    let alpha = config.link_alpha(distance);
                    surface.line(a.pos, b.pos, config.line_width, config.color, alpha)?;
                }
            }
        }

        for p in &self.particles {
            surface.disc(p.pos, config.dot_radius, config.color, config.dot_alpha)?;
        }
        Ok(())
    }

    /// One animation frame: `step` followed by `draw`.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.step();
        self.draw(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Command, RecordingSurface};
    use nalgebra_glm as glm;

    fn field(seed: u64) -> ParticleField {
        ParticleField::with_seed(FieldConfig::default(), seed)
    }

    #[test]
    fn starts_uninitialized_and_inert() {
        let mut f = field(1);
        let mut surface = RecordingSurface::new(800.0, 450.0);
        assert_eq!(f.state(), FieldState::Uninitialized);
        f.tick(&mut surface).unwrap();
        assert!(surface.commands.is_empty());
        assert!(f.particles().is_empty());
    }

    #[test]
    fn first_resize_populates_and_runs() {
        let mut f = field(2);
        f.resize(800.0, 450.0);
        assert_eq!(f.state(), FieldState::Running);
        assert_eq!(f.particles().len(), 20);
        assert_eq!(f.size(), (800.0, 450.0));
    }

    #[test]
    fn resize_scenario_regenerates_everything() {
        let mut f = field(3);
        f.resize(800.0, 450.0);
        let before: Vec<Particle> = f.particles().to_vec();

        f.resize(1600.0, 900.0);
        assert_eq!(f.state(), FieldState::Running);
        assert_eq!(f.particles().len(), 60);
        for old in &before {
            assert!(
                f.particles().iter().all(|p| p.pos != old.pos),
                "particle survived resize"
            );
        }
    }

    #[test]
    fn resize_to_same_size_still_replaces_particles() {
        let mut f = field(4);
        f.resize(1280.0, 720.0);
        let before: Vec<Particle> = f.particles().to_vec();
        f.resize(1280.0, 720.0);
        assert_eq!(f.particles().len(), before.len());
        for (old, new) in before.iter().zip(f.particles()) {
            assert_ne!(old.pos, new.pos);
        }
    }

    #[test]
    fn tiny_surface_runs_with_no_particles() {
        let mut f = field(5);
        f.resize(100.0, 100.0);
        assert_eq!(f.state(), FieldState::Running);
        assert!(f.particles().is_empty());

        let mut surface = RecordingSurface::new(100.0, 100.0);
        f.tick(&mut surface).unwrap();
        assert_eq!(
            surface.commands,
            vec![Command::Clear {
                width: 100.0,
                height: 100.0
            }]
        );
    }

    #[test]
    fn zero_ticks_leave_particles_as_initialized() {
        let mut a = field(6);
        let mut b = field(6);
        a.resize(1024.0, 768.0);
        b.resize(1024.0, 768.0);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn draw_does_not_move_particles() {
        let mut f = field(7);
        f.resize(1024.0, 768.0);
        let before = f.particles().to_vec();
        let mut surface = RecordingSurface::new(1024.0, 768.0);
        f.draw(&mut surface).unwrap();
        assert_eq!(f.particles(), &before[..]);
    }

    #[test]
    fn particles_stay_within_one_step_of_bounds() {
        let mut f = field(8);
        f.resize(400.0, 300.0);
        let slack = f.config().max_speed;
        for _ in 0..20_000 {
            f.step();
            for p in f.particles() {
                assert!(p.pos.x >= -slack && p.pos.x <= 400.0 + slack, "x = {}", p.pos.x);
                assert!(p.pos.y >= -slack && p.pos.y <= 300.0 + slack, "y = {}", p.pos.y);
            }
        }
    }

    #[test]
    fn velocity_magnitude_is_preserved_by_bounces() {
        let mut f = field(9);
        f.resize(360.0, 200.0);
        let speeds: Vec<(f64, f64)> = f
            .particles()
            .iter()
            .map(|p| (p.vel.x.abs(), p.vel.y.abs()))
            .collect();
        for _ in 0..5_000 {
            f.step();
        }
        for (p, (sx, sy)) in f.particles().iter().zip(speeds) {
            assert_eq!(p.vel.x.abs(), sx);
            assert_eq!(p.vel.y.abs(), sy);
        }
    }

    #[test]
    fn frame_draws_links_then_dots() {
        let mut f = field(10);
        f.resize(800.0, 450.0);
        let mut surface = RecordingSurface::new(800.0, 450.0);
        f.tick(&mut surface).unwrap();

        assert_eq!(
            surface.commands[0],
            Command::Clear {
                width: 800.0,
                height: 450.0
            }
        );
        let first_disc = surface
            .commands
            .iter()
            .position(|c| matches!(c, Command::Disc { .. }))
            .unwrap();
        assert!(surface.commands[first_disc..]
            .iter()
            .all(|c| matches!(c, Command::Disc { .. })));
        assert_eq!(surface.discs().count(), 20);
        for disc in surface.discs() {
            if let Command::Disc { radius, alpha, .. } = disc {
                assert_eq!(*radius, 1.5);
                assert_eq!(*alpha, 0.3);
            }
        }
    }

    #[test]
    fn links_cover_exactly_the_close_pairs() {
        let mut f = field(11);
        f.resize(640.0, 480.0);
        let mut surface = RecordingSurface::new(640.0, 480.0);
        f.tick(&mut surface).unwrap();

        let particles = f.particles();
        let mut expected = 0;
        for i in 0..particles.len() {
            for j in i + 1..particles.len() {
                if particles[i].distance_to(&particles[j]) < 160.0 {
                    expected += 1;
                }
            }
        }
        assert_eq!(surface.lines().count(), expected);

        for line in surface.lines() {
            if let Command::Line { from, to, width, alpha } = line {
                let distance = glm::distance(from, to);
                assert!(distance < 160.0);
                assert_eq!(*width, 0.8);
                assert!(*alpha > 0.0 && *alpha <= 0.18);
                assert!((alpha - (1.0 - distance / 160.0) * 0.18).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn two_close_particles_are_linked() {
        let mut f = field(12);
        f.resize(200.0, 200.0);
        f.particles = vec![
            Particle::new(10.0, 10.0, 0.0, 0.0),
            Particle::new(90.0, 10.0, 0.0, 0.0),
            Particle::new(90.0, 150.0, 0.0, 0.0),
        ];
        let mut surface = RecordingSurface::new(200.0, 200.0);
        f.draw(&mut surface).unwrap();

        let lines: Vec<&Command> = surface.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            &Command::Line {
                from: glm::vec2(10.0, 10.0),
                to: glm::vec2(90.0, 10.0),
                width: 0.8,
                alpha: 0.09,
            }
        );
    }
}
