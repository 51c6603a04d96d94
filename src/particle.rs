// Simple particle struct to keep track of individual position and velocity

extern crate nalgebra_glm as glm;
use glm::DVec2;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64) -> Particle {
        Particle {
            pos: glm::vec2(pos_x, pos_y),
            vel: glm::vec2(vel_x, vel_y),
        }
    }

    // Uniform position in [0, width) x [0, height), uniform velocity in
    // [-max_speed, max_speed] on each axis
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, max_speed: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() * 2.0 - 1.0) * max_speed;
        let vel_y = (rng.gen::<f64>() * 2.0 - 1.0) * max_speed;
        Particle::new(pos_x, pos_y, vel_x, vel_y)
    }

    // Moves by one frame of velocity. Leaving [0, width] or [0, height]
    // inverts that axis' velocity; the position itself is not clamped, so the
    // particle can sit just outside the bounds until the next step.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > height {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        glm::distance(&self.pos, &other.pos)
    }
}
