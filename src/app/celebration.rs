//! Confetti overlay shown when a session ends with an improved mood.
//!
//! A burst of particles is spawned from an origin point with random angle and
//! speed, then integrated once per tick under gravity until its lifetime runs
//! out. Coordinates are normalized to `0.0..=1.0` so the renderer can scale
//! them to any pane size.

use rand::Rng;

/// Ticks a burst stays on screen.
pub const CELEBRATION_TICKS: u32 = 4;

const GRAVITY: f32 = 0.12;

/// Parameters of a confetti burst.
#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationConfig {
    pub particle_count: usize,
    /// Cone width in degrees around straight up.
    pub spread: f32,
    /// Vertical origin as a fraction of the pane height.
    pub origin_y: f32,
    pub colors: Vec<String>,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70.0,
            origin_y: 0.6,
            colors: ["#3b82f6", "#22c55e", "#f97316", "#a855f7"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    pub color: usize,
    pub glyph: char,
}

/// A live confetti burst.
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub particles: Vec<Particle>,
    pub colors: Vec<String>,
    ticks_left: u32,
}

impl Celebration {
    /// Spawns a burst described by `config`.
    pub fn spawn<R: Rng + ?Sized>(config: &CelebrationConfig, rng: &mut R) -> Self {
        const GLYPHS: [char; 4] = ['*', '•', '✦', '▪'];
        let half_spread = config.spread.to_radians() / 2.0;
        let color_count = config.colors.len().max(1);

        let particles = (0..config.particle_count)
            .map(|_| {
                let angle = rng.gen_range(-half_spread..=half_spread);
                let speed = rng.gen_range(0.15..0.45_f32);
                Particle {
                    x: 0.5,
                    y: config.origin_y,
                    vx: speed * angle.sin(),
                    vy: -speed * angle.cos(),
                    color: rng.gen_range(0..color_count),
                    glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
                }
            })
            .collect();

        tracing::debug!(particles = config.particle_count, "celebration spawned");
        Self {
            particles,
            colors: config.colors.clone(),
            ticks_left: CELEBRATION_TICKS,
        }
    }

    /// Moves every particle one step. Returns `false` once the burst is over.
    pub fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
        }
        self.particles
            .retain(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
        self.is_alive()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.ticks_left > 0 && !self.particles.is_empty()
    }

    #[must_use]
    pub fn color_of(&self, particle: &Particle) -> Option<&str> {
        self.colors.get(particle.color).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_config_matches_burst_parameters() {
        let config = CelebrationConfig::default();
        assert_eq!(config.particle_count, 100);
        assert!((config.spread - 70.0).abs() < f32::EPSILON);
        assert!((config.origin_y - 0.6).abs() < f32::EPSILON);
        assert_eq!(config.colors, ["#3b82f6", "#22c55e", "#f97316", "#a855f7"]);
    }

    #[test]
    fn burst_starts_at_origin_and_moves_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut burst = Celebration::spawn(&CelebrationConfig::default(), &mut rng);
        assert_eq!(burst.particles.len(), 100);
        assert!(burst.particles.iter().all(|p| (p.y - 0.6).abs() < f32::EPSILON));

        burst.tick();
        assert!(burst.particles.iter().all(|p| p.y < 0.6));
    }

    #[test]
    fn burst_expires() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut burst = Celebration::spawn(&CelebrationConfig::default(), &mut rng);
        let mut ticks = 0;
        while burst.tick() {
            ticks += 1;
        }
        assert!(ticks < CELEBRATION_TICKS);
        assert!(!burst.is_alive());
    }
}
