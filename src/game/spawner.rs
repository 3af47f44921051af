//! Randomized spawn timers for obstacles and clouds.

use super::types::{Cloud, Obstacle, ObstacleKind};
use crate::config::SpawnConfig;
use crate::constants::{CLOUD_MAX_Y, CLOUD_MIN_Y};
use rand::Rng;

/// How a timer picks its next threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnInterval {
    Fixed(u32),
    /// Uniform over `min..max` frames.
    Uniform { min: u32, max: u32 },
}

impl SpawnInterval {
    fn draw<R: Rng>(&self, rng: &mut R) -> u32 {
        match *self {
            Self::Fixed(frames) => frames,
            Self::Uniform { min, max } if max > min => rng.gen_range(min..max),
            Self::Uniform { min, .. } => min,
        }
    }
}

/// Frame counter that fires when it reaches a threshold, then resets and
/// draws a fresh threshold.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub counter: u32,
    pub threshold: u32,
    interval: SpawnInterval,
}

impl SpawnTimer {
    pub fn new<R: Rng>(interval: SpawnInterval, rng: &mut R) -> Self {
        Self {
            counter: 0,
            threshold: interval.draw(rng),
            interval,
        }
    }

    /// Count one frame. Returns true when the timer fires.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.counter += 1;
        if self.counter >= self.threshold {
            self.counter = 0;
            self.threshold = self.interval.draw(rng);
            true
        } else {
            false
        }
    }
}

/// Both spawn timers plus the randomness for what they create.
#[derive(Debug, Clone)]
pub struct Spawner {
    pub obstacle_timer: SpawnTimer,
    pub cloud_timer: SpawnTimer,
    cactus_probability: f64,
    cloud_min_speed: f64,
    cloud_max_speed: f64,
}

impl Spawner {
    pub fn new<R: Rng>(config: &SpawnConfig, rng: &mut R) -> Self {
        Self {
            obstacle_timer: SpawnTimer::new(
                SpawnInterval::Uniform {
                    min: config.obstacle_min,
                    max: config.obstacle_max,
                },
                rng,
            ),
            cloud_timer: SpawnTimer::new(SpawnInterval::Fixed(config.cloud_interval), rng),
            cactus_probability: config.cactus_probability,
            cloud_min_speed: config.cloud_min_speed,
            cloud_max_speed: config.cloud_max_speed,
        }
    }

    /// Advance both timers one frame, appending whatever fires.
    pub fn tick<R: Rng>(
        &mut self,
        rng: &mut R,
        obstacles: &mut Vec<Obstacle>,
        clouds: &mut Vec<Cloud>,
    ) {
        if self.obstacle_timer.tick(rng) {
            obstacles.push(Obstacle::new(self.pick_kind(rng)));
        }
        if self.cloud_timer.tick(rng) {
            clouds.push(self.make_cloud(rng));
        }
    }

    /// Weighted pick: cactus with `cactus_probability`, otherwise bird.
    pub fn pick_kind<R: Rng>(&self, rng: &mut R) -> ObstacleKind {
        if rng.gen::<f64>() < self.cactus_probability {
            ObstacleKind::Cactus
        } else {
            ObstacleKind::Bird
        }
    }

    fn make_cloud<R: Rng>(&self, rng: &mut R) -> Cloud {
        let y = rng.gen_range(CLOUD_MIN_Y..CLOUD_MAX_Y);
        let speed = if self.cloud_max_speed > self.cloud_min_speed {
            rng.gen_range(self.cloud_min_speed..self.cloud_max_speed)
        } else {
            self.cloud_min_speed
        };
        Cloud::new(y, speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_uniform_threshold_in_range() {
        let mut rng = rng();
        for _ in 0..500 {
            let timer = SpawnTimer::new(SpawnInterval::Uniform { min: 40, max: 100 }, &mut rng);
            assert!((40..100).contains(&timer.threshold));
        }
    }

    #[test]
    fn test_fixed_timer_fires_every_interval() {
        let mut rng = rng();
        let mut timer = SpawnTimer::new(SpawnInterval::Fixed(100), &mut rng);

        let fired: Vec<u32> = (1..=300).filter(|_| timer.tick(&mut rng)).collect();
        assert_eq!(fired.len(), 3);
        assert_eq!(timer.counter, 0);
    }

    #[test]
    fn test_timer_resets_counter_on_fire() {
        let mut rng = rng();
        let mut timer = SpawnTimer::new(SpawnInterval::Fixed(3), &mut rng);
        assert!(!timer.tick(&mut rng));
        assert!(!timer.tick(&mut rng));
        assert!(timer.tick(&mut rng));
        assert_eq!(timer.counter, 0);
        assert!(!timer.tick(&mut rng));
        assert_eq!(timer.counter, 1);
    }

    #[test]
    fn test_uniform_timer_redraws_after_firing() {
        let mut rng = rng();
        let mut timer = SpawnTimer::new(SpawnInterval::Uniform { min: 40, max: 100 }, &mut rng);
        let mut gaps = Vec::new();
        let mut since = 0;
        for _ in 0..5000 {
            since += 1;
            if timer.tick(&mut rng) {
                gaps.push(since);
                since = 0;
            }
        }
        assert!(gaps.iter().all(|g| (40..100).contains(g)));
        // Redrawn thresholds are not all the same
        assert!(gaps.iter().any(|g| *g != gaps[0]));
    }

    #[test]
    fn test_degenerate_uniform_range_uses_min() {
        let mut rng = rng();
        let timer = SpawnTimer::new(SpawnInterval::Uniform { min: 50, max: 50 }, &mut rng);
        assert_eq!(timer.threshold, 50);
    }

    #[test]
    fn test_spawner_appends_entities() {
        let mut rng = rng();
        let mut spawner = Spawner::new(&SpawnConfig::default(), &mut rng);
        let mut obstacles = Vec::new();
        let mut clouds = Vec::new();

        for _ in 0..100 {
            spawner.tick(&mut rng, &mut obstacles, &mut clouds);
        }

        assert!(!obstacles.is_empty(), "at least one obstacle within 100 frames");
        assert_eq!(clouds.len(), 1);
        let cloud = &clouds[0];
        assert!(cloud.speed >= 1.0 && cloud.speed < 3.0);
        assert!(cloud.y >= CLOUD_MIN_Y && cloud.y < CLOUD_MAX_Y);
    }

    #[test]
    fn test_kind_weighting_roughly_seventy_thirty() {
        let mut rng = rng();
        let spawner = Spawner::new(&SpawnConfig::default(), &mut rng);
        let n = 10_000;
        let cacti = (0..n)
            .filter(|_| spawner.pick_kind(&mut rng) == ObstacleKind::Cactus)
            .count();
        let ratio = cacti as f64 / n as f64;
        assert!((ratio - 0.7).abs() < 0.03, "cactus ratio was {}", ratio);
    }

    #[test]
    fn test_kind_probability_extremes() {
        let mut rng = rng();
        let mut config = SpawnConfig::default();
        config.cactus_probability = 1.0;
        let all_cactus = Spawner::new(&config, &mut rng);
        config.cactus_probability = 0.0;
        let all_bird = Spawner::new(&config, &mut rng);

        for _ in 0..200 {
            assert_eq!(all_cactus.pick_kind(&mut rng), ObstacleKind::Cactus);
            assert_eq!(all_bird.pick_kind(&mut rng), ObstacleKind::Bird);
        }
    }
}
