//! Dino run data structures.
//!
//! A runner stands at a fixed column on the ground line and jumps over
//! obstacles scrolling in from the right edge of a 1100×600 canvas.
//! Coordinates grow rightward and downward; every rectangle is positioned by
//! its top-left corner.

use super::spawner::Spawner;
use crate::config::GameConfig;
use crate::constants::*;
use rand::Rng;

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Positive-area overlap. Rectangles that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Which image the runner shows this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPose {
    RunA,
    RunB,
    Jump,
}

/// The player-controlled runner.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    /// Top edge. The bottom edge never passes below `GROUND_Y`.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity per frame (negative = upward).
    pub velocity: f64,
    /// True from jump until landing.
    pub airborne: bool,
    /// Run-cycle frame index (0 or 1).
    pub anim_frame: u32,
    /// Frames since the run-cycle last advanced.
    pub anim_timer: u32,
    gravity: f64,
    jump_impulse: f64,
}

impl Player {
    pub fn new(gravity: f64, jump_impulse: f64) -> Self {
        Self {
            x: PLAYER_X,
            y: GROUND_Y - PLAYER_HEIGHT,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            velocity: 0.0,
            airborne: false,
            anim_frame: 0,
            anim_timer: 0,
            gravity,
            jump_impulse,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Start a jump. Returns false (and changes nothing) while airborne.
    pub fn jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.velocity = self.jump_impulse;
        self.airborne = true;
        true
    }

    /// One frame of gravity, motion, landing and animation.
    pub fn update(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;

        if self.bottom() >= GROUND_Y {
            self.y = GROUND_Y - self.height;
            self.velocity = 0.0;
            self.airborne = false;
        }

        if self.airborne {
            self.anim_timer = 0;
        } else {
            self.anim_timer += 1;
            if self.anim_timer >= RUN_ANIM_PERIOD {
                self.anim_timer = 0;
                self.anim_frame = (self.anim_frame + 1) % 2;
            }
        }
    }

    pub fn pose(&self) -> PlayerPose {
        if self.airborne {
            PlayerPose::Jump
        } else if self.anim_frame == 0 {
            PlayerPose::RunA
        } else {
            PlayerPose::RunB
        }
    }
}

/// Obstacle kinds. Both must be jumped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Rests on the ground line.
    Cactus,
    /// Hovers just above the ground, low enough to hit a standing runner.
    Bird,
}

impl ObstacleKind {
    pub fn width(&self) -> f64 {
        match self {
            Self::Cactus => CACTUS_WIDTH,
            Self::Bird => BIRD_WIDTH,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Self::Cactus => CACTUS_HEIGHT,
            Self::Bird => BIRD_HEIGHT,
        }
    }

    /// Top edge, fixed by kind.
    pub fn y(&self) -> f64 {
        match self {
            Self::Cactus => GROUND_Y - CACTUS_HEIGHT,
            Self::Bird => GROUND_Y - BIRD_CLEARANCE - BIRD_HEIGHT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Left edge.
    pub x: f64,
}

impl Obstacle {
    /// A new obstacle just past the right edge of the canvas.
    pub fn new(kind: ObstacleKind) -> Self {
        Self {
            kind,
            x: CANVAS_WIDTH,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.kind.y(), self.kind.width(), self.kind.height())
    }

    pub fn update(&mut self, speed: f64) {
        self.x -= speed;
    }

    /// Right edge has scrolled past the left boundary.
    pub fn is_off_screen(&self) -> bool {
        self.rect().right() < 0.0
    }
}

/// Background decoration. No gameplay effect.
#[derive(Debug, Clone)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
}

impl Cloud {
    pub fn new(y: f64, speed: f64) -> Self {
        Self {
            x: CANVAS_WIDTH,
            y,
            speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, CLOUD_WIDTH, CLOUD_HEIGHT)
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect().right() < 0.0
    }
}

/// Run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    GameOver,
}

/// Main game state, exclusively owned by the loop.
#[derive(Debug, Clone)]
pub struct DinoGame {
    pub config: GameConfig,
    pub status: GameStatus,

    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub spawner: Spawner,

    /// Internal score, +1 per active frame.
    pub score: u64,
    /// Best raw score seen so far (loaded at start, raised on a new best).
    pub high_score: u64,
    /// True when the run that just ended beat the previous high score.
    pub new_high_score: bool,
    /// Obstacle scroll speed per frame.
    pub speed: f64,

    /// Active frames since process start (not reset on restart).
    pub frame_count: u64,
}

impl DinoGame {
    pub fn new<R: Rng>(config: GameConfig, high_score: u64, rng: &mut R) -> Self {
        let spawner = Spawner::new(&config.spawn, rng);
        Self {
            player: Player::new(config.physics.gravity, config.physics.jump_impulse),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            spawner,
            status: GameStatus::Active,
            score: 0,
            high_score,
            new_high_score: false,
            speed: config.speed.initial,
            frame_count: 0,
            config,
        }
    }

    /// Score as shown on screen.
    pub fn display_score(&self) -> u64 {
        self.score / SCORE_DIVISOR
    }

    pub fn display_high_score(&self) -> u64 {
        self.high_score / SCORE_DIVISOR
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Re-initialize everything belonging to a run. The high score survives.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.player = Player::new(
            self.config.physics.gravity,
            self.config.physics.jump_impulse,
        );
        self.obstacles.clear();
        self.clouds.clear();
        self.spawner = Spawner::new(&self.config.spawn, rng);
        self.score = 0;
        self.new_high_score = false;
        self.speed = self.config.speed.initial;
        self.status = GameStatus::Active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn player() -> Player {
        Player::new(GRAVITY, JUMP_IMPULSE)
    }

    #[test]
    fn test_new_game_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let game = DinoGame::new(GameConfig::default(), 250, &mut rng);

        assert_eq!(game.status, GameStatus::Active);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 250);
        assert_eq!(game.display_high_score(), 25);
        assert!(game.obstacles.is_empty());
        assert!(game.clouds.is_empty());
        assert!((game.speed - INITIAL_SPEED).abs() < f64::EPSILON);
        assert!(!game.player.airborne);
        assert!((game.player.bottom() - GROUND_Y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&Rect::new(9.9, 9.9, 1.0, 1.0)));
        // Contained
        assert!(a.intersects(&Rect::new(2.0, 2.0, 1.0, 1.0)));
        // Separate
        assert!(!a.intersects(&Rect::new(20.0, 0.0, 5.0, 5.0)));
        assert!(!a.intersects(&Rect::new(0.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 5.0, 10.0)));
        assert!(!a.intersects(&Rect::new(-5.0, 0.0, 5.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 5.0)));
        assert!(!a.intersects(&Rect::new(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_jump_sets_impulse_and_airborne() {
        let mut p = player();
        assert!(p.jump());
        assert!(p.airborne);
        assert!((p.velocity - JUMP_IMPULSE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_double_jump() {
        let mut p = player();
        assert!(p.jump());
        p.update();
        let before = p.clone();

        assert!(!p.jump());
        assert!((p.velocity - before.velocity).abs() < f64::EPSILON);
        assert!((p.y - before.y).abs() < f64::EPSILON);
        assert!(p.airborne);
    }

    #[test]
    fn test_gravity_increases_velocity_each_airborne_frame() {
        let mut p = player();
        p.jump();
        let mut last = p.velocity;
        let mut frames = 0;
        loop {
            p.update();
            if !p.airborne {
                break;
            }
            assert!(
                (p.velocity - (last + GRAVITY)).abs() < 1e-9,
                "velocity should grow by exactly one gravity step"
            );
            last = p.velocity;
            frames += 1;
            assert!(frames < 200, "runner never landed");
        }
        assert!(frames > 30, "a full jump arc lasts well over 30 frames");
    }

    #[test]
    fn test_landing_clamps_to_ground() {
        let mut p = player();
        p.airborne = true;
        p.y = GROUND_Y - p.height - 1.0;
        p.velocity = 5.0;

        p.update();

        assert!((p.bottom() - GROUND_Y).abs() < f64::EPSILON);
        assert!((p.velocity - 0.0).abs() < f64::EPSILON);
        assert!(!p.airborne);
    }

    #[test]
    fn test_grounded_update_stays_on_ground() {
        let mut p = player();
        for _ in 0..10 {
            p.update();
            assert!((p.bottom() - GROUND_Y).abs() < f64::EPSILON);
            assert!((p.velocity - 0.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_jump_peak_height() {
        let mut p = player();
        p.jump();
        let mut min_y = p.y;
        loop {
            p.update();
            if !p.airborne {
                break;
            }
            min_y = min_y.min(p.y);
        }
        let peak = GROUND_Y - PLAYER_HEIGHT - min_y;
        // Analytic peak is v²/2g = 120; the discrete step lands a little under
        assert!(peak > 100.0 && peak <= 120.0, "peak was {}", peak);
    }

    #[test]
    fn test_run_animation_alternates_while_grounded() {
        let mut p = player();
        assert_eq!(p.pose(), PlayerPose::RunA);
        for _ in 0..RUN_ANIM_PERIOD {
            p.update();
        }
        assert_eq!(p.pose(), PlayerPose::RunB);
        for _ in 0..RUN_ANIM_PERIOD {
            p.update();
        }
        assert_eq!(p.pose(), PlayerPose::RunA);
    }

    #[test]
    fn test_jump_pose_while_airborne() {
        let mut p = player();
        p.jump();
        p.update();
        assert_eq!(p.pose(), PlayerPose::Jump);
    }

    #[test]
    fn test_obstacle_dimensions_and_placement() {
        let cactus = Obstacle::new(ObstacleKind::Cactus);
        assert!((cactus.x - CANVAS_WIDTH).abs() < f64::EPSILON);
        assert!((cactus.rect().bottom() - GROUND_Y).abs() < f64::EPSILON);

        let bird = Obstacle::new(ObstacleKind::Bird);
        assert!(bird.rect().bottom() < GROUND_Y);
        // A standing runner still reaches the bird
        let standing = player().rect();
        assert!(bird.rect().bottom() > standing.y);
    }

    #[test]
    fn test_obstacle_update_moves_left() {
        let mut o = Obstacle::new(ObstacleKind::Cactus);
        o.update(10.0);
        assert!((o.x - (CANVAS_WIDTH - 10.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_off_screen_only_when_right_edge_negative() {
        let mut o = Obstacle::new(ObstacleKind::Cactus);
        o.x = -CACTUS_WIDTH;
        assert!(!o.is_off_screen(), "right edge exactly at 0 is still on screen");
        o.x = -CACTUS_WIDTH - 0.5;
        assert!(o.is_off_screen());

        let mut c = Cloud::new(100.0, 2.0);
        c.x = -CLOUD_WIDTH + 1.0;
        assert!(!c.is_off_screen());
        c.update();
        assert!(c.is_off_screen());
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut game = DinoGame::new(GameConfig::default(), 10, &mut rng);
        game.score = 900;
        game.high_score = 900;
        game.speed = 15.0;
        game.status = GameStatus::GameOver;
        game.obstacles.push(Obstacle::new(ObstacleKind::Bird));
        game.clouds.push(Cloud::new(80.0, 1.5));

        game.reset(&mut rng);

        assert_eq!(game.status, GameStatus::Active);
        assert_eq!(game.score, 0);
        assert_eq!(game.high_score, 900);
        assert!((game.speed - INITIAL_SPEED).abs() < f64::EPSILON);
        assert!(game.obstacles.is_empty());
        assert!(game.clouds.is_empty());
    }
}
