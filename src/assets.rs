//! Sprite loading.
//!
//! Each sprite is looked up by file name in the image directory. A missing or
//! undecodable file is replaced by a solid-color placeholder, which the
//! renderer stretches over the entity's rectangle like any other sprite.

use crate::error::AssetError;
use crate::game::{ObstacleKind, PlayerPose};
use image::RgbaImage;
use std::path::Path;

/// Alpha below this is treated as transparent.
const ALPHA_CUTOFF: u8 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    RunA,
    RunB,
    Jump,
    Cactus,
    Bird,
    Cloud,
}

impl SpriteId {
    pub const ALL: [SpriteId; 6] = [
        SpriteId::RunA,
        SpriteId::RunB,
        SpriteId::Jump,
        SpriteId::Cactus,
        SpriteId::Bird,
        SpriteId::Cloud,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::RunA => "dino_run1.png",
            Self::RunB => "dino_run2.png",
            Self::Jump => "dino_jump.png",
            Self::Cactus => "cactus.png",
            Self::Bird => "bird.png",
            Self::Cloud => "cloud.png",
        }
    }

    /// Fill color used when the image can't be loaded.
    pub fn placeholder_color(&self) -> [u8; 3] {
        match self {
            Self::RunA | Self::RunB | Self::Jump => [83, 83, 83],
            Self::Cactus => [60, 140, 60],
            Self::Bird => [160, 80, 160],
            Self::Cloud => [200, 200, 210],
        }
    }

    pub fn for_pose(pose: PlayerPose) -> Self {
        match pose {
            PlayerPose::RunA => Self::RunA,
            PlayerPose::RunB => Self::RunB,
            PlayerPose::Jump => Self::Jump,
        }
    }

    pub fn for_obstacle(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Cactus => Self::Cactus,
            ObstacleKind::Bird => Self::Bird,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A decoded image, or a flat color standing in for one.
#[derive(Debug, Clone)]
pub enum Sprite {
    Image(RgbaImage),
    Placeholder([u8; 3]),
}

impl Sprite {
    /// Color at normalized coordinates `u`, `v` in `[0, 1)`, nearest pixel.
    /// `None` where the image is transparent.
    pub fn sample(&self, u: f64, v: f64) -> Option<[u8; 3]> {
        match self {
            Sprite::Placeholder(color) => Some(*color),
            Sprite::Image(img) => {
                let (w, h) = img.dimensions();
                if w == 0 || h == 0 {
                    return None;
                }
                let x = ((u.clamp(0.0, 1.0) * w as f64) as u32).min(w - 1);
                let y = ((v.clamp(0.0, 1.0) * h as f64) as u32).min(h - 1);
                let px = img.get_pixel(x, y);
                if px[3] < ALPHA_CUTOFF {
                    None
                } else {
                    Some([px[0], px[1], px[2]])
                }
            }
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Sprite::Placeholder(_))
    }
}

/// Decode one image file to RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::NotFound(path.display().to_string()));
    }
    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Every sprite the game draws, indexed by `SpriteId`.
#[derive(Debug, Clone)]
pub struct SpriteSet {
    sprites: [Sprite; 6],
}

impl SpriteSet {
    /// Load all sprites from `dir`, substituting placeholders for failures.
    pub fn load(dir: &Path) -> Self {
        let sprites = SpriteId::ALL.map(|id| match load_image(&dir.join(id.file_name())) {
            Ok(img) => Sprite::Image(img),
            Err(e) => {
                log::warn!("{}; using placeholder", e);
                Sprite::Placeholder(id.placeholder_color())
            }
        });
        let set = Self { sprites };
        log::info!(
            "Loaded sprites from {} ({} placeholders)",
            dir.display(),
            set.placeholder_count()
        );
        set
    }

    /// All placeholders, no file access.
    pub fn placeholders() -> Self {
        Self {
            sprites: SpriteId::ALL.map(|id| Sprite::Placeholder(id.placeholder_color())),
        }
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.index()]
    }

    pub fn placeholder_count(&self) -> usize {
        self.sprites.iter().filter(|s| s.is_placeholder()).count()
    }
}
