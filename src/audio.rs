//! Sound output.
//!
//! The game never talks to a device directly. It goes through `AudioOutput`,
//! which is either a real rodio backend (with the `audio` feature) or
//! `SilentAudio`. Any problem opening the device or reading the sound files
//! means the game runs silently.

use crate::config::AssetConfig;

/// Background track, looped while a run is active.
pub const MUSIC_FILE: &str = "music.wav";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Jump,
    Hit,
}

impl SoundEffect {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Jump => "jump.wav",
            Self::Hit => "hit.wav",
        }
    }
}

/// Sink for game sounds. Implementations must never fail loudly: a sound
/// that can't play is dropped.
pub trait AudioOutput {
    fn play(&mut self, effect: SoundEffect);
    /// Start the looped background track from the beginning.
    fn start_music(&mut self);
    fn stop_music(&mut self);
    fn is_enabled(&self) -> bool;
}

/// Does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioOutput for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}
    fn start_music(&mut self) {}
    fn stop_music(&mut self) {}
    fn is_enabled(&self) -> bool {
        false
    }
}

/// Open the best available output for the configured sound directory.
pub fn open_audio(assets: &AssetConfig) -> Box<dyn AudioOutput> {
    #[cfg(feature = "audio")]
    {
        match device::RodioAudio::open(&assets.sound_dir) {
            Ok(audio) => {
                log::info!("Audio enabled ({})", assets.sound_dir.display());
                return Box::new(audio);
            }
            Err(e) => log::warn!("{}; sound disabled", e),
        }
    }
    #[cfg(not(feature = "audio"))]
    {
        log::info!(
            "Built without audio support; ignoring {}",
            assets.sound_dir.display()
        );
    }
    Box::new(SilentAudio)
}

#[cfg(feature = "audio")]
pub use device::RodioAudio;

#[cfg(feature = "audio")]
mod device {
    use super::{AudioOutput, SoundEffect, MUSIC_FILE};
    use crate::error::AudioError;
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use std::sync::Arc;

    type SoundData = Arc<[u8]>;

    /// rodio-backed output. Sound files are read once and decoded per play.
    pub struct RodioAudio {
        // Dropping the stream closes the device
        _stream: OutputStream,
        handle: OutputStreamHandle,
        jump: SoundData,
        hit: SoundData,
        music: SoundData,
        music_sink: Option<Sink>,
    }

    impl RodioAudio {
        pub fn open(dir: &Path) -> Result<Self, AudioError> {
            let jump = read_sound(dir, SoundEffect::Jump.file_name())?;
            let hit = read_sound(dir, SoundEffect::Hit.file_name())?;
            let music = read_sound(dir, MUSIC_FILE)?;

            let (stream, handle) =
                OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;

            Ok(Self {
                _stream: stream,
                handle,
                jump,
                hit,
                music,
                music_sink: None,
            })
        }
    }

    /// Read a sound file and check that it decodes.
    fn read_sound(dir: &Path, name: &str) -> Result<SoundData, AudioError> {
        let path = dir.join(name);
        if !path.is_file() {
            return Err(AudioError::NotFound(path.display().to_string()));
        }
        let bytes = fs::read(&path).map_err(|source| AudioError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let data: SoundData = Arc::from(bytes);
        Decoder::new(Cursor::new(Arc::clone(&data))).map_err(|e| AudioError::Decode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(data)
    }

    fn decode(data: &SoundData) -> Option<Decoder<Cursor<SoundData>>> {
        Decoder::new(Cursor::new(Arc::clone(data))).ok()
    }

    impl AudioOutput for RodioAudio {
        fn play(&mut self, effect: SoundEffect) {
            let data = match effect {
                SoundEffect::Jump => &self.jump,
                SoundEffect::Hit => &self.hit,
            };
            if let Some(source) = decode(data) {
                if let Err(e) = self.handle.play_raw(source.convert_samples()) {
                    log::warn!("Failed to play {:?}: {}", effect, e);
                }
            }
        }

        fn start_music(&mut self) {
            self.stop_music();
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    if let Some(source) = decode(&self.music) {
                        sink.append(source.repeat_infinite());
                    }
                    self.music_sink = Some(sink);
                }
                Err(e) => log::warn!("Failed to start music: {}", e),
            }
        }

        fn stop_music(&mut self) {
            if let Some(sink) = self.music_sink.take() {
                sink.stop();
            }
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }
}
