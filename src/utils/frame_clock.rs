//! Fixed-rate frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps at the end of each frame so the loop runs at a fixed rate.
pub struct FrameClock {
    frame_duration: Duration,
    next_deadline: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let frame_duration = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self {
            frame_duration,
            next_deadline: Instant::now() + frame_duration,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Block until the current frame's deadline. Returns false if the frame
    /// had already overrun it.
    ///
    /// An overrunning frame restarts the schedule from now; missed frames are
    /// dropped, never replayed.
    pub fn wait_for_next_frame(&mut self) -> bool {
        let now = Instant::now();
        if now < self.next_deadline {
            thread::sleep(self.next_deadline - now);
            self.next_deadline += self.frame_duration;
            true
        } else {
            let late = now - self.next_deadline;
            if late > self.frame_duration {
                log::debug!("Frame overran by {:.1}ms", late.as_secs_f64() * 1000.0);
            }
            self.next_deadline = now + self.frame_duration;
            false
        }
    }
}
