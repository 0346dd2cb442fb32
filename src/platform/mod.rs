//! Platform abstraction layer
//!
//! The simulation core only touches the outside world through the traits and
//! types here:
//! - `Surface`: blit-by-position render target
//! - `AudioSink`: fire-and-forget sound triggers
//! - `InputState`: per-tick boolean input snapshot
//! - `Event`: quit and spawn-tick signals from the window backend
//! - `FrameClock` / `SpawnTimer`: fixed-rate frame pacing and the periodic
//!   asteroid spawn signal
//!
//! `NullSurface` and `NullAudio` are headless backends sufficient to run the
//! whole loop without a window.

use std::time::{Duration, Instant};

use glam::Vec2;

/// Handle for a drawable asset. Which image backs each handle is a backend
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Ship,
    /// Grayscale ship icon shown once per remaining life
    LifeIcon,
    Projectile,
    AsteroidNormal,
    AsteroidSmall,
    Explosion,
    GameOverBanner,
    NewHighScoreBanner,
}

/// Opaque 2D blit target. No return values, no state readback.
pub trait Surface {
    fn blit(&mut self, sprite: SpriteId, position: Vec2, size: Vec2, rotation_degrees: f32);
}

/// Sound effect handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Shoot,
    Explosion,
}

/// Fire-and-forget audio trigger. No acknowledgement, no completion callback.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

/// Boolean input snapshot for one tick. Key bindings are a backend concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Signals produced by the window/event backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Terminate the process
    Quit,
    /// Periodic asteroid spawn signal
    SpawnTick,
}

/// Blocks out the remainder of each frame to hold a fixed tick rate.
pub struct FrameClock {
    frame: Duration,
    deadline: Instant,
}

impl FrameClock {
    pub fn new(hz: u32) -> Self {
        let frame = Duration::from_secs(1) / hz.max(1);
        Self {
            frame,
            deadline: Instant::now() + frame,
        }
    }

    /// Sleep until the current frame's deadline, then arm the next one.
    /// A late frame re-anchors instead of trying to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            std::thread::sleep(self.deadline - now);
            self.deadline += self.frame;
        } else {
            self.deadline = now + self.frame;
        }
    }
}

/// Fixed-interval timer that yields a `SpawnTick` event each time its period
/// elapses.
pub struct SpawnTimer {
    interval: Duration,
    next_fire: Instant,
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_fire: Instant::now() + interval,
        }
    }

    /// Returns `Some(Event::SpawnTick)` once per elapsed period.
    pub fn poll(&mut self) -> Option<Event> {
        if Instant::now() >= self.next_fire {
            self.next_fire += self.interval;
            Some(Event::SpawnTick)
        } else {
            None
        }
    }
}

/// Render target that discards blits but counts them.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub blit_count: usize,
}

impl Surface for NullSurface {
    fn blit(&mut self, _sprite: SpriteId, _position: Vec2, _size: Vec2, _rotation_degrees: f32) {
        self.blit_count += 1;
    }
}

/// Audio sink that logs triggers instead of playing them.
#[derive(Debug, Default)]
pub struct NullAudio {
    pub played: Vec<Sound>,
}

impl AudioSink for NullAudio {
    fn play(&mut self, sound: Sound) {
        log::debug!("audio: {:?}", sound);
        self.played.push(sound);
    }
}
