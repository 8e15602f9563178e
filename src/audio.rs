//! Sound cue queue
//!
//! Entities request cues during the tick; the host drains them after the
//! frame and plays them through whatever backend it owns.

use crate::assets::SoundHandle;

/// A cue ready for playback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub sound: SoundHandle,
    pub volume: f32,
}

/// Pending cues for the current frame
#[derive(Debug, Clone)]
pub struct AudioQueue {
    pending: Vec<SoundHandle>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Queue a sound for this frame
    pub fn play(&mut self, sound: SoundHandle) {
        self.pending.push(sound);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything queued so far. Muted queues still empty but yield nothing.
    pub fn drain(&mut self) -> Vec<Cue> {
        let volume = self.effective_volume();
        let cues = self.pending.drain(..);
        if volume <= 0.0 {
            return Vec::new();
        }
        cues.map(|sound| Cue { sound, volume }).collect()
    }
}
