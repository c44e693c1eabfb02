//! Sprite-sheet animation playback
//!
//! A sprite is a strip of equally sized frames on a sheet. Playback advances a
//! fractional frame cursor by `speed * dt`; play-once sprites end in
//! `Playback::Finished` instead of wrapping.

use glam::Vec2;
use serde::Serialize;

/// Playback state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Playback {
    /// Cycles through the frame sequence forever
    Looping,
    /// Plays the sequence once
    PlayingOnce,
    /// A play-once animation that has run past its last frame
    Finished,
}

/// Source rectangle on the sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRect {
    pub origin: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct Sprite {
    /// Sheet path the frames come from
    pub sheet: &'static str,
    /// Top-left corner of frame 0 on the sheet
    pub offset: Vec2,
    /// Frame size (also the entity's collision box)
    pub size: Vec2,
    /// Frames per second (0 = static, always frame 0)
    pub speed: f32,
    /// Frame indices to cycle through
    pub frames: Vec<u32>,
    pub playback: Playback,
    /// Fractional position in `frames`
    cursor: f32,
}

impl Sprite {
    /// A single static frame
    pub fn still(sheet: &'static str, offset: Vec2, size: Vec2) -> Self {
        Self::looping(sheet, offset, size, 0.0, vec![0])
    }

    pub fn looping(
        sheet: &'static str,
        offset: Vec2,
        size: Vec2,
        speed: f32,
        frames: Vec<u32>,
    ) -> Self {
        Self {
            sheet,
            offset,
            size,
            speed,
            frames,
            playback: Playback::Looping,
            cursor: 0.0,
        }
    }

    pub fn once(
        sheet: &'static str,
        offset: Vec2,
        size: Vec2,
        speed: f32,
        frames: Vec<u32>,
    ) -> Self {
        Self {
            playback: Playback::PlayingOnce,
            ..Self::looping(sheet, offset, size, speed, frames)
        }
    }

    /// Advance the animation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.playback == Playback::Finished {
            return;
        }
        self.cursor += self.speed * dt;

        if self.playback == Playback::PlayingOnce
            && self.speed > 0.0
            && self.cursor.floor() as usize >= self.frames.len()
        {
            self.playback = Playback::Finished;
        }
    }

    pub fn is_done(&self) -> bool {
        self.playback == Playback::Finished
    }

    /// Frame index currently shown
    pub fn current_frame(&self) -> u32 {
        if self.speed <= 0.0 || self.frames.is_empty() {
            return 0;
        }
        let idx = self.cursor.floor() as usize;
        match self.playback {
            Playback::Looping => self.frames[idx % self.frames.len()],
            Playback::PlayingOnce | Playback::Finished => {
                self.frames[idx.min(self.frames.len() - 1)]
            }
        }
    }

    /// Where the current frame sits on the sheet (frames run left to right)
    pub fn source_rect(&self) -> SourceRect {
        let frame = self.current_frame() as f32;
        SourceRect {
            origin: self.offset + Vec2::new(frame * self.size.x, 0.0),
            size: self.size,
        }
    }
}
