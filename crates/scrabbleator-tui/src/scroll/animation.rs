//! Scroll animation for the word list
//!
//! The animator is driven by explicit instants so the draw loop and tests
//! share one clock. Keyboard and wheel deltas are batched until the next
//! `update`, then folded into a single animation.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp_u16, progress};

#[derive(Debug, Clone)]
struct Glide {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    glide: Option<Glide>,
    config: ScrollConfig,
    offset: u16,
    pending_delta: i32,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    /// An animation is running or deltas wait to be applied
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.glide.is_some() || self.pending_delta != 0
    }

    /// Visible offset in rows
    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Where the viewport ends up once the animation finishes
    pub fn target(&self) -> u16 {
        self.glide.as_ref().map(|g| g.to).unwrap_or(self.offset)
    }

    /// Jump without animating
    pub fn reset(&mut self, offset: u16) {
        self.glide = None;
        self.offset = offset;
        self.pending_delta = 0;
    }

    /// Animate towards `target`, clamped to `max_offset`
    pub fn scroll_to(&mut self, target: u16, max_offset: u16, now: Instant) {
        let target = target.min(max_offset);
        self.pending_delta = 0;

        if !self.config.is_smooth() || self.offset == target {
            self.offset = target;
            self.glide = None;
            return;
        }

        self.glide = Some(Glide {
            start: now,
            from: self.offset,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Queue a relative move; positive scrolls towards the end of the list
    pub fn scroll_by(&mut self, delta: i32, max_offset: u16) {
        if self.config.is_smooth() {
            self.pending_delta += delta;
            return;
        }
        self.glide = None;
        self.offset = clamp_offset(self.offset as i32 + delta, max_offset);
    }

    pub fn scroll_lines(&mut self, down: bool, max_offset: u16) {
        let lines = self.config.scroll_lines.max(1) as i32;
        self.scroll_by(if down { lines } else { -lines }, max_offset);
    }

    pub fn scroll_page(&mut self, down: bool, viewport_height: u16, max_offset: u16) {
        let page = viewport_height.saturating_sub(1).max(1) as i32;
        self.scroll_by(if down { page } else { -page }, max_offset);
    }

    /// Advance to `now`. Returns true while the offset is still moving.
    pub fn update(&mut self, max_offset: u16, now: Instant) -> bool {
        if self.pending_delta != 0 {
            let base = self.target() as i32;
            let target = clamp_offset(base + self.pending_delta, max_offset);
            self.pending_delta = 0;
            self.scroll_to(target, max_offset, now);
        }

        // The list may have shrunk under a running animation
        if self.offset > max_offset {
            self.offset = max_offset;
        }

        let Some(glide) = &self.glide else {
            return false;
        };
        let to = glide.to.min(max_offset);
        let t = progress(glide.start, now, glide.duration);
        if t >= 1.0 {
            self.offset = to;
            self.glide = None;
            return false;
        }
        self.offset = lerp_u16(glide.from, to, glide.easing.apply(t));
        true
    }
}

fn clamp_offset(value: i32, max_offset: u16) -> u16 {
    value.clamp(0, max_offset as i32) as u16
}
