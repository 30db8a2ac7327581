use super::constants::TOAST_DEFAULT_MS;
use instant::Instant;
use std::time::Duration;

/// Single-slot toast: the newest message replaces the old one and restarts
/// the hide deadline. No queue.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    message: String,
    hide_at: Option<Instant>,
    generation: u64,
}

impl ToastState {
    /// Show `message` until `now + duration` (default 1400 ms). Returns the
    /// generation token the caller's hide timer must present to `expire`.
    pub fn notify(&mut self, message: &str, duration: Option<Duration>, now: Instant) -> u64 {
        let duration = effective_duration(duration);
        self.message.clear();
        self.message.push_str(message);
        self.hide_at = Some(now + duration);
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Hide if `generation` is still current. Stale timers are ignored.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.hide_at.is_none() {
            return false;
        }
        self.hide_at = None;
        true
    }

    /// Time left until the current deadline; what the page's hide timer waits.
    pub fn hide_delay(&self, now: Instant) -> Duration {
        match self.hide_at {
            Some(t) if t > now => t - now,
            _ => Duration::ZERO,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.hide_at.is_some_and(|t| now < t)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hide_at(&self) -> Option<Instant> {
        self.hide_at
    }
}

#[inline]
pub fn effective_duration(duration: Option<Duration>) -> Duration {
    duration.unwrap_or(Duration::from_millis(TOAST_DEFAULT_MS))
}
