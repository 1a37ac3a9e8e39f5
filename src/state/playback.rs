//! Frame cursor for looping animations.

use crate::config::{FALLBACK_FRAME_DELAY, MIN_FRAME_DELAY};
use std::time::Duration;

/// Replaces unset or near-zero frame delays with the fallback delay.
pub fn normalize_delay(delay: Duration) -> Duration {
    if delay < MIN_FRAME_DELAY {
        FALLBACK_FRAME_DELAY
    } else {
        delay
    }
}

/// Tracks which frame is on screen and how long it stays there.
///
/// Wraps from the last frame back to the first indefinitely.
#[derive(Debug, Clone)]
pub struct Playback {
    delays: Vec<Duration>,
    current: usize,
}

impl Playback {
    /// Creates a cursor positioned on the first frame.
    pub fn new(delays: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            delays: delays.into_iter().map(normalize_delay).collect(),
            current: 0,
        }
    }

    /// How long the current frame stays on screen.
    pub fn current_delay(&self) -> Duration {
        self.delays
            .get(self.current)
            .copied()
            .unwrap_or(FALLBACK_FRAME_DELAY)
    }

    /// A single frame needs no timer.
    pub fn is_animated(&self) -> bool {
        self.delays.len() > 1
    }

    /// Moves to the next frame and returns its index.
    pub fn advance(&mut self) -> usize {
        if !self.delays.is_empty() {
            self.current = (self.current + 1) % self.delays.len();
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn loops_back_to_first_frame() {
        let mut playback = Playback::new([ms(50), ms(60), ms(70)]);
        assert_eq!(playback.current_delay(), ms(50));

        let visited: Vec<usize> = (0..7).map(|_| playback.advance()).collect();
        assert_eq!(visited, vec![1, 2, 0, 1, 2, 0, 1]);
        assert_eq!(playback.current_delay(), ms(60));
    }

    #[test]
    fn tiny_delays_use_fallback() {
        let playback = Playback::new([ms(0), ms(10), ms(20), ms(500)]);
        assert_eq!(playback.current_delay(), FALLBACK_FRAME_DELAY);
        assert_eq!(normalize_delay(ms(10)), FALLBACK_FRAME_DELAY);
        assert_eq!(normalize_delay(ms(20)), ms(20));
        assert_eq!(normalize_delay(ms(500)), ms(500));
    }

    #[test]
    fn single_frame_is_not_animated() {
        let mut playback = Playback::new([ms(80)]);
        assert!(!playback.is_animated());
        assert_eq!(playback.advance(), 0);

        let mut empty = Playback::new([]);
        assert!(!empty.is_animated());
        assert_eq!(empty.advance(), 0);
        assert_eq!(empty.current_delay(), FALLBACK_FRAME_DELAY);
    }
}
