#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    Running,
    Paused,
}

const SWEEP_SPEED: f64 = 1.4;
const MAX_FRAME_DELTA: f64 = 0.25;
const FULL_ROTATION: f64 = 2.0 * std::f64::consts::PI;
const REVEAL_SECONDS: f64 = 0.35;

/// Frame clock for the title sweep and the detail overlay reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    pub counter: f64,
    pub mode: AnimationMode,
    /// 0.0 when the overlay starts to open, 1.0 once fully shown.
    pub reveal: f64,
    last_tick: Option<f64>,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            counter: 0.0,
            mode: AnimationMode::Running,
            reveal: 1.0,
            last_tick: None,
        }
    }
}

impl AnimationClock {
    pub fn tick(&mut self, now_seconds: f64) {
        let delta = self
            .last_tick
            .map_or(0.0, |last| (now_seconds - last).clamp(0.0, MAX_FRAME_DELTA));
        self.last_tick = Some(now_seconds);

        // The reveal runs even when the sweep is paused
        self.reveal = (self.reveal + delta / REVEAL_SECONDS).min(1.0);

        self.counter = match self.mode {
            AnimationMode::Running => {
                delta.mul_add(SWEEP_SPEED, self.counter).rem_euclid(FULL_ROTATION)
            }
            AnimationMode::Paused => self.counter.rem_euclid(FULL_ROTATION),
        };
    }

    pub fn restart_reveal(&mut self) {
        self.reveal = 0.0;
    }

    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            AnimationMode::Running => AnimationMode::Paused,
            AnimationMode::Paused => AnimationMode::Running,
        };
    }

    /// Percentage of the screen the overlay covers at this point of the reveal.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn overlay_percent(&self, full: u16) -> u16 {
        let eased = 1.0 - (1.0 - self.reveal).powi(2);
        let start = f64::from(full) * 0.6;
        (eased.mul_add(f64::from(full) - start, start)).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    #[test]
    fn first_tick_initializes_time_without_advancing() {
        let mut clock = AnimationClock {
            counter: 1.2345,
            ..AnimationClock::default()
        };
        clock.tick(10.0);
        assert_close(clock.counter, 1.2345);
    }

    #[test]
    fn running_mode_advances_counter_and_wraps() {
        let start = FULL_ROTATION - 0.1;
        let mut clock = AnimationClock {
            counter: start,
            ..AnimationClock::default()
        };
        clock.tick(4.0);
        clock.tick(4.2);

        assert_close(clock.counter, (start + 0.2 * SWEEP_SPEED).rem_euclid(FULL_ROTATION));
    }

    #[test]
    fn paused_mode_keeps_counter_but_finishes_reveal() {
        let mut clock = AnimationClock {
            counter: 2.25,
            mode: AnimationMode::Paused,
            ..AnimationClock::default()
        };
        clock.restart_reveal();
        clock.tick(1.0);
        clock.tick(1.2);
        clock.tick(1.4);

        assert_close(clock.counter, 2.25);
        assert_close(clock.reveal, 1.0);
    }

    #[test]
    fn large_frame_gap_is_clamped() {
        let mut clock = AnimationClock::default();
        clock.tick(3.0);
        clock.tick(30.0);
        assert_close(clock.counter, MAX_FRAME_DELTA * SWEEP_SPEED);
    }

    #[test]
    fn backwards_time_does_not_reverse_animation() {
        let mut clock = AnimationClock {
            counter: 3.5,
            ..AnimationClock::default()
        };
        clock.tick(10.0);
        clock.tick(9.0);
        assert_close(clock.counter, 3.5);
    }

    #[test]
    fn overlay_grows_to_full_size() {
        let mut clock = AnimationClock::default();
        clock.restart_reveal();
        assert_eq!(clock.overlay_percent(90), 54);

        clock.tick(0.0);
        clock.tick(0.2);
        let midway = clock.overlay_percent(90);
        assert!(midway > 54 && midway < 90);

        clock.tick(0.4);
        assert_eq!(clock.overlay_percent(90), 90);
    }

    #[test]
    fn toggle_pause_round_trips() {
        let mut clock = AnimationClock::default();
        clock.toggle_pause();
        assert_eq!(clock.mode, AnimationMode::Paused);
        clock.toggle_pause();
        assert_eq!(clock.mode, AnimationMode::Running);
    }
}
