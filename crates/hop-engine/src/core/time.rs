/// Frame rate every per-tick constant is tuned for.
pub const PREFERRED_FRAME_RATE: f32 = 60.0;

/// Length of one preferred frame in milliseconds.
pub const PREFERRED_FRAME_MS: f32 = 1000.0 / PREFERRED_FRAME_RATE;

/// Frame clock adapter.
/// Turns a variable wall-clock frame delta into a speed multiplier relative
/// to the preferred frame length, so per-tick quantities scale with elapsed time.
///
/// There is no accumulator and no substepping: one call covers one elapsed
/// sample, so a long stall produces one proportionally large step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Preferred frame length in milliseconds.
    preferred_frame_ms: f32,
    /// Multipliers above this are reported as spikes.
    spike_multiplier: f32,
    /// Total elapsed time fed through the clock, in seconds.
    elapsed: f64,
    frames: u64,
}

impl FrameClock {
    pub fn new(target_frame_rate: f32) -> Self {
        debug_assert!(target_frame_rate > 0.0, "frame rate must be positive");
        Self {
            preferred_frame_ms: 1000.0 / target_frame_rate,
            spike_multiplier: 4.0,
            elapsed: 0.0,
            frames: 0,
        }
    }

    pub fn with_spike_multiplier(mut self, spike: f32) -> Self {
        self.spike_multiplier = spike;
        self
    }

    /// Speed multiplier for a frame lasting `frame_dt` seconds.
    pub fn multiplier(&self, frame_dt: f32) -> f32 {
        frame_dt * 1000.0 / self.preferred_frame_ms
    }

    /// Record a frame and return its speed multiplier.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        self.elapsed += frame_dt as f64;
        self.frames += 1;

        let multiplier = self.multiplier(frame_dt);
        if multiplier > self.spike_multiplier {
            log::warn!(
                "frame {} took {:.1} ms ({:.2}x preferred); single-step motion may tunnel",
                self.frames,
                frame_dt * 1000.0,
                multiplier
            );
        }
        multiplier
    }

    /// The preferred frame length in seconds.
    pub fn preferred_dt(&self) -> f32 {
        self.preferred_frame_ms / 1000.0
    }

    /// Total time fed through [`advance`](Self::advance), in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(PREFERRED_FRAME_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_frame_is_unit_multiplier() {
        let clock = FrameClock::default();
        let m = clock.multiplier(clock.preferred_dt());
        assert!((m - 1.0).abs() < 1e-5, "multiplier was {}", m);
    }

    #[test]
    fn double_length_frame_doubles_multiplier() {
        let clock = FrameClock::default();
        let m = clock.multiplier(2.0 / 60.0);
        assert!((m - 2.0).abs() < 1e-5, "multiplier was {}", m);
    }

    #[test]
    fn stall_is_not_capped() {
        let mut clock = FrameClock::default();
        let m = clock.advance(1.0);
        assert!((m - 60.0).abs() < 1e-3);
    }

    #[test]
    fn advance_tracks_elapsed_and_frames() {
        let mut clock = FrameClock::new(30.0);
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.frames(), 2);
        assert!((clock.elapsed() - 0.75).abs() < 1e-9);
        assert!((clock.multiplier(1.0 / 30.0) - 1.0).abs() < 1e-5);
    }
}
