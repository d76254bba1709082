/// Gates simulation ticks to a fixed frame-time quantum. At most one tick is
/// released per call; leftover time carries into the next frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    quantum_ms: f64,
    last_ms: f64,
}

impl FrameClock {
    pub fn new(fps: u32, now_ms: f64) -> Self {
        Self {
            quantum_ms: 1000.0 / fps.max(1) as f64,
            last_ms: now_ms,
        }
    }

    pub fn quantum_ms(&self) -> f64 {
        self.quantum_ms
    }

    /// Returns true when a tick is due at `now_ms`.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let delta = now_ms - self.last_ms;
        if delta < self.quantum_ms {
            return false;
        }
        self.last_ms = now_ms - delta % self.quantum_ms;
        true
    }
}
