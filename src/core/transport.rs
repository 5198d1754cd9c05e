/// Playback phase machine: `Idle` (no asset) -> `Loaded` (asset, stopped)
/// -> `Playing`, and back to `Loaded` on stop or on a newer file load.
///
/// The machine is decision-only: it never touches the audio graph itself.
/// Callers ask it what is allowed, perform the side effects, and commit the
/// transition only when those side effects succeeded, so a failed start or
/// stop leaves every piece of state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loaded,
    Playing,
}

/// Identifies one load request. Tokens increase monotonically; only the
/// newest one may apply its result, so a slow decode that resolves after a
/// later file selection is discarded instead of clobbering the newer asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken(u64);

#[derive(Debug)]
pub struct Transport {
    phase: Phase,
    latest_load: u64,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            latest_load: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Register a new load request. The phase is left unchanged until the
    /// decode succeeds; a failed or abandoned load keeps the prior state.
    pub fn begin_load(&mut self) -> LoadToken {
        self.latest_load += 1;
        LoadToken(self.latest_load)
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        token.0 == self.latest_load
    }

    /// Apply a finished decode. Returns false for a stale token, in which
    /// case the caller must discard the decoded buffer.
    pub fn finish_load(&mut self, token: LoadToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.phase = Phase::Loaded;
        true
    }

    /// Commit `Loaded` -> `Playing` after the source node started.
    pub fn commit_start(&mut self) {
        debug_assert_eq!(self.phase, Phase::Loaded);
        self.phase = Phase::Playing;
    }

    /// Commit `Playing` -> `Loaded` after the source node stopped.
    pub fn commit_stop(&mut self) {
        debug_assert_eq!(self.phase, Phase::Playing);
        self.phase = Phase::Loaded;
    }
}
