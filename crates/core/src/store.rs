//! High-score persistence port.
//!
//! The engine loads the record once when a session is created and saves it
//! whenever it is beaten. Both calls are best effort: implementations handle
//! their own failures, so nothing here can fail from the engine's view.

/// Storage for the all-time best score
pub trait HighScoreStore {
    /// Read the stored record. `None` means there is no usable record yet.
    fn load(&mut self) -> Option<u32>;

    /// Persist a new record. Failures are swallowed by the implementation.
    fn save(&mut self, score: u32);
}

/// In-memory store, for tests and headless runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScore {
    value: Option<u32>,
    saves: u32,
}

impl MemoryHighScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            saves: 0,
        }
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// Number of `save` calls seen
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&mut self) -> Option<u32> {
        self.value
    }

    fn save(&mut self, score: u32) {
        self.value = Some(score);
        self.saves += 1;
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&mut self) -> Option<u32> {
        (**self).load()
    }

    fn save(&mut self, score: u32) {
        (**self).save(score)
    }
}
