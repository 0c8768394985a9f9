use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::session::{GameSession, Outcome, Snapshot};
use super::Player;

/// A session that several threads can submit moves to. Each `play_move`
/// holds the lock for the whole transition, so two submissions can never
/// both act for the same player.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        SharedSession {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // A panicking holder cannot leave a half-applied move behind: the board
    // is only written after every check has passed.
    fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn play_move(&self, column: isize) -> Outcome {
        self.lock().play_move(column)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    pub fn active_player(&self) -> Player {
        self.lock().active_player()
    }

    pub fn is_over(&self) -> bool {
        self.lock().is_over()
    }

    /// Run a read-only closure against the current session state
    pub fn with_session<T>(&self, f: impl FnOnce(&GameSession) -> T) -> T {
        f(&self.lock())
    }
}
