//! Round state machine

mod session;

pub use session::{GameSession, RoundOutcome, SessionState, WordMatch};
