//! Test-only helpers for scripted sessions and predictable random sources.

use std::io::Cursor;

use rand::rngs::mock::StepRng;

use crate::io::input::InputSession;
use crate::io::random::BoundedRandomSource;

/// Session reading from an in-memory script and writing into a buffer.
pub type ScriptedSession = InputSession<Cursor<Vec<u8>>, Vec<u8>>;

/// Create a session whose stdin is `input`.
pub fn scripted_session(input: &str) -> ScriptedSession {
    InputSession::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Everything the session printed, prompts included.
pub fn output_of(session: ScriptedSession) -> String {
    String::from_utf8_lossy(&session.into_writer()).into_owned()
}

/// Source whose raw draws are `first`, `first + 1`, `first + 2`, ...
pub fn counting_source(first: u32) -> BoundedRandomSource<StepRng> {
    BoundedRandomSource::new(StepRng::new(u64::from(first) << 1, 2))
}

/// Source whose raw draw is always `raw`.
pub fn constant_source(raw: u32) -> BoundedRandomSource<StepRng> {
    BoundedRandomSource::new(StepRng::new(u64::from(raw) << 1, 0))
}
