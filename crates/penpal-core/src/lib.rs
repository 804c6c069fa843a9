//! Core types and state machines for the Penpal chat demo engine.
//!
//! This crate provides the logic layer of the demo, free of any rendering
//! backend:
//! - Cursor classification and direction tracking: [`Direction`],
//!   [`CursorSample`], [`DirectionTracker`]
//! - The scripted thought sequence: [`ThoughtScript`], [`Sequencer`]
//! - Timed transitions: [`Easing`], [`EasedValue`]
//! - Session and conversation state: [`SessionGate`], [`Transcript`]
//! - Collaborator surface contracts: [`surface`]
//!
//! Every state machine advances on explicit millisecond timestamps, so the
//! whole crate is testable against a simulated clock.

mod animation;
mod direction;
mod error;
mod event;
mod geometry;
mod script;
mod sequencer;
mod session;
pub mod surface;
mod tracker;
mod transcript;

pub use animation::{EasedValue, Easing};
pub use direction::{classify, CursorSample, Direction, SPRITE_DIR};
pub use error::SetupError;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use script::{ThoughtScript, Timing};
pub use sequencer::{Effect, Sequencer, SequencerState};
pub use session::SessionGate;
pub use surface::{
    CaretProbe, SpriteSurface, SurfaceStyle, TextSurface, TranscriptSink, Visibility,
};
pub use tracker::{DirectionTracker, DEFAULT_THROTTLE_MS};
pub use transcript::{Entry, EntryId, Participant, Transcript};
