//! Headless surfaces and wiring for the Penpal chat demo engine.
//!
//! This crate implements the collaborator contracts from `penpal-core`:
//! - [`PromptInput`] — the editable text surface
//! - [`CharacterSprite`] — the sprite surface with its exit slide
//! - [`ThoughtBubble`] — the typewriter target with its exit float
//! - [`TranscriptView`] — the conversation log with smooth scrolling
//! - [`DisclosurePanel`] — the auxiliary detail toggle
//! - [`MonospaceProbe`] — the caret measurement surrogate
//!
//! [`ChatDemo`] wires them all together with the core tracker, sequencer,
//! and session gate. The compiled-in conversation lives in
//! [`demo_script`].

mod app;
mod bubble;
pub mod demo_script;
mod log_view;
mod panel;
mod probe;
mod prompt;
mod sprite;

pub use app::{ChatDemo, ChatDemoBuilder};
pub use bubble::{ThoughtBubble, FLOAT_DISTANCE};
pub use log_view::{ActionControl, TranscriptView, ENTRY_LINE_HEIGHT, ENTRY_SPACING};
pub use panel::DisclosurePanel;
pub use probe::MonospaceProbe;
pub use prompt::{PromptInput, PromptMessage};
pub use sprite::{CharacterSprite, SLIDE_DISTANCE};
