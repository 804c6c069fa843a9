//! Compiled-in demo conversation content.
//!
//! The demo has no backend: the user's typed input is discarded and the
//! same fixed exchange plays every time. Only the thought stanzas, the
//! logged user line, and the revealed response live here.

use penpal_core::ThoughtScript;

/// Thought stanzas typed into the bubble, in order.
pub const DEMO_STANZAS: [&str; 3] = [
    "Thinking...",
    "Querying the experiment archive...",
    "Putting the numbers together...",
];

/// The fixed user line logged on submission, whatever was typed.
pub const DEMO_USER_LINE: &str = "How did last week's retention experiment perform?";

/// The fixed response revealed after the sequence.
pub const DEMO_RESPONSE: &str = "Retention improved across every cohort I looked at. \
Day-7 retention rose from 18.4% to 23.1% for the test group, with the largest lift \
among new sign-ups. The distribution chart below breaks the cohorts down; the effect \
holds after controlling for acquisition channel.";

/// Avatar shown beside the revealed response.
pub const ASSISTANT_AVATAR: &str = "assets/character/idle.png";

/// Label of the action control appended after the reveal.
pub const DETAIL_ACTION_LABEL: &str = "View experiment details";

/// The demo script with its default timing.
#[must_use]
pub fn demo_script() -> ThoughtScript {
    ThoughtScript::new(DEMO_STANZAS)
}
