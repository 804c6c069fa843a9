//! The scripted thought-bubble sequencer.
//!
//! [`Sequencer`] runs the fixed, non-interruptible cinematic sequence:
//! type a stanza, hold, delete it, type the next, and after the final
//! stanza play the exit transitions and reveal the response. It is a
//! deadline-driven state machine: every suspension is a recorded wake
//! time in milliseconds, and [`Sequencer::poll`] fires every transition
//! whose deadline has passed. A caller drives it from its event loop;
//! tests drive it by fast-forwarding a simulated clock.
//!
//! Late polls catch up deterministically — each elapsed deadline is the
//! scheduling base for the next one, so the effect sequence is identical
//! whether the caller polls every millisecond or once at the end.

use crate::script::ThoughtScript;
use serde::{Deserialize, Serialize};

/// Current phase of the scripted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SequencerState {
    /// Not started
    Idle,
    /// Revealing stanza text one unit at a time
    Typing {
        /// Stanza index
        stanza: usize,
        /// Units revealed so far
        typed: usize,
    },
    /// Holding the fully typed stanza on screen
    Holding {
        /// Stanza index
        stanza: usize,
    },
    /// Removing stanza text one unit at a time
    Deleting {
        /// Stanza index
        stanza: usize,
        /// Units still on screen
        remaining: usize,
    },
    /// Settle delay after the final hold
    Settling,
    /// Exit transitions playing
    ExitAnimating,
    /// Terminal: response revealed
    Revealed,
}

impl SequencerState {
    /// Whether the sequence reached its terminal state.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Side effects emitted by sequence transitions.
///
/// The wiring layer applies these to the thought bubble, the character
/// region, and the conversation log. The two exit transitions are
/// fire-and-forget: they start concurrently and are not awaited
/// individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Show the thought surface
    ShowThought,
    /// Replace the thought surface text
    ThoughtText {
        /// Full accumulated text
        text: String,
    },
    /// Start the thought surface's upward float transition
    FloatThoughtUp,
    /// Start the character region's downward slide transition
    SlideCharacterDown,
    /// Hide the character region entirely
    HideCharacter,
    /// Reveal the final response in the conversation log
    Reveal,
}

/// Deadline-driven driver for the thought sequence.
///
/// Runs at most once: `Revealed` is terminal and the external submission
/// gate prevents a second start. The caller must not interleave two
/// sequencers over the same surfaces.
#[derive(Debug, Clone)]
pub struct Sequencer {
    script: ThoughtScript,
    state: SequencerState,
    buffer: String,
    next_deadline_ms: Option<u64>,
    typing_active: bool,
}

impl Sequencer {
    /// Create a sequencer for a script. Starts in `Idle`.
    #[must_use]
    pub const fn new(script: ThoughtScript) -> Self {
        Self {
            script,
            state: SequencerState::Idle,
            buffer: String::new(),
            next_deadline_ms: None,
            typing_active: false,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SequencerState {
        self.state
    }

    /// Current thought surface text.
    #[must_use]
    pub fn thought_text(&self) -> &str {
        &self.buffer
    }

    /// Next wake deadline, if the sequence is waiting on one.
    #[must_use]
    pub const fn next_deadline_ms(&self) -> Option<u64> {
        self.next_deadline_ms
    }

    /// Whether the sequence reached its terminal state.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_revealed()
    }

    /// The script being played.
    #[must_use]
    pub const fn script(&self) -> &ThoughtScript {
        &self.script
    }

    /// Begin the sequence.
    ///
    /// Only valid from `Idle`; any other state is a caller bug (re-entry
    /// is the gate's job) and is ignored with a warning.
    pub fn start(&mut self, now_ms: u64) -> Vec<Effect> {
        if self.state != SequencerState::Idle {
            tracing::warn!(state = ?self.state, "sequencer started twice; ignoring");
            return Vec::new();
        }

        tracing::debug!(stanzas = self.script.len(), "thought sequence starting");
        self.typing_active = true;
        self.buffer.clear();
        if self.script.is_empty() {
            self.state = SequencerState::Settling;
            self.next_deadline_ms = Some(now_ms + self.script.timing().settle_ms);
        } else {
            self.state = SequencerState::Typing {
                stanza: 0,
                typed: 0,
            };
            self.next_deadline_ms = Some(now_ms + self.script.timing().type_delay_ms);
        }
        vec![Effect::ShowThought]
    }

    /// Fire every transition whose deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Some(deadline) = self.next_deadline_ms {
            if deadline > now_ms {
                break;
            }
            self.step(deadline, &mut effects);
        }
        effects
    }

    /// Teardown signal: freeze the typewriter.
    ///
    /// Partial text remains on the thought surface and no further units
    /// are typed or deleted. The default script never calls this; it
    /// exists so a page being torn down can abandon the sequence.
    pub fn stop(&mut self) {
        self.typing_active = false;
    }

    /// Fire the transition scheduled at `at_ms`, using it as the base for
    /// the next deadline.
    fn step(&mut self, at_ms: u64, effects: &mut Vec<Effect>) {
        let timing = *self.script.timing();
        match self.state {
            SequencerState::Idle | SequencerState::Revealed => {
                self.next_deadline_ms = None;
            }
            SequencerState::Typing { stanza, typed } => {
                if !self.typing_active {
                    self.next_deadline_ms = None;
                    return;
                }
                let total = self.script.unit_count(stanza);
                let typed = if typed < total {
                    self.buffer = self.script.unit_prefix(stanza, typed + 1).to_string();
                    effects.push(Effect::ThoughtText {
                        text: self.buffer.clone(),
                    });
                    typed + 1
                } else {
                    typed
                };
                if typed >= total {
                    self.state = SequencerState::Holding { stanza };
                    self.next_deadline_ms = Some(at_ms + timing.hold_ms);
                } else {
                    self.state = SequencerState::Typing { stanza, typed };
                    self.next_deadline_ms = Some(at_ms + timing.type_delay_ms);
                }
            }
            SequencerState::Holding { stanza } => {
                if stanza + 1 < self.script.len() {
                    self.state = SequencerState::Deleting {
                        stanza,
                        remaining: self.script.unit_count(stanza),
                    };
                    self.next_deadline_ms = Some(at_ms + timing.delete_delay_ms);
                } else {
                    self.state = SequencerState::Settling;
                    self.next_deadline_ms = Some(at_ms + timing.settle_ms);
                }
            }
            SequencerState::Deleting { stanza, remaining } => {
                if !self.typing_active {
                    self.next_deadline_ms = None;
                    return;
                }
                if remaining > 0 {
                    let remaining = remaining - 1;
                    self.buffer = self.script.unit_prefix(stanza, remaining).to_string();
                    effects.push(Effect::ThoughtText {
                        text: self.buffer.clone(),
                    });
                    if remaining == 0 {
                        self.state = SequencerState::Typing {
                            stanza: stanza + 1,
                            typed: 0,
                        };
                        self.next_deadline_ms = Some(at_ms + timing.type_delay_ms);
                    } else {
                        self.state = SequencerState::Deleting { stanza, remaining };
                        self.next_deadline_ms = Some(at_ms + timing.delete_delay_ms);
                    }
                } else {
                    self.state = SequencerState::Typing {
                        stanza: stanza + 1,
                        typed: 0,
                    };
                    self.next_deadline_ms = Some(at_ms + timing.type_delay_ms);
                }
            }
            SequencerState::Settling => {
                self.state = SequencerState::ExitAnimating;
                effects.push(Effect::FloatThoughtUp);
                effects.push(Effect::SlideCharacterDown);
                self.next_deadline_ms = Some(at_ms + timing.exit_ms);
            }
            SequencerState::ExitAnimating => {
                tracing::debug!("thought sequence revealed");
                self.state = SequencerState::Revealed;
                effects.push(Effect::HideCharacter);
                effects.push(Effect::Reveal);
                self.next_deadline_ms = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Timing;

    fn fast_timing() -> Timing {
        Timing::default()
            .with_type_delay_ms(10)
            .with_delete_delay_ms(5)
            .with_hold_ms(30)
            .with_settle_ms(20)
            .with_exit_ms(40)
    }

    fn fast_script(stanzas: &[&str]) -> ThoughtScript {
        ThoughtScript::new(stanzas.iter().copied()).with_timing(fast_timing())
    }

    /// Drive the sequencer to completion in 1 ms ticks, recording every
    /// state it passes through and every effect it emits.
    fn run_fine(seq: &mut Sequencer) -> (Vec<SequencerState>, Vec<Effect>) {
        let mut states = vec![seq.state()];
        let mut effects = seq.start(0);
        let mut now = 0;
        while !seq.is_finished() && now < 1_000_000 {
            now += 1;
            effects.extend(seq.poll(now));
            if states.last() != Some(&seq.state()) {
                states.push(seq.state());
            }
        }
        (states, effects)
    }

    // =========================================================================
    // Start tests
    // =========================================================================

    #[test]
    fn test_start_shows_thought_and_schedules_typing() {
        let mut seq = Sequencer::new(fast_script(&["Hi"]));
        let effects = seq.start(100);
        assert_eq!(effects, [Effect::ShowThought]);
        assert_eq!(
            seq.state(),
            SequencerState::Typing {
                stanza: 0,
                typed: 0
            }
        );
        assert_eq!(seq.next_deadline_ms(), Some(110));
    }

    #[test]
    fn test_start_twice_is_ignored() {
        let mut seq = Sequencer::new(fast_script(&["Hi"]));
        seq.start(0);
        let state = seq.state();
        let effects = seq.start(5);
        assert!(effects.is_empty());
        assert_eq!(seq.state(), state);
    }

    #[test]
    fn test_poll_before_deadline_is_a_no_op() {
        let mut seq = Sequencer::new(fast_script(&["Hi"]));
        seq.start(0);
        assert!(seq.poll(9).is_empty());
        assert_eq!(
            seq.state(),
            SequencerState::Typing {
                stanza: 0,
                typed: 0
            }
        );
    }

    // =========================================================================
    // Typing tests
    // =========================================================================

    #[test]
    fn test_typing_cadence() {
        let mut seq = Sequencer::new(fast_script(&["abc"]));
        seq.start(0);

        let e = seq.poll(10);
        assert_eq!(
            e,
            [Effect::ThoughtText {
                text: "a".to_string()
            }]
        );
        let e = seq.poll(20);
        assert_eq!(
            e,
            [Effect::ThoughtText {
                text: "ab".to_string()
            }]
        );
        let e = seq.poll(30);
        assert_eq!(
            e,
            [Effect::ThoughtText {
                text: "abc".to_string()
            }]
        );
        assert_eq!(seq.state(), SequencerState::Holding { stanza: 0 });
        assert_eq!(seq.thought_text(), "abc");
    }

    #[test]
    fn test_holding_duration() {
        let mut seq = Sequencer::new(fast_script(&["a"]));
        seq.start(0);
        seq.poll(10); // "a" typed, hold begins
        assert_eq!(seq.state(), SequencerState::Holding { stanza: 0 });

        seq.poll(39); // Still holding (hold_ms = 30, ends at 40)
        assert_eq!(seq.state(), SequencerState::Holding { stanza: 0 });

        seq.poll(40);
        assert_eq!(seq.state(), SequencerState::Settling);
    }

    #[test]
    fn test_grapheme_typing_units() {
        let mut seq = Sequencer::new(fast_script(&["日👍x"]));
        seq.start(0);
        seq.poll(10);
        assert_eq!(seq.thought_text(), "日");
        seq.poll(20);
        assert_eq!(seq.thought_text(), "日👍");
        seq.poll(30);
        assert_eq!(seq.thought_text(), "日👍x");
    }

    // =========================================================================
    // Deleting tests
    // =========================================================================

    #[test]
    fn test_deleting_between_stanzas() {
        let mut seq = Sequencer::new(fast_script(&["ab", "c"]));
        seq.start(0);
        seq.poll(20); // "ab" typed by t=20
        assert_eq!(seq.state(), SequencerState::Holding { stanza: 0 });

        seq.poll(50); // Hold ends, deleting scheduled
        assert_eq!(
            seq.state(),
            SequencerState::Deleting {
                stanza: 0,
                remaining: 2
            }
        );

        let e = seq.poll(55);
        assert_eq!(
            e,
            [Effect::ThoughtText {
                text: "a".to_string()
            }]
        );
        let e = seq.poll(60);
        assert_eq!(
            e,
            [Effect::ThoughtText {
                text: String::new()
            }]
        );
        assert_eq!(
            seq.state(),
            SequencerState::Typing {
                stanza: 1,
                typed: 0
            }
        );
    }

    #[test]
    fn test_delete_phase_count() {
        // Three stanzas → exactly two delete phases, none after the last.
        let mut seq = Sequencer::new(fast_script(&["Thinking...", "Querying...", "Listening..."]));
        let (states, _) = run_fine(&mut seq);

        let delete_phases = states
            .iter()
            .filter(|s| matches!(s, SequencerState::Deleting { remaining, .. } if *remaining == 11))
            .count();
        assert_eq!(delete_phases, 2);

        // The final stanza holds, settles, and exits without deleting.
        let after_last_hold: Vec<_> = states
            .iter()
            .skip_while(|s| **s != SequencerState::Holding { stanza: 2 })
            .collect();
        assert!(!after_last_hold
            .iter()
            .any(|s| matches!(s, SequencerState::Deleting { .. })));
    }

    // =========================================================================
    // Exit and reveal tests
    // =========================================================================

    #[test]
    fn test_exit_transitions_fire_together() {
        let mut seq = Sequencer::new(fast_script(&["a"]));
        seq.start(0);
        seq.poll(40); // typed at 10, hold 10..40
        assert_eq!(seq.state(), SequencerState::Settling);

        let e = seq.poll(60); // settle_ms = 20
        assert_eq!(e, [Effect::FloatThoughtUp, Effect::SlideCharacterDown]);
        assert_eq!(seq.state(), SequencerState::ExitAnimating);

        let e = seq.poll(100); // exit_ms = 40
        assert_eq!(e, [Effect::HideCharacter, Effect::Reveal]);
        assert!(seq.is_finished());
        assert_eq!(seq.next_deadline_ms(), None);
    }

    #[test]
    fn test_terminal_state_stays_put() {
        let mut seq = Sequencer::new(fast_script(&["a"]));
        let (_, _) = run_fine(&mut seq);
        assert!(seq.is_finished());
        assert!(seq.poll(10_000_000).is_empty());
        assert_eq!(seq.state(), SequencerState::Revealed);
    }

    #[test]
    fn test_full_effect_sequence() {
        let mut seq = Sequencer::new(fast_script(&["ab", "c"]));
        let (_, effects) = run_fine(&mut seq);

        let texts = |s: &str| Effect::ThoughtText {
            text: s.to_string(),
        };
        assert_eq!(
            effects,
            [
                Effect::ShowThought,
                texts("a"),
                texts("ab"),
                texts("a"),
                texts(""),
                texts("c"),
                Effect::FloatThoughtUp,
                Effect::SlideCharacterDown,
                Effect::HideCharacter,
                Effect::Reveal,
            ]
        );
    }

    #[test]
    fn test_reveal_emitted_exactly_once() {
        let mut seq = Sequencer::new(fast_script(&["ab", "c"]));
        let (_, effects) = run_fine(&mut seq);
        let reveals = effects.iter().filter(|e| **e == Effect::Reveal).count();
        assert_eq!(reveals, 1);
    }

    // =========================================================================
    // Catch-up determinism
    // =========================================================================

    #[test]
    fn test_coarse_poll_catches_up_identically() {
        let mut fine = Sequencer::new(fast_script(&["ab", "c"]));
        let (_, fine_effects) = run_fine(&mut fine);

        let mut coarse = Sequencer::new(fast_script(&["ab", "c"]));
        let mut coarse_effects = coarse.start(0);
        coarse_effects.extend(coarse.poll(1_000_000));

        assert_eq!(fine_effects, coarse_effects);
        assert!(coarse.is_finished());
    }

    // =========================================================================
    // Stop (teardown) tests
    // =========================================================================

    #[test]
    fn test_stop_mid_type_keeps_partial_text() {
        let mut seq = Sequencer::new(fast_script(&["abcdef"]));
        seq.start(0);
        seq.poll(20); // "ab"
        assert_eq!(seq.thought_text(), "ab");

        seq.stop();
        assert!(seq.poll(1_000_000).is_empty());
        assert_eq!(seq.thought_text(), "ab");
        assert!(!seq.is_finished());
        assert_eq!(seq.next_deadline_ms(), None);
    }

    #[test]
    fn test_stop_mid_delete_freezes() {
        let mut seq = Sequencer::new(fast_script(&["ab", "c"]));
        seq.start(0);
        seq.poll(55); // Mid-delete: "a" remains
        assert_eq!(seq.thought_text(), "a");

        seq.stop();
        assert!(seq.poll(1_000_000).is_empty());
        assert_eq!(seq.thought_text(), "a");
    }

    // =========================================================================
    // Edge cases
    // =========================================================================

    #[test]
    fn test_empty_script_skips_to_exit() {
        let mut seq = Sequencer::new(ThoughtScript::new(Vec::<String>::new()).with_timing(fast_timing()));
        let effects = seq.start(0);
        assert_eq!(effects, [Effect::ShowThought]);
        assert_eq!(seq.state(), SequencerState::Settling);

        let rest = seq.poll(1_000_000);
        assert_eq!(
            rest,
            [
                Effect::FloatThoughtUp,
                Effect::SlideCharacterDown,
                Effect::HideCharacter,
                Effect::Reveal,
            ]
        );
        assert!(seq.is_finished());
    }

    #[test]
    fn test_empty_stanza_holds_without_text() {
        let mut seq = Sequencer::new(fast_script(&["", "b"]));
        seq.start(0);
        let e = seq.poll(10);
        assert!(e.is_empty()); // Nothing to type
        assert_eq!(seq.state(), SequencerState::Holding { stanza: 0 });
    }

    #[test]
    fn test_state_serialization_roundtrip() {
        let states = [
            SequencerState::Idle,
            SequencerState::Typing {
                stanza: 1,
                typed: 4,
            },
            SequencerState::Holding { stanza: 2 },
            SequencerState::Deleting {
                stanza: 0,
                remaining: 3,
            },
            SequencerState::Settling,
            SequencerState::ExitAnimating,
            SequencerState::Revealed,
        ];
        for state in states {
            let json = serde_json::to_string(&state).unwrap();
            let parsed: SequencerState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, parsed);
        }
    }
}
