//! Demo wiring.
//!
//! [`ChatDemo`] assembles the whole feature set: the prompt feeds the
//! direction tracker continuously, a single submission claims the session
//! gate and starts the scripted sequence, and sequence effects drive the
//! bubble, the character region, and the conversation log. Construction
//! goes through [`ChatDemoBuilder`]; a missing required surface aborts
//! initialization entirely — the page stays static rather than running a
//! partially wired demo.

use crate::bubble::ThoughtBubble;
use crate::demo_script::{
    demo_script, ASSISTANT_AVATAR, DEMO_RESPONSE, DEMO_USER_LINE, DETAIL_ACTION_LABEL,
};
use crate::log_view::TranscriptView;
use crate::panel::DisclosurePanel;
use crate::probe::MonospaceProbe;
use crate::prompt::{PromptInput, PromptMessage};
use crate::sprite::CharacterSprite;
use penpal_core::surface::{TextSurface, TranscriptSink, Visibility};
use penpal_core::{
    Direction, DirectionTracker, Effect, Event, Participant, Sequencer, SequencerState,
    SessionGate, SetupError, ThoughtScript,
};

/// Builder for [`ChatDemo`]. Every surface is required.
#[derive(Debug, Default)]
pub struct ChatDemoBuilder {
    prompt: Option<PromptInput>,
    sprite: Option<CharacterSprite>,
    bubble: Option<ThoughtBubble>,
    log: Option<TranscriptView>,
    detail: Option<DisclosurePanel>,
    script: Option<ThoughtScript>,
}

impl ChatDemoBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the prompt surface.
    #[must_use]
    pub fn prompt(mut self, prompt: PromptInput) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Provide the character sprite surface.
    #[must_use]
    pub fn sprite(mut self, sprite: CharacterSprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    /// Provide the thought bubble surface.
    #[must_use]
    pub fn bubble(mut self, bubble: ThoughtBubble) -> Self {
        self.bubble = Some(bubble);
        self
    }

    /// Provide the conversation log view.
    #[must_use]
    pub fn log(mut self, log: TranscriptView) -> Self {
        self.log = Some(log);
        self
    }

    /// Provide the auxiliary detail panel.
    #[must_use]
    pub fn detail(mut self, detail: DisclosurePanel) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Override the thought script (defaults to the compiled-in demo).
    #[must_use]
    pub fn script(mut self, script: ThoughtScript) -> Self {
        self.script = Some(script);
        self
    }

    /// Wire the demo together.
    ///
    /// Fails with [`SetupError::MissingSurface`] on the first absent
    /// surface; nothing is partially initialized.
    pub fn build(self) -> Result<ChatDemo, SetupError> {
        let prompt = require(self.prompt, "prompt")?;
        let sprite = require(self.sprite, "sprite")?;
        let bubble = require(self.bubble, "bubble")?;
        let log = require(self.log, "transcript")?;
        let detail = require(self.detail, "detail")?;

        let script = self.script.unwrap_or_else(demo_script);
        let log = log.with_scroll_secs(script.timing().scroll_ms as f64 / 1000.0);
        let tracker = DirectionTracker::new(MonospaceProbe::new(TextSurface::style(&prompt)));

        Ok(ChatDemo {
            prompt,
            sprite,
            bubble,
            log,
            detail,
            tracker,
            sequencer: Sequencer::new(script),
            gate: SessionGate::new(),
            last_tick_ms: None,
        })
    }
}

fn require<T>(surface: Option<T>, name: &'static str) -> Result<T, SetupError> {
    surface.ok_or_else(|| {
        tracing::error!(surface = name, "required surface missing; demo disabled");
        SetupError::MissingSurface(name)
    })
}

/// The assembled chat demo.
#[derive(Debug)]
pub struct ChatDemo {
    prompt: PromptInput,
    sprite: CharacterSprite,
    bubble: ThoughtBubble,
    log: TranscriptView,
    detail: DisclosurePanel,
    tracker: DirectionTracker<MonospaceProbe>,
    sequencer: Sequencer,
    gate: SessionGate,
    last_tick_ms: Option<u64>,
}

impl ChatDemo {
    /// Start building a demo.
    #[must_use]
    pub fn builder() -> ChatDemoBuilder {
        ChatDemoBuilder::new()
    }

    /// Route an input event.
    ///
    /// Caret-moving events feed the direction tracker until the prompt is
    /// disabled; an Enter submission with non-empty text triggers the
    /// sequence.
    pub fn handle_event(&mut self, now_ms: u64, event: &Event) {
        if let Event::Resize { .. } = event {
            self.tracker.sync_probe(&TextSurface::style(&self.prompt));
            return;
        }

        let message = self.prompt.event(event);
        if let Some(PromptMessage::Submitted { value }) = message {
            if !value.is_empty() {
                self.submit(now_ms);
            }
        }

        if event.moves_caret() && !self.prompt.is_disabled() {
            self.tracker
                .sample_and_update(now_ms, &self.prompt, &mut self.sprite);
        }
    }

    /// Trigger the conversation.
    ///
    /// The first call claims the session gate, logs the fixed demo user
    /// line (typed input is discarded), disables the prompt, and starts
    /// the sequencer. Later calls are rejected without side effects.
    pub fn submit(&mut self, now_ms: u64) {
        if !self.gate.try_claim() {
            tracing::debug!("submission rejected; session already claimed");
            return;
        }

        tracing::info!("submission claimed; running scripted sequence");
        self.log.append(Participant::User, DEMO_USER_LINE, None);
        self.prompt.disable();
        let effects = self.sequencer.start(now_ms);
        self.apply_effects(effects);
    }

    /// Advance timers: sequencer deadlines and running transitions.
    pub fn tick(&mut self, now_ms: u64) {
        let dt_secs = self
            .last_tick_ms
            .map_or(0.0, |last| now_ms.saturating_sub(last) as f64 / 1000.0);
        self.last_tick_ms = Some(now_ms);

        let effects = self.sequencer.poll(now_ms);
        self.apply_effects(effects);

        self.sprite.tick(dt_secs);
        self.bubble.tick(dt_secs);
        self.log.tick(dt_secs);
    }

    /// Activate a reveal action control, opening the detail panel.
    pub fn activate_action(&mut self, index: usize) -> bool {
        self.log.activate_action(index, &mut self.detail)
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        let exit_secs = self.sequencer.script().timing().exit_ms as f64 / 1000.0;
        for effect in effects {
            match effect {
                Effect::ShowThought => self.bubble.show(),
                Effect::ThoughtText { text } => self.bubble.set_text(text),
                Effect::FloatThoughtUp => self.bubble.begin_float_up(exit_secs),
                Effect::SlideCharacterDown => self.sprite.begin_slide_down(exit_secs),
                Effect::HideCharacter => self.sprite.hide(),
                Effect::Reveal => self.reveal(),
            }
        }
    }

    fn reveal(&mut self) {
        tracing::debug!("revealing scripted response");
        let id = self
            .log
            .append(Participant::Assistant, DEMO_RESPONSE, Some(ASSISTANT_AVATAR));
        self.log.scroll_to(id);
        self.log.push_action(DETAIL_ACTION_LABEL);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The prompt surface.
    #[must_use]
    pub const fn prompt(&self) -> &PromptInput {
        &self.prompt
    }

    /// The character sprite surface.
    #[must_use]
    pub const fn sprite(&self) -> &CharacterSprite {
        &self.sprite
    }

    /// The thought bubble surface.
    #[must_use]
    pub const fn bubble(&self) -> &ThoughtBubble {
        &self.bubble
    }

    /// The conversation log view.
    #[must_use]
    pub const fn log(&self) -> &TranscriptView {
        &self.log
    }

    /// The auxiliary detail panel.
    #[must_use]
    pub const fn detail(&self) -> &DisclosurePanel {
        &self.detail
    }

    /// Current character direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.tracker.direction()
    }

    /// Current sequencer state.
    #[must_use]
    pub const fn sequencer_state(&self) -> SequencerState {
        self.sequencer.state()
    }

    /// Next sequencer deadline, for schedulers that sleep between polls.
    #[must_use]
    pub const fn next_deadline_ms(&self) -> Option<u64> {
        self.sequencer.next_deadline_ms()
    }

    /// Whether the session gate has been claimed.
    #[must_use]
    pub const fn is_claimed(&self) -> bool {
        self.gate.is_claimed()
    }

    /// Whether the scripted sequence finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.sequencer.is_finished()
    }
}
