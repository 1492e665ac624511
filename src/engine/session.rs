//! One interactive walkthrough session.
//!
//! The session owns every piece of mutable state: the stage cursor, the
//! prompt and its tokens, and generation playback. Events are applied one
//! at a time; after each, [`TourSession::view`] derives what the front end
//! should show. Stage changes never touch tokens or playback.

use std::time::Duration;

use crate::attention::{KeywordSet, classify};
use crate::config::TourConfig;
use crate::core::scenario::DemoScenario;
use crate::core::stage::{StageCatalog, StageDescriptor, StageKind};
use crate::core::token::{PseudoTokenizer, Token};
use crate::error::{Error, Result};

use super::navigator::StageNavigator;
use super::player::{GenerationPlayer, PlaybackState};

/// Read-only snapshot of everything the front end renders.
#[derive(Debug, Clone)]
pub struct SessionView<'a> {
    /// Stage being shown.
    pub stage: &'a StageDescriptor,
    /// Index of that stage.
    pub stage_index: usize,
    /// Total number of stages.
    pub stage_count: usize,
    /// Step counter label, e.g. "Pas 2 de 5".
    pub progress: String,
    /// Raw prompt.
    pub prompt: &'a str,
    /// Tokens of the prompt.
    pub tokens: &'a [Token],
    /// Salience flag per token.
    pub salience: Vec<bool>,
    /// Fragments revealed so far.
    pub revealed: &'a [String],
    /// Playback phase.
    pub playback: PlaybackState,
    /// Whether fragments are still being revealed.
    pub is_playing: bool,
    /// Whether "next" is enabled.
    pub can_next: bool,
    /// Whether "previous" is enabled.
    pub can_previous: bool,
    /// Whether the start control is offered.
    pub can_start_playback: bool,
    /// Full scripted response as text.
    pub decoded_text: String,
}

/// State of a single walkthrough.
#[derive(Debug, Clone)]
pub struct TourSession {
    catalog: StageCatalog,
    scenario: DemoScenario,
    keywords: KeywordSet,
    navigator: StageNavigator,
    tokenizer: PseudoTokenizer,
    prompt: String,
    tokens: Vec<Token>,
    player: GenerationPlayer,
}

impl TourSession {
    /// Create a session over `catalog`, opening on the scenario's prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or scenario is invalid, the
    /// catalog is empty, or `initial_stage` is out of range.
    pub fn new(config: &TourConfig, catalog: StageCatalog, scenario: DemoScenario) -> Result<Self> {
        config.validate()?;
        scenario.validate()?;
        if catalog.is_empty() {
            return Err(Error::Config("stage catalog is empty".into()));
        }

        let navigator = StageNavigator::with_start(catalog.len(), config.initial_stage)?;
        let mut tokenizer = PseudoTokenizer::new(&config.tokenizer);
        let prompt = scenario.prompt.clone();
        let tokens = tokenizer.tokenize(&prompt);
        let player =
            GenerationPlayer::new(scenario.response.clone(), config.playback.tick_interval());

        tracing::debug!(
            scenario = %scenario.name,
            stages = catalog.len(),
            tokens = tokens.len(),
            "session created"
        );

        Ok(Self {
            keywords: KeywordSet::new(&scenario.keywords),
            catalog,
            scenario,
            navigator,
            tokenizer,
            prompt,
            tokens,
            player,
        })
    }

    /// Session over the bundled catalog and scenario.
    pub fn reference(config: &TourConfig) -> Result<Self> {
        Self::new(config, StageCatalog::reference(), DemoScenario::reference())
    }

    // ========== Events ==========

    /// Replace the prompt and recompute its tokens from scratch.
    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
        self.tokens = self.tokenizer.tokenize(&self.prompt);
        tracing::debug!(tokens = self.tokens.len(), "prompt changed");
    }

    /// Go to the next stage. Returns whether the stage changed.
    pub fn next(&mut self) -> bool {
        let from = self.navigator.current();
        let moved = self.navigator.advance();
        if moved {
            tracing::debug!(from, to = self.navigator.current(), "stage changed");
        }
        moved
    }

    /// Go to the previous stage. Returns whether the stage changed.
    pub fn previous(&mut self) -> bool {
        let from = self.navigator.current();
        let moved = self.navigator.retreat();
        if moved {
            tracing::debug!(from, to = self.navigator.current(), "stage changed");
        }
        moved
    }

    /// Jump to a stage. Out-of-range targets are ignored.
    pub fn select_stage(&mut self, index: usize) -> bool {
        let from = self.navigator.current();
        match self.navigator.jump_to(index) {
            Ok(()) => {
                tracing::debug!(from, to = index, "stage selected");
                from != index
            }
            Err(e) => {
                tracing::debug!(error = %e, "stage selection ignored");
                false
            }
        }
    }

    /// Start generation playback.
    ///
    /// Only honored on the inference stage while playback is idle or
    /// completed; otherwise returns `false`.
    pub fn start_playback(&mut self) -> bool {
        if self.current_stage().kind != StageKind::Inference {
            tracing::debug!(
                stage = self.current_stage().kind.as_str(),
                "start ignored outside inference stage"
            );
            return false;
        }
        self.player.start()
    }

    /// Clear playback back to idle.
    pub fn reset_playback(&mut self) {
        self.player.reset();
    }

    /// Feed elapsed time to playback. Returns fragments revealed.
    pub fn advance_time(&mut self, delta: Duration) -> usize {
        self.player.advance(delta)
    }

    // ========== Queries ==========

    /// Stage being shown.
    pub fn current_stage(&self) -> &StageDescriptor {
        self.catalog.stage(self.navigator.current())
    }

    /// Raw prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Current tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Salience flag per current token.
    pub fn salience(&self) -> Vec<bool> {
        classify(&self.tokens, &self.keywords)
    }

    /// The stage cursor.
    pub fn navigator(&self) -> &StageNavigator {
        &self.navigator
    }

    /// Generation playback.
    pub fn player(&self) -> &GenerationPlayer {
        &self.player
    }

    /// Stage catalog.
    pub fn catalog(&self) -> &StageCatalog {
        &self.catalog
    }

    /// Check if the start control should be offered.
    pub fn can_start_playback(&self) -> bool {
        self.current_stage().kind == StageKind::Inference && self.player.state().can_start()
    }

    /// Derive the render snapshot.
    pub fn view(&self) -> SessionView<'_> {
        let stage_index = self.navigator.current();
        let stage_count = self.navigator.count();
        SessionView {
            stage: self.current_stage(),
            stage_index,
            stage_count,
            progress: format!("Pas {} de {}", stage_index + 1, stage_count),
            prompt: &self.prompt,
            tokens: &self.tokens,
            salience: self.salience(),
            revealed: self.player.revealed(),
            playback: self.player.state(),
            is_playing: self.player.is_playing(),
            can_next: self.navigator.can_advance(),
            can_previous: self.navigator.can_retreat(),
            can_start_playback: self.can_start_playback(),
            decoded_text: self.scenario.decoded_text(),
        }
    }
}
