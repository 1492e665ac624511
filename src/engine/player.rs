//! Scripted generation playback.
//!
//! The player reveals a fixed response one fragment per tick, the way an
//! autoregressive model emits one token per decode step. Nothing is
//! predicted: the script is the output.
//!
//! ## States
//!
//! ```text
//!            start()                 last fragment
//!   Idle ─────────────▶ Playing ───────────────────▶ Completed
//!                        │  ▲                           │
//!                        └──┘ tick: append next         │
//!                                                       │
//!   Completed ──────────── start() (clears revealed) ───┘──▶ Playing
//! ```
//!
//! `start()` while already playing is a no-op.

use std::time::Duration;

use super::timer::RepeatingTimer;

/// Playback phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    /// Not started; nothing revealed.
    #[default]
    Idle,
    /// Revealing one fragment per tick.
    Playing,
    /// Every fragment revealed.
    Completed,
}

impl PlaybackState {
    /// Check if playback can be (re)started from this state.
    pub fn can_start(&self) -> bool {
        !matches!(self, Self::Playing)
    }

    /// Get the state name as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Playing => "Playing",
            Self::Completed => "Completed",
        }
    }
}

/// Timed playback over a scripted response.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use llm_tour::engine::{GenerationPlayer, PlaybackState};
///
/// let script = vec!["Per".to_string(), "cuinar".to_string()];
/// let mut player = GenerationPlayer::new(script, Duration::from_millis(400));
/// assert!(player.start());
/// player.advance(Duration::from_millis(800));
/// assert_eq!(player.state(), PlaybackState::Completed);
/// assert_eq!(player.revealed(), player.script());
/// ```
#[derive(Debug, Clone)]
pub struct GenerationPlayer {
    script: Vec<String>,
    revealed: Vec<String>,
    state: PlaybackState,
    interval: Duration,
    /// Present from the first `start()`; canceled on completion.
    timer: Option<RepeatingTimer>,
}

impl GenerationPlayer {
    /// Create an idle player over `script`.
    pub fn new(script: Vec<String>, interval: Duration) -> Self {
        Self {
            script,
            revealed: Vec::new(),
            state: PlaybackState::Idle,
            interval,
            timer: None,
        }
    }

    /// Start playback from an empty reveal.
    ///
    /// Returns `false` without touching anything if already playing.
    pub fn start(&mut self) -> bool {
        if !self.state.can_start() {
            tracing::debug!(revealed = self.revealed.len(), "start ignored: already playing");
            return false;
        }

        self.revealed.clear();
        self.state = PlaybackState::Playing;
        self.timer = Some(RepeatingTimer::new(self.interval));
        tracing::info!(fragments = self.script.len(), "playback started");

        if self.script.is_empty() {
            self.complete();
        }
        true
    }

    /// Reveal the next fragment immediately.
    ///
    /// Returns `false` if nothing was revealed because playback is not running.
    pub fn tick(&mut self) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }

        let Some(next) = self.script.get(self.revealed.len()) else {
            self.complete();
            return false;
        };
        self.revealed.push(next.clone());
        tracing::trace!(index = self.revealed.len() - 1, fragment = %next, "revealed");

        if self.revealed.len() == self.script.len() {
            self.complete();
        }
        true
    }

    /// Feed elapsed time; reveals one fragment per elapsed interval.
    ///
    /// Returns the number of fragments revealed by this call.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.advance(delta),
            None => return 0,
        };

        let mut revealed = 0;
        for _ in 0..due {
            if !self.tick() {
                break;
            }
            revealed += 1;
        }
        revealed
    }

    /// Return to `Idle`, dropping any revealed fragments.
    pub fn reset(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.cancel();
        }
        self.timer = None;
        self.revealed.clear();
        self.state = PlaybackState::Idle;
    }

    fn complete(&mut self) {
        self.state = PlaybackState::Completed;
        if let Some(timer) = self.timer.as_mut() {
            timer.cancel();
        }
        tracing::info!(fragments = self.revealed.len(), "playback completed");
    }

    /// Current phase.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if fragments are still being revealed.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Check if the whole script has been revealed.
    pub fn is_complete(&self) -> bool {
        self.state == PlaybackState::Completed
    }

    /// Fragments revealed so far, a prefix of the script.
    pub fn revealed(&self) -> &[String] {
        &self.revealed
    }

    /// The full scripted response.
    pub fn script(&self) -> &[String] {
        &self.script
    }

    /// Time until the next reveal while playing.
    pub fn until_next(&self) -> Option<Duration> {
        if !self.is_playing() {
            return None;
        }
        self.timer.as_ref().and_then(RepeatingTimer::until_next)
    }

    /// Check whether the tick timer has been canceled.
    pub fn timer_cancelled(&self) -> bool {
        self.timer.as_ref().is_some_and(RepeatingTimer::is_cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(400);

    fn script(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_idle_until_started() {
        let mut player = GenerationPlayer::new(script(&["a", "b"]), TICK);
        assert_eq!(player.state(), PlaybackState::Idle);
        assert!(!player.tick());
        assert_eq!(player.advance(TICK * 10), 0);
        assert!(player.revealed().is_empty());
    }

    #[test]
    fn test_manual_ticks_complete() {
        let mut player = GenerationPlayer::new(script(&["a", "b"]), TICK);
        assert!(player.start());
        assert!(player.tick());
        assert_eq!(player.revealed(), &["a".to_string()]);
        assert!(player.is_playing());
        assert!(player.tick());
        assert!(player.is_complete());
        assert!(player.timer_cancelled());
        assert!(!player.tick());
        assert_eq!(player.revealed().len(), 2);
    }

    #[test]
    fn test_empty_script_completes_on_start() {
        let mut player = GenerationPlayer::new(Vec::new(), TICK);
        assert!(player.start());
        assert!(player.is_complete());
        assert!(player.revealed().is_empty());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut player = GenerationPlayer::new(script(&["a", "b"]), TICK);
        player.start();
        player.advance(TICK);
        player.reset();
        assert_eq!(player.state(), PlaybackState::Idle);
        assert!(player.revealed().is_empty());
        assert_eq!(player.until_next(), None);
    }

    #[test]
    fn test_until_next_tracks_partial_interval() {
        let mut player = GenerationPlayer::new(script(&["a", "b"]), TICK);
        player.start();
        player.advance(Duration::from_millis(100));
        assert_eq!(player.until_next(), Some(Duration::from_millis(300)));
    }
}
