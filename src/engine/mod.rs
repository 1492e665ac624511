//! Walkthrough engine.
//!
//! This module contains:
//! - RepeatingTimer, the cancelable tick source
//! - GenerationPlayer for scripted token-by-token playback
//! - StageNavigator for bounded stage movement
//! - TourSession tying them to one interactive walkthrough

pub mod navigator;
pub mod player;
pub mod session;
pub mod timer;

pub use navigator::StageNavigator;
pub use player::{GenerationPlayer, PlaybackState};
pub use session::{SessionView, TourSession};
pub use timer::RepeatingTimer;
