//! Educational front end for the walkthrough.
//!
//! This module turns session state into something a learner can read:
//!
//! 1. **Explanations**: side notes per stage and the deep-dive panels
//! 2. **Visualizers**: ASCII renderings of tokens, attention, and playback
//! 3. **Tutorial**: an interactive, line-driven terminal walkthrough
//!
//! ## Usage
//!
//! ```rust,no_run
//! use llm_tour::TourConfig;
//! use llm_tour::educational::InteractiveTutorial;
//! use llm_tour::engine::TourSession;
//!
//! let session = TourSession::reference(&TourConfig::default()).unwrap();
//! let mut tutorial = InteractiveTutorial::new(session);
//! tutorial.run(std::io::stdin().lock(), &mut std::io::stdout()).unwrap();
//! ```

pub mod explanations;
pub mod tutorial;
pub mod visualizers;

// Re-export main types
pub use explanations::{
    InsightEntry, InsightPanel, StageNote, get_all_topics, get_panel, stage_note,
};
pub use tutorial::{Command, InteractiveTutorial};
pub use visualizers::{
    box_text, decoded_box, generation_line, insight_panel, render_stage, salience_row,
    stepper_bar, token_table,
};
