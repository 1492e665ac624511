//! Integration tests for a walkthrough session.

use std::time::Duration;

use llm_tour::{DemoScenario, PlaybackState, StageCatalog, StageKind, TourConfig, TourSession};

const TICK: Duration = Duration::from_millis(400);

fn session() -> TourSession {
    let mut config = TourConfig::default();
    config.tokenizer.seed = Some(42);
    TourSession::reference(&config).unwrap()
}

fn inference_index(session: &TourSession) -> usize {
    session.catalog().position(StageKind::Inference).unwrap()
}

#[test]
fn test_end_to_end_reference_scenario() {
    let mut session = session();

    // Prompt -> tokens
    let texts: Vec<&str> = session.tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Com", "es", "cuina", "un", "ou?"]);
    assert!(session.tokens().iter().all(|t| t.value < 50_000));
    assert_eq!(session.salience(), vec![false, false, true, false, true]);

    // Walk to inference and play back
    while session.current_stage().kind != StageKind::Inference {
        assert!(session.next());
    }
    assert!(session.start_playback());

    let mut ticks = 0;
    while session.player().is_playing() {
        session.advance_time(TICK);
        ticks += 1;
    }

    let expected: Vec<String> = [
        "Per", "cuinar", "un", "ou,", "pots", "fer-lo", "fregit", "o", "bullit.",
    ]
    .map(String::from)
    .to_vec();
    assert_eq!(ticks, 9);
    assert_eq!(session.player().revealed(), expected.as_slice());

    let view = session.view();
    assert!(!view.is_playing);
    assert_eq!(view.playback, PlaybackState::Completed);
    assert!(view.can_start_playback);
}

#[test]
fn test_start_only_on_inference_stage() {
    let mut session = session();
    assert!(!session.start_playback());
    assert_eq!(session.player().state(), PlaybackState::Idle);
    assert!(!session.view().can_start_playback);

    let idx = inference_index(&session);
    session.select_stage(idx);
    assert!(session.view().can_start_playback);
    assert!(session.start_playback());
    assert!(!session.view().can_start_playback);
    assert!(!session.start_playback());
}

#[test]
fn test_stage_change_keeps_tokens_and_playback() {
    let mut session = session();
    let tokens_before = session.tokens().to_vec();

    let idx = inference_index(&session);
    session.select_stage(idx);
    session.start_playback();
    session.advance_time(TICK * 2);

    session.next();
    session.previous();
    session.select_stage(0);

    assert_eq!(session.tokens(), tokens_before.as_slice());
    assert_eq!(session.player().revealed().len(), 2);
    assert!(session.player().is_playing());

    // Playback keeps running while another stage is shown
    session.advance_time(TICK);
    assert_eq!(session.player().revealed().len(), 3);
}

#[test]
fn test_prompt_change_retokenizes() {
    let mut session = session();
    session.set_prompt("Hola");
    assert_eq!(session.prompt(), "Hola");
    assert_eq!(session.tokens().len(), 1);
    assert_eq!(session.salience(), vec![false]);

    session.set_prompt("   ");
    assert!(session.tokens().is_empty());
    assert!(session.view().salience.is_empty());
}

#[test]
fn test_invalid_selection_is_ignored() {
    let mut session = session();
    session.select_stage(2);
    assert!(!session.select_stage(5));
    assert!(!session.select_stage(usize::MAX));
    assert_eq!(session.navigator().current(), 2);
}

#[test]
fn test_view_navigation_flags_and_progress() {
    let mut session = session();
    let view = session.view();
    assert_eq!(view.progress, "Pas 1 de 5");
    assert!(!view.can_previous);
    assert!(view.can_next);
    assert_eq!(view.stage.title, "El Prompt");

    session.select_stage(4);
    let view = session.view();
    assert_eq!(view.progress, "Pas 5 de 5");
    assert!(view.can_previous);
    assert!(!view.can_next);
    assert_eq!(view.decoded_text, "Per cuinar un ou, pots fer-lo fregit o bullit.");
}

#[test]
fn test_initial_stage_from_config() {
    let config = TourConfig {
        initial_stage: 3,
        ..Default::default()
    };
    let session = TourSession::reference(&config).unwrap();
    assert_eq!(session.current_stage().kind, StageKind::Inference);
}

#[test]
fn test_custom_scenario_drives_keywords_and_script() {
    let scenario = DemoScenario {
        name: "truita".to_string(),
        prompt: "Com es fa una truita?".to_string(),
        keywords: vec!["truita?".to_string()],
        response: vec!["Bat".to_string(), "els".to_string(), "ous.".to_string()],
    };
    let mut session =
        TourSession::new(&TourConfig::default(), StageCatalog::reference(), scenario).unwrap();

    assert_eq!(session.salience(), vec![false, false, false, false, true]);

    session.select_stage(3);
    session.start_playback();
    session.advance_time(TICK * 3);
    assert!(session.player().is_complete());
    assert_eq!(session.view().decoded_text, "Bat els ous.");
}
