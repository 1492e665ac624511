//! Integration tests for configuration and scenario files.

use std::io::Write;

use llm_tour::{DemoScenario, Error, TourConfig};

#[test]
fn test_load_config_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{"playback": {{"tick_interval_ms": 100}}, "tokenizer": {{"seed": 3, "stable_values": true}}, "initial_stage": 2}}"#
    )?;

    let config = TourConfig::load(file.path())?;
    assert_eq!(config.playback.tick_interval_ms, 100);
    assert_eq!(config.tokenizer.seed, Some(3));
    assert!(config.tokenizer.stable_values);
    assert_eq!(config.tokenizer.max_value, 50_000);
    assert_eq!(config.initial_stage, 2);
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = TourConfig::load("/nonexistent/llm-tour.json").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_config_is_json_error() {
    let err = TourConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_load_scenario_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{"name": "pa", "prompt": "Com es fa el pa?", "keywords": ["pa?"], "response": ["Amb", "farina."]}}"#
    )?;

    let scenario = DemoScenario::load(file.path())?;
    assert_eq!(scenario.name, "pa");
    assert_eq!(scenario.response.len(), 2);
    assert_eq!(scenario.decoded_text(), "Amb farina.");
    Ok(())
}

#[test]
fn test_scenario_validation_on_load() {
    let err = DemoScenario::from_json_str(
        r#"{"name": "buit", "prompt": "Hola", "keywords": [], "response": []}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidScenario(_)));
}

#[test]
fn test_scenario_round_trips_through_json() -> anyhow::Result<()> {
    let json = serde_json::to_string(&DemoScenario::reference())?;
    assert_eq!(DemoScenario::from_json_str(&json)?, DemoScenario::reference());
    Ok(())
}
