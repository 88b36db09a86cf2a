use std::fs;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn storyboard() -> Command {
    let mut cmd = Command::cargo_bin("storyboard").expect("binary should build");
    cmd.env_remove("STORYBOARD_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_json_storyboard() -> Result<()> {
    let output = storyboard()
        .args([
            "--text",
            "The hero wakes up. Suddenly, a storm arrives. The hero finds shelter.",
            "--story-id",
            "storm",
        ])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let scenes = json["storm"].as_array().expect("scenes array");
    assert_eq!(scenes.len(), 3);
    let total: u64 = scenes
        .iter()
        .map(|scene| scene["durationInSeconds"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 60);
    Ok(())
}

#[test]
fn reads_story_file_and_prints_text() -> Result<()> {
    let temp = tempdir()?;
    let story = temp.path().join("story.txt");
    fs::write(&story, "A.")?;

    storyboard()
        .arg("--file")
        .arg(&story)
        .args(["--minutes", "0.1", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("story - 1 scenes, 6s"))
        .stdout(predicate::str::contains("[   6s] A"));
    Ok(())
}

#[test]
fn applies_config_file() -> Result<()> {
    let temp = tempdir()?;
    let config = temp.path().join("planner.json");
    fs::write(&config, r#"{"allocator": {"min_scene_seconds": 25}}"#)?;

    let output = storyboard()
        .arg("--config")
        .arg(&config)
        .args(["--text", "One. Then two. Later three.", "--minutes", "1"])
        .output()?;
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let durations: Vec<u64> = json["story"]
        .as_array()
        .expect("scenes array")
        .iter()
        .map(|scene| scene["durationInSeconds"].as_u64().unwrap())
        .collect();
    assert_eq!(durations.len(), 3);
    assert!(durations.iter().all(|&seconds| seconds >= 25));
    Ok(())
}

#[test]
fn rejects_invalid_config() -> Result<()> {
    let temp = tempdir()?;
    let config = temp.path().join("planner.json");
    fs::write(&config, r#"{"segmenter": {"scene_char_limit": 0}}"#)?;

    storyboard()
        .arg("--config")
        .arg(&config)
        .args(["--text", "Hello."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scene_char_limit"));
    Ok(())
}

#[test]
fn requires_story_source() {
    storyboard()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--text or --file"));
}

#[test]
fn clamps_negative_minutes() -> Result<()> {
    let output = storyboard()
        .args(["--text", "Only one scene.", "--minutes", "-2"])
        .output()?;
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["story"][0]["durationInSeconds"], 30);
    Ok(())
}
