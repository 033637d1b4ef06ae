//! Tests for replaying action scripts from disk.

use std::fs;
use tempfile::TempDir;
use tictactoe_timetravel::{
    Action, AppConfig, Variant, load_actions, new_session, replay,
};

fn write_script(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("actions.json");
    fs::write(&path, content).expect("Failed to write script");
    path
}

#[test]
fn test_load_actions_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_script(
        &dir,
        r#"[
            {"type": "MOVE", "id": 4},
            {"type": "SET_ORDER", "ascending": false},
            {"type": "SOMETHING_ELSE"}
        ]"#,
    );

    let actions = load_actions(&path).expect("Load failed");
    assert_eq!(
        actions,
        [Action::Move { id: 4 }, Action::SetOrder { ascending: false }, Action::Unknown]
    );
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_actions(dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read action script"));
}

#[test]
fn test_replay_both_variants() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_script(
        &dir,
        r#"[
            {"type": "MOVE", "id": 0},
            {"type": "MOVE", "id": 4},
            {"type": "MOVE", "id": 8},
            {"type": "JUMP_TO_MOVE", "move": 1},
            {"type": "MOVE", "id": 5},
            {"type": "CHANGE_ORDER"}
        ]"#,
    );
    let actions = load_actions(&path).expect("Load failed");

    for variant in [Variant::Local, Variant::Store] {
        let mut session = new_session(variant, &AppConfig::default());
        let view = replay(session.as_mut(), &actions);
        assert_eq!(view.step_number, 2, "{}", variant);
        assert!(!view.ascending);
        let steps: Vec<usize> = view.moves.iter().map(|m| m.step).collect();
        assert_eq!(steps, [2, 1, 0]);
        assert_eq!(view.moves[0].description, "Go to move #2 - (2, 1)");
        assert_eq!(view.status_text, "Next player: X");
    }
}

#[test]
fn test_view_serializes_to_json() {
    let mut session = new_session(Variant::Local, &AppConfig::default());
    let view = replay(session.as_mut(), &[Action::Move { id: 4 }]);
    let json = serde_json::to_value(&view).expect("Serialize failed");
    assert_eq!(json["status_text"], "Next player: O");
    assert_eq!(json["moves"][1]["description"], "Go to move #1 - (1, 1)");
    assert_eq!(json["moves"][1]["location"]["col"], 1);
}
