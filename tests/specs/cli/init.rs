//! Settings scaffolding specs (`blocc --init`).

use crate::prelude::*;

#[test]
fn init_writes_starter_settings() {
    let temp = Project::empty();
    temp.blocc()
        .args(&["--init"])
        .passes()
        .stdout_has("Successfully created settings.local.json");

    let content =
        std::fs::read_to_string(temp.path().join(".claude/settings.local.json")).unwrap();
    let settings: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rule = &settings["hooks"]["PostToolUse"][0];
    assert_eq!(rule["matcher"], "Write|Edit|MultiEdit");
    assert_eq!(rule["hooks"][0]["type"], "command");
    assert_eq!(
        rule["hooks"][0]["command"],
        r#"blocc --message "Hook execution completed with errors" "npx tsc --noEmit""#
    );
}

#[test]
fn init_accepts_custom_commands_and_message() {
    let temp = Project::empty();
    temp.blocc()
        .args(&["--init", "--message", "checks failed", "cargo check", "cargo clippy"])
        .passes();

    let content =
        std::fs::read_to_string(temp.path().join(".claude/settings.local.json")).unwrap();
    let settings: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        settings["hooks"]["PostToolUse"][0]["hooks"][0]["command"],
        r#"blocc --message "checks failed" "cargo check" "cargo clippy""#
    );
}

#[test]
fn init_refuses_to_overwrite_existing_settings() {
    let temp = Project::empty();
    temp.file(".claude/settings.local.json", "{}\n");
    temp.blocc().args(&["--init"]).fails(1).stderr_has("already exists");
}

#[test]
fn init_twice_fails_the_second_time() {
    let temp = Project::empty();
    temp.blocc().args(&["--init"]).passes();
    temp.blocc().args(&["--init"]).fails(1).stderr_has("already exists");
}
