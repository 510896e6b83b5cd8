// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Init command: write a starter Claude Code hook configuration.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

const DEFAULT_COMMANDS: &[&str] = &["npx tsc --noEmit"];
const DEFAULT_MESSAGE: &str = "Hook execution completed with errors";

const SETTINGS_DIR: &str = ".claude";
const SETTINGS_FILE: &str = "settings.local.json";

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("settings.local.json already exists at {path}")]
    AlreadyExists { path: PathBuf },
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write settings file: {source}")]
    Write {
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Settings document
// ---------------------------------------------------------------------------

/// Claude Code settings, reduced to the hook section this scaffold writes.
#[derive(Debug, Serialize, Deserialize)]
struct Settings {
    hooks: Hooks,
}

#[derive(Debug, Serialize, Deserialize)]
struct Hooks {
    #[serde(rename = "PostToolUse")]
    post_tool_use: Vec<HookRule>,
}

#[derive(Debug, Serialize, Deserialize)]
struct HookRule {
    matcher: String,
    hooks: Vec<HookCommand>,
}

#[derive(Debug, Serialize, Deserialize)]
struct HookCommand {
    #[serde(rename = "type")]
    kind: String,
    command: String,
}

// ---------------------------------------------------------------------------
// Scaffolding
// ---------------------------------------------------------------------------

/// Write the starter settings under `root` and report where they landed.
pub fn handle(root: &Path, commands: &[String], message: Option<&str>) -> Result<()> {
    let path = write_settings(root, commands, message)?;
    println!(
        "Successfully created {} at {}",
        SETTINGS_FILE,
        display_path(&path, dirs::home_dir())
    );
    Ok(())
}

/// Create `.claude/settings.local.json` under `root` with a PostToolUse hook
/// invoking blocc. Fails when the file already exists; the directory itself
/// may.
fn write_settings(
    root: &Path,
    commands: &[String],
    message: Option<&str>,
) -> Result<PathBuf, InitError> {
    let dir = root.join(SETTINGS_DIR);
    let path = dir.join(SETTINGS_FILE);

    if path.exists() {
        return Err(InitError::AlreadyExists { path });
    }

    std::fs::create_dir_all(&dir)
        .map_err(|source| InitError::CreateDir { path: dir.clone(), source })?;

    let settings = Settings {
        hooks: Hooks {
            post_tool_use: vec![HookRule {
                matcher: "Write|Edit|MultiEdit".to_string(),
                hooks: vec![HookCommand {
                    kind: "command".to_string(),
                    command: hook_command(commands, message),
                }],
            }],
        },
    };

    let json = serde_json::to_string_pretty(&settings)
        .map_err(|err| InitError::Write { source: io::Error::other(err) })?;
    std::fs::write(&path, json).map_err(|source| InitError::Write { source })?;

    Ok(path)
}

/// Hook command line: `blocc --message "<message>" "<cmd>" ...`.
fn hook_command(commands: &[String], message: Option<&str>) -> String {
    let message = message.filter(|m| !m.is_empty()).unwrap_or(DEFAULT_MESSAGE);

    let mut parts = vec![format!("blocc --message \"{message}\"")];
    if commands.is_empty() {
        parts.extend(DEFAULT_COMMANDS.iter().map(|c| format!("\"{c}\"")));
    } else {
        parts.extend(commands.iter().map(|c| format!("\"{c}\"")));
    }
    parts.join(" ")
}

/// Replace a home-directory prefix with `~` for display.
fn display_path(path: &Path, home: Option<PathBuf>) -> String {
    if let Some(home) = home {
        if let Ok(rest) = path.strip_prefix(&home) {
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
