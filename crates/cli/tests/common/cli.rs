//! CLI command execution helpers with automatic timing
//!
//! Wraps the `autosave` binary built for this test run, isolated from the
//! user's configuration through `AUTOSAVE_CONFIG`.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Scratch directory holding a project store and a config file
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("Failed to create temp dir")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config/config.toml")
    }

    /// Command running in the scratch directory with isolated config
    pub fn command(&self, args: &[&str]) -> AutosaveCommand {
        let mut cmd = AutosaveCommand::new(self.root());
        cmd.env("AUTOSAVE_CONFIG", &self.config_path().display().to_string());
        cmd.args(args);
        cmd
    }

    /// Create a project and return its id
    pub fn create_project(&self, title: &str) -> Result<u64> {
        let result = self.command(&["create", "--title", title]).assert_success()?;
        result.parse_created_id().context("No project id in create output")
    }

    /// Read a project through `show --json`
    pub fn show_json(&self, id: u64) -> Result<serde_json::Value> {
        let result = self.command(&["show", &id.to_string(), "--json"]).assert_success()?;
        serde_json::from_str(&result.stdout).context("show --json printed invalid JSON")
    }
}

/// CLI command builder with timing
pub struct AutosaveCommand {
    binary_path: PathBuf,
    working_dir: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
    stdin_data: Option<String>,
}

impl AutosaveCommand {
    /// Create a new command in the given working directory
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_autosave")),
            working_dir: working_dir.as_ref().to_path_buf(),
            args: Vec::new(),
            env: HashMap::new(),
            stdin_data: None,
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    /// Provide stdin data
    pub fn stdin(&mut self, data: &str) -> &mut Self {
        self.stdin_data = Some(data.to_string());
        self
    }

    /// Execute command and return result with timing
    pub fn execute(&self) -> Result<CommandResult> {
        let start = Instant::now();

        let mut child = Command::new(&self.binary_path)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .envs(&self.env)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("Failed to spawn command")?;

        // Dropping stdin closes it, so scripts see EOF
        if let Some(mut stdin) = child.stdin.take() {
            if let Some(data) = &self.stdin_data {
                stdin.write_all(data.as_bytes())?;
            }
        }

        let output = child.wait_with_output()
            .context("Failed to wait for command")?;

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            duration: start.elapsed(),
        })
    }

    /// Execute and assert success
    pub fn assert_success(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if !result.success() {
            anyhow::bail!(
                "Command failed (exit code: {}):\nArgs: {:?}\nStdout: {}\nStderr: {}",
                result.exit_code,
                self.args,
                result.stdout,
                result.stderr
            );
        }

        Ok(result)
    }

    /// Execute and expect failure
    pub fn assert_failure(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if result.success() {
            anyhow::bail!(
                "Command should have failed but succeeded:\nArgs: {:?}\nStdout: {}",
                self.args,
                result.stdout
            );
        }

        Ok(result)
    }
}

/// Command execution result with timing
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration: Duration,
}

impl CommandResult {
    /// Check if command succeeded
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Check if stdout contains text
    pub fn contains_stdout(&self, text: &str) -> bool {
        self.stdout.contains(text)
    }

    /// Check if stderr contains text
    pub fn contains_stderr(&self, text: &str) -> bool {
        self.stderr.contains(text)
    }

    /// Number of "Saved project" lines
    pub fn save_lines(&self) -> usize {
        self.stdout.lines().filter(|l| l.contains("Saved project")).count()
    }

    /// Parse the id from "Created project <id>"
    pub fn parse_created_id(&self) -> Option<u64> {
        self.stdout
            .lines()
            .find(|line| line.contains("Created project"))
            .and_then(|line| line.split_whitespace().last())
            .and_then(|id| id.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_id_parsing() {
        let result = CommandResult {
            stdout: "\u{1b}[32m✓\u{1b}[39m Created project 42\n".to_string(),
            stderr: String::new(),
            exit_code: 0,
            duration: Duration::from_millis(10),
        };
        assert_eq!(result.parse_created_id(), Some(42));
    }
}
