//! Shared testing utilities for kicks CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Stub executables standing in for the external pipeline tools. Each logs
// its invocation to `$KICKS_TEST_LOG`; exit status is overridable through
// the per-tool `KICKS_<TOOL>_STATUS` variable.

const RAILS_STUB: &str = r#"#!/bin/sh
echo "rails $*" >> "$KICKS_TEST_LOG"
echo "rails stdout noise"
if [ "$1" = "new" ]; then
    mkdir -p "$2/config"
    : > "$2/Gemfile"
fi
exit "${KICKS_RAILS_STATUS:-0}"
"#;

const BUNDLE_STUB: &str = r#"#!/bin/sh
echo "bundle $*" >> "$KICKS_TEST_LOG"
echo "bundle stdout noise"
exit "${KICKS_BUNDLE_STATUS:-0}"
"#;

const TAR_STUB: &str = r#"#!/bin/sh
echo "tar $*" >> "$KICKS_TEST_LOG"
exit "${KICKS_TAR_STATUS:-0}"
"#;

const EDITOR_STUB: &str = r#"#!/bin/sh
echo "editor $* pwd=$PWD" >> "$KICKS_TEST_LOG"
exit 0
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with stubbed external tools.
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp directory");
        fs::create_dir_all(root.path().join("home")).expect("failed to create test home");

        let bin = root.path().join("bin");
        fs::create_dir_all(&bin).expect("failed to create stub bin directory");
        write_stub(&bin, "rails", RAILS_STUB);
        write_stub(&bin, "bundle", BUNDLE_STUB);
        write_stub(&bin, "tar", TAR_STUB);
        write_stub(&bin, "editor", EDITOR_STUB);

        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// `~/.kicks/` inside the emulated home.
    pub fn store_dir(&self) -> PathBuf {
        self.home().join(".kicks")
    }

    /// `~/.kicks/config.yml` inside the emulated home.
    pub fn config_file(&self) -> PathBuf {
        self.store_dir().join("config.yml")
    }

    /// Workspace root the default test config points at.
    pub fn kicks_home(&self) -> PathBuf {
        self.home().join("kicks")
    }

    /// Workspace directory for the named application.
    pub fn workspace_path(&self, app_name: &str) -> PathBuf {
        self.kicks_home().join(app_name)
    }

    /// Write a config file with the given content.
    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.store_dir()).expect("failed to create config store");
        fs::write(self.config_file(), content).expect("failed to write config");
    }

    /// Write a config whose workspace root lives inside the test home.
    pub fn write_default_config(&self) {
        self.write_config(&format!("kicks_home: {}\n", self.kicks_home().display()));
    }

    /// Write the two project config files into the store (or a project
    /// subdirectory), with the given tenant URL.
    pub fn write_project_configs(&self, project: Option<&str>, url: &str) {
        let dir = match project {
            Some(name) => self.store_dir().join(name),
            None => self.store_dir(),
        };
        fs::create_dir_all(&dir).expect("failed to create project config directory");
        fs::write(dir.join("kicks.yml"), format!("server:\n  url: {url}\n"))
            .expect("failed to write kicks.yml");
        fs::write(dir.join("secrets.yml"), "api_key: test-key\n")
            .expect("failed to write secrets.yml");
    }

    /// Build a command for invoking the compiled `kicks` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("kicks").expect("failed to locate kicks binary");
        let path = format!(
            "{}:{}",
            self.root.path().join("bin").display(),
            env::var("PATH").unwrap_or_default()
        );
        cmd.env("HOME", self.home())
            .env("PATH", path)
            .env("KICKS_TEST_LOG", self.log_file())
            .env_remove("EDITOR");
        cmd
    }

    /// Invocations recorded by the stub tools, in order.
    pub fn commands_log(&self) -> Vec<String> {
        fs::read_to_string(self.log_file())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn log_file(&self) -> PathBuf {
        self.root.path().join("commands.log")
    }
}

fn write_stub(bin: &Path, name: &str, body: &str) {
    let path = bin.join(name);
    fs::write(&path, body).expect("failed to write stub");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("failed to mark stub executable");
}
