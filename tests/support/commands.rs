//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    fn path_var(&self) -> String {
        let system = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", self.bin.path().display(), system)
    }

    /// Apply the isolated environment to any command.
    fn isolate(&self, cmd: &mut std::process::Command) {
        cmd.env("HOME", self.home.path())
            .env("USERPROFILE", self.home.path())
            .env("PATH", self.path_var())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_AUTHOR_NAME", "Alice")
            .env("GIT_AUTHOR_EMAIL", "alice@example.com")
            .env("GIT_COMMITTER_NAME", "Alice")
            .env("GIT_COMMITTER_EMAIL", "alice@example.com")
            .env("NO_COLOR", "1")
            .env_remove("GP_LOG")
            .env_remove("P4PORT")
            .env_remove("P4USER")
            .env_remove("P4CLIENT")
            .env_remove("XDG_CONFIG_HOME")
            .current_dir(self.dir.path());
    }

    /// Create a gp command inside the isolated environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut std_cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("gp"));
        self.isolate(&mut std_cmd);
        Command::from_std(std_cmd)
    }

    /// Run git in the test directory and return its stdout.
    pub fn git(&self, args: &[&str]) -> String {
        let mut cmd = std::process::Command::new("git");
        cmd.args(args);
        self.isolate(&mut cmd);
        let output = cmd.output().expect("failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Read a global git config value.
    pub fn global_config(&self, key: &str) -> Option<String> {
        let mut cmd = std::process::Command::new("git");
        cmd.args(["config", "--global", key]);
        self.isolate(&mut cmd);
        let output = cmd.output().expect("failed to run git config");
        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    pub fn set_global_config(&self, key: &str, value: &str) {
        self.git(&["config", "--global", key, value]);
    }

    /// Message of the HEAD commit.
    pub fn head_message(&self) -> String {
        self.git(&["show", "-s", "--format=%B"])
    }

    /// Shortcut for `gp login` with piped answers.
    pub fn login_with_input(&self, input: &str) -> Output {
        self.cmd()
            .arg("login")
            .write_stdin(input)
            .output()
            .expect("failed to run gp login")
    }

    /// Shortcut for `gp logout`.
    pub fn logout(&self) -> Output {
        self.cmd()
            .arg("logout")
            .output()
            .expect("failed to run gp logout")
    }

    /// Shortcut for `gp review` with piped answers.
    pub fn review(&self, args: &[&str], input: &str) -> Output {
        self.cmd()
            .arg("review")
            .args(args)
            .write_stdin(input)
            .output()
            .expect("failed to run gp review")
    }
}
