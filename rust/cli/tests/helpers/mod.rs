#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;

pub const NIKE_VARS: &[&str] = &[
    "NIKE_CONFIG",
    "NIKE_DATA_DIR",
    "NIKE_SEED",
    "NIKE_REALTIME",
    "NIKE_EXCLUSIVE_ROUNDS",
];

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Sets variables for the lifetime of the guard, restoring the previous
/// values on drop. Callers must hold the serial lock.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in NIKE_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            if !NIKE_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

/// Runs `nike` against a private data directory with `--instant`.
#[derive(Debug)]
pub struct CliRunner {
    data_dir: TempDir,
}

impl CliRunner {
    pub fn new() -> Self {
        Self {
            data_dir: tempfile::tempdir().expect("temp data dir"),
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.data_dir.path()
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        let _guard = EnvGuard::apply(env);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let argv = self.argv(args);
        let code = nike_cli::run(argv, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
        }
    }

    /// Runs the compiled binary with `input` on stdin.
    pub fn run_binary_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_binary_with_env(args, &[], input)
    }

    pub fn run_binary_with_env(
        &self,
        args: &[&str],
        env: &[(&str, &str)],
        input: &str,
    ) -> CliResult {
        use std::io::Write as _;

        let argv = self.argv(args);
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_nike"));
        for key in NIKE_VARS {
            cmd.env_remove(key);
        }
        let mut child = cmd
            .args(&argv[1..])
            .envs(env.iter().copied())
            .env("RUST_LOG", "off")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn nike");
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).expect("write stdin");
        }
        let output = child.wait_with_output().expect("wait for nike");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn round_log(&self) -> Vec<serde_json::Value> {
        std::fs::read_to_string(self.data_dir().join("rounds.jsonl"))
            .unwrap_or_default()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("round log line is JSON"))
            .collect()
    }

    fn argv(&self, args: &[&str]) -> Vec<String> {
        let mut argv = vec![
            "nike".to_string(),
            "--data-dir".to_string(),
            self.data_dir().to_string_lossy().into_owned(),
            "--instant".to_string(),
        ];
        argv.extend(args.iter().map(|s| s.to_string()));
        argv
    }
}

/// Balance from the last status line (`Name: N dracmas`) in `stdout`.
pub fn last_balance(stdout: &str) -> Option<u64> {
    stdout
        .lines()
        .filter_map(|l| l.strip_suffix(" dracmas"))
        .filter_map(|l| l.rsplit(' ').next())
        .filter_map(|n| n.parse().ok())
        .last()
}
