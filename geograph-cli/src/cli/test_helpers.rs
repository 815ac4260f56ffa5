//! Helpers shared across CLI tests.

use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;

use super::{Cli, CliError, Command, CommandOutput, TopologyArgs, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn topology(name: &str, params: &[(&str, Value)]) -> TopologyArgs {
    TopologyArgs {
        topology: name.to_owned(),
        params: params
            .iter()
            .map(|(key, value)| ((*key).to_owned(), value.clone()))
            .collect(),
    }
}

pub(super) fn run(command: Command) -> CommandOutput {
    match run_cli(Cli { command }) {
        Ok(output) => output,
        Err(err) => panic!("command failed: {err}"),
    }
}

pub(super) fn run_cli_expecting_error(command: Command, panic_msg: &str) -> CliError {
    match run_cli(Cli { command }) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn rendered(output: &CommandOutput) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = super::render_output(output, &mut buffer) {
        panic!("rendering into memory cannot fail: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("output is not UTF-8: {err}"),
    }
}

pub(super) fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
