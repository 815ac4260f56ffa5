//! Command-line interface for listing, printing, drawing and benchmarking
//! the registered topologies.

mod commands;

pub use commands::{
    BenchmarkCommand, Cli, CliError, Command, CommandOutput, DrawCommand, GenerateCommand,
    TopologyArgs, TripleListing, parse_param, render_output, run_cli,
};

#[cfg(test)]
mod test_helpers;
