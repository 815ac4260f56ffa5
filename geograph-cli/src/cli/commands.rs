//! Command implementations and argument parsing for the geograph CLI.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};
use geograph_core::{
    Generator, Kwargs, MappedTriples, MappedTriplesError, RegistryError, Triple, registry,
    to_dataset,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::{
    benchmark::{
        self, BenchmarkError, BenchmarkSettings, ExternalTrainer, Harness, ResultRow,
        default_experiments, load_experiments,
    },
    draw::{self, DrawError},
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "geograph",
    version,
    about = "Generate, draw and benchmark geometric knowledge graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List the registered topologies.
    List,
    /// Print a topology's triples as tab-separated rows.
    Generate(GenerateCommand),
    /// Render a topology with Graphviz.
    Draw(DrawCommand),
    /// Train embedding models on generated graphs and collate their scores.
    Benchmark(BenchmarkCommand),
}

/// A topology name plus `key=value` parameters.
#[derive(Debug, Args, Clone)]
pub struct TopologyArgs {
    /// Topology name, e.g. `SquareGrid2D` or `chain`.
    pub topology: String,

    /// Topology parameter as `key=value`; values are parsed as JSON when
    /// possible and kept as strings otherwise.
    #[arg(long = "param", short = 'p', value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,
}

impl TopologyArgs {
    fn kwargs(&self) -> Kwargs {
        self.params.iter().cloned().collect()
    }

    fn build(&self) -> Result<Box<dyn Generator>, CliError> {
        Ok(registry().make(&self.topology, &self.kwargs())?)
    }
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Topology to generate.
    #[command(flatten)]
    pub topology: TopologyArgs,

    /// Also print inverse triples, with relations offset past the forward ones.
    #[arg(long)]
    pub inverse: bool,
}

/// Options accepted by the `draw` command.
#[derive(Debug, Args, Clone)]
pub struct DrawCommand {
    /// Topology to draw.
    #[command(flatten)]
    pub topology: TopologyArgs,

    /// Output file; `.dot`/`.gv` are written directly, other extensions are
    /// rendered by Graphviz.
    #[arg(long, short)]
    pub output: PathBuf,

    /// Graph title (defaults to the canonical topology name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Options accepted by the `benchmark` command.
#[derive(Debug, Args, Clone)]
pub struct BenchmarkCommand {
    /// Trials per experiment and model.
    #[arg(long, default_value_t = benchmark::DEFAULT_TRIALS)]
    pub trials: usize,

    /// Device passed to the trainer.
    #[arg(long, default_value = benchmark::DEFAULT_DEVICE)]
    pub device: String,

    /// Metric extracted from each results document.
    #[arg(long, default_value = benchmark::DEFAULT_METRIC)]
    pub metric: String,

    /// Re-run trials that already have cached results.
    #[arg(short, long)]
    pub force: bool,

    /// Training program invoked once per trial.
    #[arg(long)]
    pub trainer: PathBuf,

    /// Extra argument passed to the trainer before the trial arguments.
    #[arg(long = "trainer-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub trainer_args: Vec<String>,

    /// JSON file with a list of experiments (defaults to the built-in grids).
    #[arg(long)]
    pub experiments: Option<PathBuf>,

    /// Results directory (defaults to `$GEOGRAPH_HOME/benchmark`).
    #[arg(long)]
    pub directory: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The topology could not be resolved or built.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The generated graph could not be mapped.
    #[error(transparent)]
    Dataset(#[from] MappedTriplesError),
    /// Rendering failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// The benchmark failed.
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),
}

impl CliError {
    /// Stable code of the underlying core error, when there is one.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Registry(err) | Self::Benchmark(BenchmarkError::Registry(err)) => {
                Some(err.code().as_str())
            }
            Self::Dataset(err) | Self::Benchmark(BenchmarkError::Dataset(err)) => {
                Some(err.code().as_str())
            }
            Self::Draw(_) | Self::Benchmark(_) => None,
        }
    }

    /// Stable code of the generator validation failure, when there is one.
    #[must_use]
    pub fn generator_code(&self) -> Option<&'static str> {
        match self {
            Self::Registry(err) | Self::Benchmark(BenchmarkError::Registry(err)) => {
                err.generator_code().map(|code| code.as_str())
            }
            _ => None,
        }
    }
}

/// Triples of one topology, ready for printing.
#[derive(Debug, Clone)]
pub struct TripleListing {
    /// Canonical topology name.
    pub topology: &'static str,
    /// Closed-form node count, if the topology reports one.
    pub nodes: Option<usize>,
    /// Closed-form edge count, if the topology reports one.
    pub edges: Option<usize>,
    /// The mapped dataset.
    pub dataset: MappedTriples,
}

/// Result of executing a CLI command.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Registered topology names.
    Topologies(Vec<&'static str>),
    /// Generated triples.
    Triples(TripleListing),
    /// A drawing was written.
    Drawing {
        /// Output file.
        path: PathBuf,
        /// Number of edges drawn.
        edges: usize,
    },
    /// Collated benchmark scores.
    Benchmark {
        /// Results directory.
        directory: PathBuf,
        /// Metric column name.
        metric: String,
        /// One row per experiment, model and trial.
        rows: Vec<ResultRow>,
    },
}

/// Parses a `key=value` parameter.
///
/// # Errors
/// Returns a message when `raw` has no `=` or an empty key.
///
/// # Examples
/// ```
/// use geograph_cli::cli::parse_param;
/// use serde_json::json;
///
/// assert_eq!(parse_param("rows=3"), Ok(("rows".to_owned(), json!(3))));
/// assert_eq!(parse_param("sink=true"), Ok(("sink".to_owned(), json!(true))));
/// assert_eq!(parse_param("labels=[0,1,2]"), Ok(("labels".to_owned(), json!([0, 1, 2]))));
/// assert_eq!(parse_param("name=grid"), Ok(("name".to_owned(), json!("grid"))));
/// assert!(parse_param("rows").is_err());
/// ```
pub fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing parameter name in `{raw}`"));
    }
    let value = value.trim();
    let parsed = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
    Ok((key.to_owned(), parsed))
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the command fails.
///
/// # Examples
/// ```
/// use geograph_cli::cli::{Cli, Command, CommandOutput, run_cli};
///
/// let output = run_cli(Cli { command: Command::List })?;
/// assert!(matches!(output, CommandOutput::Topologies(names) if names.contains(&"wheel")));
/// # Ok::<(), geograph_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::List => {
            span.record("command", "list");
            Ok(CommandOutput::Topologies(registry().names()))
        }
        Command::Generate(command) => {
            span.record("command", "generate");
            run_generate(&command)
        }
        Command::Draw(command) => {
            span.record("command", "draw");
            run_draw(&command)
        }
        Command::Benchmark(command) => {
            span.record("command", "benchmark");
            run_benchmark(command)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(topology = %command.topology.topology, inverse = command.inverse),
)]
pub(super) fn run_generate(command: &GenerateCommand) -> Result<CommandOutput, CliError> {
    let generator = command.topology.build()?;
    let dataset = to_dataset(&generator, &MappedTriples::consumer(), command.inverse)?;
    info!(
        topology = generator.name(),
        triples = dataset.triples().len(),
        "triples generated"
    );
    Ok(CommandOutput::Triples(TripleListing {
        topology: generator.name(),
        nodes: generator.number_of_nodes(),
        edges: generator.number_of_edges(),
        dataset,
    }))
}

#[instrument(
    name = "cli.draw",
    err,
    skip(command),
    fields(topology = %command.topology.topology, output = %command.output.display()),
)]
pub(super) fn run_draw(command: &DrawCommand) -> Result<CommandOutput, CliError> {
    let generator = command.topology.build()?;
    let triples = generator.get_triples();
    let name = command.name.as_deref().unwrap_or_else(|| generator.name());
    draw::draw(&triples, &command.output, name)?;
    info!(edges = triples.len(), "drawing completed");
    Ok(CommandOutput::Drawing {
        path: command.output.clone(),
        edges: triples.len(),
    })
}

#[instrument(
    name = "cli.benchmark",
    err,
    skip(command),
    fields(trials = command.trials, device = %command.device, directory = field::Empty),
)]
pub(super) fn run_benchmark(command: BenchmarkCommand) -> Result<CommandOutput, CliError> {
    let BenchmarkCommand {
        trials,
        device,
        metric,
        force,
        trainer,
        trainer_args,
        experiments,
        directory,
    } = command;
    let directory = match directory {
        Some(directory) => directory,
        None => benchmark::default_directory()?,
    };
    Span::current().record("directory", field::display(directory.display()));
    let experiments = match experiments {
        Some(path) => load_experiments(&path)?,
        None => default_experiments(),
    };

    let settings = BenchmarkSettings {
        trials,
        device,
        metric: metric.clone(),
        force,
        directory: directory.clone(),
    };
    let harness = Harness::new(settings, ExternalTrainer::with_args(trainer, trainer_args));
    let rows = harness.run_many(&experiments)?;
    Ok(CommandOutput::Benchmark {
        directory,
        metric,
        rows,
    })
}

fn write_triples(writer: &mut impl Write, triples: &[Triple]) -> io::Result<()> {
    for triple in triples {
        writeln!(writer, "{triple}")?;
    }
    Ok(())
}

fn count(value: Option<usize>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |count| count.to_string())
}

/// Renders `output` to `writer`.
///
/// Triples are printed one `head<TAB>relation<TAB>tail` row per line after
/// `#`-prefixed summary lines; inverse triples, when requested, follow the
/// forward ones.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Topologies(names) => {
            for name in names {
                writeln!(writer, "{name}")?;
            }
        }
        CommandOutput::Triples(listing) => {
            let dataset = &listing.dataset;
            writeln!(writer, "# topology: {}", listing.topology)?;
            writeln!(writer, "# nodes: {}", count(listing.nodes))?;
            writeln!(writer, "# edges: {}", count(listing.edges))?;
            writeln!(writer, "# entities: {}", dataset.num_entities())?;
            writeln!(writer, "# relations: {}", dataset.real_num_relations())?;
            write_triples(&mut writer, dataset.triples())?;
            write_triples(&mut writer, &dataset.inverse_triples())?;
        }
        CommandOutput::Drawing { path, edges } => {
            writeln!(writer, "wrote {edges} edges to {}", path.display())?;
        }
        CommandOutput::Benchmark {
            directory,
            metric,
            rows,
        } => {
            writeln!(writer, "digest\tmodel\t{metric}")?;
            for row in rows {
                writeln!(writer, "{}\t{}\t{}", row.digest, row.model, row.score)?;
            }
            writeln!(writer, "# results in {}", directory.display())?;
        }
    }
    Ok(())
}
