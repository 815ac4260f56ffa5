//! Graphviz rendering of triple streams.
//!
//! Graphs are emitted as DOT digraphs with one colour per relation id. DOT
//! files are written directly; every other extension is produced by piping
//! the DOT source through the Graphviz `dot` program.

use std::{
    ffi::{OsStr, OsString},
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

use geograph_core::Triple;
use thiserror::Error;
use tracing::{Span, debug, field, instrument};

/// Edge colours, indexed by relation id modulo the palette length.
pub const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const DOT_EXTENSIONS: [&str; 2] = ["dot", "gv"];
const DEFAULT_PROGRAM: &str = "dot";

/// Errors raised while drawing a graph.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The output path has no extension to pick a format from.
    #[error("cannot infer an output format from `{path}`; add an extension such as .svg")]
    MissingExtension {
        /// Offending output path.
        path: PathBuf,
    },
    /// Writing a DOT file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The rendering program could not be started or fed.
    #[error("failed to run `{program}`: {source}")]
    Launch {
        /// Program that was invoked.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The rendering program exited unsuccessfully.
    #[error("`{program}` exited with {status}: {stderr}")]
    Backend {
        /// Program that was invoked.
        program: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Captured standard error.
        stderr: String,
    },
}

/// Colour assigned to `relation`.
///
/// # Examples
/// ```
/// use geograph_cli::draw::{PALETTE, relation_colour};
///
/// assert_eq!(relation_colour(0), PALETTE[0]);
/// assert_eq!(relation_colour(PALETTE.len()), PALETTE[0]);
/// ```
#[must_use]
pub fn relation_colour(relation: usize) -> &'static str {
    PALETTE[relation % PALETTE.len()]
}

/// DOT rendering of a triple list, produced through [`fmt::Display`].
///
/// # Examples
/// ```
/// use geograph_cli::draw::Dot;
/// use geograph_core::Triple;
///
/// let triples = [Triple::new(0, 0, 1)];
/// let dot = Dot::new(&triples, "edge").to_string();
/// assert!(dot.starts_with("digraph \"edge\" {"));
/// assert!(dot.contains("0 -> 1 [label=\"0\", color=\"#1f77b4\"];"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Dot<'a> {
    triples: &'a [Triple],
    name: &'a str,
}

impl<'a> Dot<'a> {
    /// Wraps `triples` for rendering under the graph title `name`.
    #[must_use]
    pub const fn new(triples: &'a [Triple], name: &'a str) -> Self {
        Self { triples, name }
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph \"{}\" {{", escape(self.name))?;
        writeln!(f, "  node [shape=circle];")?;
        for triple in self.triples {
            writeln!(
                f,
                "  {} -> {} [label=\"{}\", color=\"{}\"];",
                triple.head,
                triple.tail,
                triple.relation,
                relation_colour(triple.relation),
            )?;
        }
        writeln!(f, "}}")
    }
}

fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renderer backed by a Graphviz executable.
#[derive(Clone, Debug)]
pub struct Graphviz {
    program: OsString,
    args: Vec<OsString>,
}

impl Default for Graphviz {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Graphviz {
    /// Uses `program` instead of `dot` on the `PATH`.
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self::with_args(program, Vec::<OsString>::new())
    }

    /// Uses `program`, passing `args` ahead of the format and output flags.
    #[must_use]
    pub fn with_args<I>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Draws `triples` to `path`, choosing the format from its extension.
    ///
    /// # Errors
    /// Returns [`DrawError`] when the extension is missing, the file cannot
    /// be written, or the Graphviz program fails.
    #[instrument(
        name = "draw.render",
        err,
        skip(self, triples),
        fields(path = %path.display(), triples = triples.len(), format = field::Empty),
    )]
    pub fn draw(&self, triples: &[Triple], path: &Path, name: &str) -> Result<(), DrawError> {
        let format = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| DrawError::MissingExtension {
                path: path.to_path_buf(),
            })?;
        Span::current().record("format", field::display(&format));

        let dot = Dot::new(triples, name).to_string();
        if DOT_EXTENSIONS.contains(&format.as_str()) {
            fs::write(path, dot).map_err(|source| DrawError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        } else {
            self.render(&dot, &format, path)?;
        }
        debug!(path = %path.display(), "drawing written");
        Ok(())
    }

    fn render(&self, dot: &str, format: &str, path: &Path) -> Result<(), DrawError> {
        let program = self.program.to_string_lossy().into_owned();
        let launch = |source: io::Error| DrawError::Launch {
            program: program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(launch)?;
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(dot.as_bytes()),
            None => Ok(()),
        };
        // A backend that rejects its arguments may exit before draining stdin.
        let unread = match written {
            Ok(()) => None,
            Err(source) if source.kind() == io::ErrorKind::BrokenPipe => Some(source),
            Err(source) => return Err(launch(source)),
        };
        let output = child.wait_with_output().map_err(launch)?;
        if !output.status.success() {
            return Err(DrawError::Backend {
                program: program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        unread.map_or(Ok(()), |source| Err(launch(source)))
    }
}

/// Draws `triples` to `path` with the default Graphviz installation.
///
/// # Errors
/// See [`Graphviz::draw`].
pub fn draw(triples: &[Triple], path: &Path, name: &str) -> Result<(), DrawError> {
    Graphviz::default().draw(triples, path, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        match TempDir::new() {
            Ok(dir) => dir,
            Err(err) => panic!("failed to create temp dir: {err}"),
        }
    }

    #[rstest]
    fn relations_cycle_through_the_palette() {
        let triples: Vec<_> = (0..12).map(|r| Triple::new(r, r, r + 1)).collect();
        let dot = Dot::new(&triples, "cycle").to_string();
        assert!(dot.contains(&format!("10 -> 11 [label=\"10\", color=\"{}\"];", PALETTE[0])));
        assert!(dot.contains(&format!("3 -> 4 [label=\"3\", color=\"{}\"];", PALETTE[3])));
        assert_eq!(dot.lines().count(), triples.len() + 3);
    }

    #[rstest]
    fn titles_are_escaped() {
        let dot = Dot::new(&[], "say \"hi\"").to_string();
        assert_eq!(dot, "digraph \"say \\\"hi\\\"\" {\n  node [shape=circle];\n}\n");
    }

    #[rstest]
    #[case("graph.dot")]
    #[case("graph.GV")]
    fn dot_files_are_written_directly(#[case] file: &str) {
        let dir = temp_dir();
        let path = dir.path().join(file);
        let renderer = Graphviz::new("definitely-not-graphviz");
        renderer
            .draw(&[Triple::new(0, 0, 1)], &path, "g")
            .expect("dot output needs no backend");
        let written = fs::read_to_string(&path).expect("file must exist");
        assert!(written.contains("0 -> 1"));
    }

    #[rstest]
    fn missing_extension_is_rejected() {
        let dir = temp_dir();
        let err = draw(&[], &dir.path().join("graph"), "g").expect_err("no format");
        assert!(matches!(err, DrawError::MissingExtension { .. }));
    }

    #[rstest]
    fn unlaunchable_backend_is_reported() {
        let dir = temp_dir();
        let renderer = Graphviz::new("definitely-not-graphviz");
        let err = renderer
            .draw(&[Triple::new(0, 0, 1)], &dir.path().join("graph.svg"), "g")
            .expect_err("program does not exist");
        assert!(
            matches!(err, DrawError::Launch { ref program, .. } if program == "definitely-not-graphviz"),
            "unexpected error: {err:?}"
        );
    }

    /// Renderer running `body` as a shell script in place of `dot`.
    #[cfg(unix)]
    fn fake_backend(dir: &TempDir, body: &str) -> Graphviz {
        let script = dir.path().join("fake-dot.sh");
        fs::write(&script, format!("{body}\n")).expect("write script");
        Graphviz::with_args("sh", [script])
    }

    #[cfg(unix)]
    #[rstest]
    #[case::drains_stdin("cat >/dev/null\necho 'Format: \"xyz\" not recognized' >&2\nexit 1")]
    #[case::ignores_stdin("echo 'Format: \"xyz\" not recognized' >&2\nexit 1")]
    fn rejected_formats_report_backend_stderr(#[case] body: &str) {
        let dir = temp_dir();
        let renderer = fake_backend(&dir, body);
        let triples: Vec<_> = (0..20_000).map(|id| Triple::new(id, id % 3, id + 1)).collect();
        let err = renderer
            .draw(&triples, &dir.path().join("g.xyz"), "g")
            .expect_err("backend exits with 1");
        assert!(
            matches!(
                err,
                DrawError::Backend { ref stderr, status, .. }
                    if stderr == "Format: \"xyz\" not recognized" && status.code() == Some(1)
            ),
            "unexpected error: {err:?}"
        );
    }

    #[cfg(unix)]
    #[rstest]
    fn backend_receives_format_and_output_flags() {
        let dir = temp_dir();
        let renderer = fake_backend(&dir, "cat > \"$3\"\necho \"$1\" >> \"$3\"");
        let path = dir.path().join("g.svg");
        renderer
            .draw(&[Triple::new(0, 0, 1)], &path, "g")
            .expect("backend succeeds");
        let written = fs::read_to_string(&path).expect("backend wrote the output");
        assert!(written.starts_with("digraph \"g\" {"));
        assert!(written.ends_with("-Tsvg\n"));
    }
}
