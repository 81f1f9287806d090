use narwhal::{DiagonalPolicy, Distance, Engine, EngineOptions, Weight};
use serde::Serialize;
use std::io::{BufRead, BufReader, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Engine(narwhal::Error),
    /// A malformed command line inside the script.
    Command(String),
    /// At least one script command failed; the message was already reported.
    CommandsFailed(usize),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Engine(err) => write!(f, "{err}"),
            CliError::Command(msg) => write!(f, "{msg}"),
            CliError::CommandsFailed(n) => write!(f, "{n} command(s) failed"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<narwhal::Error> for CliError {
    fn from(value: narwhal::Error) -> Self {
        Self::Engine(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    json: bool,
    pretty: bool,
    strict: bool,
    allow_diagonal: bool,
}

fn usage() -> &'static str {
    "narwhal-cli\n\
\n\
USAGE:\n\
  narwhal-cli [--json] [--pretty] [--strict] [--allow-diagonal] [<path>|-]\n\
\n\
COMMANDS (one per line):\n\
  city <name>...                      add locations without roads\n\
  edge <from> <to> <weight|-1>        set a one-way road (-1 removes it)\n\
  add <name> out <w>... in <w>...     add a location with roads to/from every existing one\n\
  remove <name>                       remove a location\n\
  route <from> <to>                   print the shortest route\n\
  matrix                              print the shortest distance matrix\n\
  exit | quit                         stop reading\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', commands are read from stdin.\n\
  - Blank lines and lines starting with '#' are ignored.\n\
  - The graph is re-solved after every mutating command.\n\
  - --json prints routes and matrices as JSON; --pretty indents it.\n\
  - Log output is controlled with RUST_LOG (e.g. RUST_LOG=narwhal=debug).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--strict" => args.strict = true,
            "--allow-diagonal" => args.allow_diagonal = true,
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn open_input(input: Option<&str>) -> Result<Box<dyn BufRead>, CliError> {
    match input {
        None | Some("-") => Ok(Box::new(BufReader::new(std::io::stdin()))),
        Some(path) => Ok(Box::new(BufReader::new(std::fs::File::open(path)?))),
    }
}

fn parse_weight(raw: &str) -> Result<Distance, CliError> {
    raw.parse::<Weight>()
        .map(Distance::from_input)
        .map_err(|_| CliError::Command(format!("invalid weight: {raw}")))
}

fn parse_weights<'a>(raw: impl Iterator<Item = &'a str>) -> Result<Vec<Distance>, CliError> {
    raw.map(parse_weight).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

#[derive(Serialize)]
struct RouteOut<'a> {
    from: &'a str,
    to: &'a str,
    route: Option<narwhal::Route>,
}

struct Session<W> {
    engine: Engine,
    json: bool,
    pretty: bool,
    out: W,
}

impl<W: Write> Session<W> {
    fn new(args: &Args, out: W) -> Self {
        let options = EngineOptions {
            diagonal: if args.allow_diagonal {
                DiagonalPolicy::Ignore
            } else {
                DiagonalPolicy::Reject
            },
            strict_queries: args.strict,
        };
        Self {
            engine: Engine::with_options(options),
            json: args.json,
            pretty: args.pretty,
            out,
        }
    }

    fn write_json(&mut self, value: &impl Serialize) -> Result<(), CliError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, value)?;
        } else {
            serde_json::to_writer(&mut self.out, value)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn execute(&mut self, line: &str) -> Result<Flow, CliError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        let rest: Vec<&str> = words.collect();
        tracing::debug!(command, args = ?rest, "executing");

        match (command, rest.as_slice()) {
            ("exit" | "quit", []) => return Ok(Flow::Stop),
            ("city", names) if !names.is_empty() => {
                let added = names
                    .iter()
                    .try_for_each(|name| self.engine.add_vertex(*name).map(|_| ()));
                // Names before a duplicate stay added; keep the graph solved either way.
                self.engine.solve();
                added?;
                writeln!(self.out, "Added {} location(s).", names.len())?;
            }
            ("edge", [from, to, weight]) => {
                let weight = parse_weight(weight)?;
                self.engine.set_edge_by_name(from, to, weight)?;
                self.engine.solve();
                writeln!(self.out, "Edge updated.")?;
            }
            ("add", [name, rest @ ..]) => {
                let (outgoing, incoming) = split_add_weights(rest)?;
                self.engine
                    .add_vertex_with_edges(*name, &outgoing, &incoming)?;
                self.engine.solve();
                writeln!(self.out, "New location added.")?;
            }
            ("remove", [name]) => {
                self.engine.remove_vertex(name)?;
                self.engine.solve();
                writeln!(self.out, "Location removed.")?;
            }
            ("route", [from, to]) => self.route(from, to)?,
            ("matrix", []) => {
                if self.json {
                    let table = self.engine.table();
                    if self.pretty {
                        serde_json::to_writer_pretty(&mut self.out, &table)?;
                    } else {
                        serde_json::to_writer(&mut self.out, &table)?;
                    }
                    writeln!(self.out)?;
                } else {
                    writeln!(self.out, "Shortest distance matrix:")?;
                    write!(self.out, "{}", self.engine.table())?;
                }
            }
            _ => return Err(CliError::Command(format!("unrecognized command: {line}"))),
        }
        Ok(Flow::Continue)
    }

    fn route(&mut self, from: &str, to: &str) -> Result<(), CliError> {
        let route = match self.engine.route(from, to) {
            Ok(route) => Some(route),
            Err(narwhal::Error::NoPathExists { .. }) => None,
            Err(err) => return Err(err.into()),
        };

        if self.json {
            return self.write_json(&RouteOut { from, to, route });
        }
        match route {
            Some(route) => {
                writeln!(self.out, "Shortest path: {route}")?;
                writeln!(self.out, "Distance: {}", route.distance)?;
            }
            None => writeln!(self.out, "No path exists between {from} and {to}.")?,
        }
        Ok(())
    }
}

/// Splits `out <w>... in <w>...` into the two weight lists.
fn split_add_weights(rest: &[&str]) -> Result<(Vec<Distance>, Vec<Distance>), CliError> {
    let malformed = || CliError::Command("expected: add <name> out <w>... in <w>...".to_string());
    let [first, tail @ ..] = rest else {
        return Err(malformed());
    };
    if *first != "out" {
        return Err(malformed());
    }
    let Some(split) = tail.iter().position(|w| *w == "in") else {
        return Err(malformed());
    };
    let outgoing = parse_weights(tail[..split].iter().copied())?;
    let incoming = parse_weights(tail[split + 1..].iter().copied())?;
    Ok((outgoing, incoming))
}

fn run(args: Args) -> Result<(), CliError> {
    let input = open_input(args.input.as_deref())?;
    let mut session = Session::new(&args, std::io::stdout().lock());
    let mut failed = 0usize;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        match session.execute(&line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break,
            Err(CliError::Io(err)) => return Err(CliError::Io(err)),
            Err(err) => {
                failed += 1;
                tracing::warn!(line = idx + 1, %err, "command failed");
                eprintln!("line {}: {err}", idx + 1);
            }
        }
    }
    session.out.flush()?;

    if failed > 0 {
        return Err(CliError::CommandsFailed(failed));
    }
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::CommandsFailed(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
