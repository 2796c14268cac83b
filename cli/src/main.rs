use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cmdline_keys_core::{CommandLineParser, FromParam};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod output;

use output::{Inspection, OutputFormat, format_inspection};

/// Keys string of the sample program.
const DEMO_KEYS: &str = "{help h usage ? |      | print this message   }\
                         {@b             |200.0 | double test          }\
                         {s              |str   | string test          }\
                         {n count        |100   | count of objects     }\
                         {t timestamp    |      | use time stamp       }";

const DEMO_ABOUT: &str = "Application name v1.0.0";

#[derive(Debug, Parser)]
#[command(name = "cmdline-keys")]
#[command(about = "Parse argument lists against a keys string")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the help message generated from a keys string.
    Usage(UsageArgs),
    /// Dump the declarations after applying the arguments.
    Inspect(InspectArgs),
    /// Read one parameter as a typed value.
    Get(GetArgs),
    /// Run the sample program.
    #[command(disable_help_flag = true)]
    Demo(DemoArgs),
}

#[derive(Debug, Args)]
struct KeysArgs {
    /// Keys string, e.g. "{n count|100|count of objects}".
    #[arg(long, conflicts_with = "keys_file", required_unless_present = "keys_file")]
    keys: Option<String>,
    /// File containing the keys string.
    #[arg(long)]
    keys_file: Option<PathBuf>,
    /// Program path used as argv[0].
    #[arg(long, default_value = "app")]
    program: String,
    /// Arguments to parse, given after `--`.
    #[arg(last = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct UsageArgs {
    #[command(flatten)]
    keys: KeysArgs,
    /// Text printed before the parameter table.
    #[arg(long)]
    about: Option<String>,
}

#[derive(Debug, Args)]
struct InspectArgs {
    #[command(flatten)]
    keys: KeysArgs,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct GetArgs {
    #[command(flatten)]
    keys: KeysArgs,
    /// Alias of the parameter to read.
    #[arg(long, conflicts_with = "index", required_unless_present = "index")]
    name: Option<String>,
    /// Position of the parameter to read.
    #[arg(long)]
    index: Option<usize>,
    /// Type to convert the value to.
    #[arg(long = "type", default_value = "string")]
    kind: ValueKind,
    /// Keep surrounding spaces of the value.
    #[arg(long)]
    no_trim: bool,
}

#[derive(Debug, Args)]
struct DemoArgs {
    /// Arguments for the sample program.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Value types accepted by `get --type`.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ValueKind {
    Bool,
    Int,
    Uint,
    Int64,
    Uint64,
    Float,
    Double,
    String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Usage(args) => run_usage(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Get(args) => run_get(args),
        Command::Demo(args) => run_demo(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_usage(args: UsageArgs) -> Result<(), String> {
    let mut parser = build_parser(&args.keys)?;
    if let Some(about) = args.about {
        parser.about(about);
    }
    parser.print_message();
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<(), String> {
    let parser = build_parser(&args.keys)?;
    let rendered = format_inspection(&Inspection::of(&parser), args.format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn run_get(args: GetArgs) -> Result<(), String> {
    let mut parser = build_parser(&args.keys)?;
    let lookup = match (args.name, args.index) {
        (Some(name), _) => Lookup::Name(name),
        (None, Some(index)) => Lookup::Index(index),
        (None, None) => return Err("Specify --name or --index".to_string()),
    };
    let trim_spaces = !args.no_trim;

    let value = match args.kind {
        ValueKind::Bool => read::<bool>(&mut parser, &lookup, trim_spaces),
        ValueKind::Int => read::<i32>(&mut parser, &lookup, trim_spaces),
        ValueKind::Uint => read::<u32>(&mut parser, &lookup, trim_spaces),
        ValueKind::Int64 => read::<i64>(&mut parser, &lookup, trim_spaces),
        ValueKind::Uint64 => read::<u64>(&mut parser, &lookup, trim_spaces),
        ValueKind::Float => read::<f32>(&mut parser, &lookup, trim_spaces),
        ValueKind::Double => read::<f64>(&mut parser, &lookup, trim_spaces),
        ValueKind::String => read::<String>(&mut parser, &lookup, trim_spaces),
    };

    if !parser.check() {
        parser.print_errors();
        return Err(format!("could not read {lookup}"));
    }
    println!("{value}");
    Ok(())
}

fn run_demo(args: DemoArgs) -> Result<(), String> {
    let argv: Vec<String> = std::iter::once("demo".to_string())
        .chain(args.args)
        .collect();
    let mut parser = CommandLineParser::new(&argv, DEMO_KEYS)
        .map_err(|err| format!("invalid keys string: {err}"))?;
    parser.about(DEMO_ABOUT);

    if parser.has("help") {
        parser.print_message();
        return Ok(());
    }

    let n = parser.get::<i32>("n");
    println!("n = {n}");

    // Positional, so `-@b=` is optional on the command line.
    let b = parser.get::<f64>("@b");
    println!("@b = {b}");

    let s = parser.get::<String>("s");
    println!("s = {s}");

    if parser.has("t") {
        let t = parser.get::<i32>("t");
        println!("t = {t}");
    }

    if !parser.check() {
        parser.print_errors();
        return Err("invalid arguments".to_string());
    }
    Ok(())
}

enum Lookup {
    Name(String),
    Index(usize),
}

impl Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::Name(name) => write!(f, "parameter '{name}'"),
            Lookup::Index(index) => write!(f, "parameter #{index}"),
        }
    }
}

fn read<T: FromParam + Display>(
    parser: &mut CommandLineParser,
    lookup: &Lookup,
    trim_spaces: bool,
) -> String {
    let value: T = match lookup {
        Lookup::Name(name) => parser.get_with(name, trim_spaces),
        Lookup::Index(index) => parser.get_at_with(*index, trim_spaces),
    };
    value.to_string()
}

fn build_parser(args: &KeysArgs) -> Result<CommandLineParser, String> {
    let keys = match (&args.keys, &args.keys_file) {
        (Some(keys), _) => keys.clone(),
        (None, Some(path)) => fs::read_to_string(path).map_err(|err| {
            format!("Failed to read keys file '{}': {err}", path.display())
        })?,
        (None, None) => return Err("Specify --keys or --keys-file".to_string()),
    };

    let argv: Vec<&str> = std::iter::once(args.program.as_str())
        .chain(args.args.iter().map(String::as_str))
        .collect();
    debug!(argv = ?argv, "Parsing arguments");

    CommandLineParser::new(&argv, &keys).map_err(|err| format!("invalid keys string: {err}"))
}
