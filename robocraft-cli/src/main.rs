//! # robocraft CLI
//!
//! Command-line driver for the robot interpreter.
//!
//! Usage:
//!   robocraft run <INSTRUCTIONS> [-g mk1|mk2|mk3] [-x N] [-y N]
//!   robocraft script <FILE>
//!   robocraft instructions [-g mk1|mk2|mk3]
//!
//! Examples:
//!   robocraft run FBLR
//!   robocraft run -g mk3 R5F
//!   robocraft --config robot.json --trace run -g mk3 5F5F
//!   robocraft script -g mk3 demos/fuel_drain.txt

use clap::{Parser, Subcommand};
use robocraft_vm::{
    control_with_config, error, spawn, Generation, Position, Result, RobotConfig, Run,
};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "robocraft")]
#[command(author, version, about = "robocraft - robot instruction interpreter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON robot config (initial_fuel, max_boost, record_trace)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Record every executed instruction in the output
    #[arg(short, long, global = true)]
    trace: bool,

    /// Print the full run (orientation, fuel, report) and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one instruction string on a fresh robot
    Run {
        /// Instruction string, e.g. "FFRFF" or "R5F"
        instructions: String,

        /// Robot generation: mk1, mk2 or mk3
        #[arg(short, long, default_value = "mk1")]
        generation: Generation,

        /// Starting x coordinate
        #[arg(short = 'x', long, default_value_t = 0, allow_negative_numbers = true)]
        start_x: i64,

        /// Starting y coordinate
        #[arg(short = 'y', long, default_value_t = 0, allow_negative_numbers = true)]
        start_y: i64,
    },
    /// Run each line of a file on the same robot
    Script {
        /// File with one instruction string per line; '#' starts a comment
        #[arg(required = true)]
        file: String,

        /// Robot generation: mk1, mk2 or mk3
        #[arg(short, long, default_value = "mk1")]
        generation: Generation,

        /// Starting x coordinate
        #[arg(short = 'x', long, default_value_t = 0, allow_negative_numbers = true)]
        start_x: i64,

        /// Starting y coordinate
        #[arg(short = 'y', long, default_value_t = 0, allow_negative_numbers = true)]
        start_y: i64,
    },
    /// Show the instruction set of a generation
    Instructions {
        /// Robot generation: mk1, mk2 or mk3 (all when omitted)
        #[arg(short, long)]
        generation: Option<Generation>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&str>, trace: bool) -> Result<RobotConfig> {
    let config = match path {
        Some(path) => {
            let config = RobotConfig::load(path)?;
            info!(path, ?config, "loaded robot config");
            config
        }
        None => RobotConfig::default(),
    };
    let record_trace = trace || config.record_trace;
    Ok(config.with_trace(record_trace))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| {
        error::serialization_error("failed to render output")
            .with_operation("cli::to_json")
            .set_source(e)
    })
}

/// Non-empty lines of a script, comments stripped, with 1-based line numbers
fn script_lines(source: &str) -> Vec<(usize, &str)> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then_some((i + 1, line))
        })
        .collect()
}

fn print_run(run: &Run, verbose: bool, trace: bool) -> Result<()> {
    if verbose || trace {
        println!("{}", to_json(run, true)?);
    } else {
        println!("{}", to_json(&run.position, false)?);
    }
    Ok(())
}

fn run_instructions(
    generation: Generation,
    config: &RobotConfig,
    start: Position,
    instructions: &str,
    verbose: bool,
) -> Result<()> {
    let run = control_with_config(generation, config, start.x, start.y, instructions)?;
    print_run(&run, verbose, config.record_trace)
}

fn read_script(file: &str) -> Result<String> {
    std::fs::read_to_string(file).map_err(|e| {
        robocraft_vm::Error::from(e)
            .with_operation("cli::script")
            .with_context("file", file)
    })
}

/// Execute every script line on one robot, capturing the state after each
fn script_runs(
    generation: Generation,
    config: &RobotConfig,
    start: Position,
    source: &str,
) -> Result<Vec<(usize, Run)>> {
    config.validate()?;

    let mut robot = spawn(generation, start, config);
    let runs = script_lines(source)
        .into_iter()
        .map(|(line_no, instructions)| {
            debug!(line_no, instructions, "executing script line");
            let report = robot.execute(instructions);
            (line_no, Run::capture(robot.as_ref(), report))
        })
        .collect();
    Ok(runs)
}

fn run_script(
    generation: Generation,
    config: &RobotConfig,
    start: Position,
    file: &str,
    verbose: bool,
) -> Result<()> {
    let source = read_script(file)?;
    for (line_no, run) in script_runs(generation, config, start, &source)? {
        if verbose || config.record_trace {
            println!("{}", to_json(&run, true)?);
        } else {
            println!("{}: {}", line_no, to_json(&run.position, false)?);
        }
    }
    Ok(())
}

fn show_instructions(generation: Option<Generation>) {
    let generations = match generation {
        Some(generation) => vec![generation],
        None => Generation::all().to_vec(),
    };

    for (i, generation) in generations.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", generation);
        for (character, effect) in generation.instruction_table() {
            println!("  {:<6} {}", character, effect);
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            instructions,
            generation,
            start_x,
            start_y,
        } => {
            let config = load_config(cli.config.as_deref(), cli.trace)?;
            run_instructions(
                generation,
                &config,
                Position::new(start_x, start_y),
                &instructions,
                cli.verbose,
            )
        }
        Commands::Script {
            file,
            generation,
            start_x,
            start_y,
        } => {
            let config = load_config(cli.config.as_deref(), cli.trace)?;
            run_script(
                generation,
                &config,
                Position::new(start_x, start_y),
                &file,
                cli.verbose,
            )
        }
        Commands::Instructions { generation } => {
            show_instructions(generation);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        if e.status().is_retryable() {
            eprintln!("({} error, retrying may succeed)", e.status());
        }
        std::process::exit(1);
    }
}
