//! Brainfuck machine simulator CLI.
//!
//! This binary provides the single entry point for running programs. It performs:
//! 1. **Live run:** Execute a program with console I/O (default).
//! 2. **Debug run:** Step the engine one instruction at a time, rendering
//!    the skip state, program, loop stack, and tape with the active
//!    positions underlined; live output is suppressed and shown at the end.
//! 3. **Verbose report:** Post-run tape dump, instruction totals, and
//!    timing samples.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use bfsim_core::Engine;
use bfsim_core::common::ExecError;
use bfsim_core::config::Config;
use bfsim_core::core::SkipState;
use bfsim_core::io::{RecordedOutput, StdInput, StdOutput};
use bfsim_core::sim::loader;

/// ANSI escape: start underlining.
const UNDERLINE: &str = "\x1B[4m";
/// ANSI escape: stop underlining.
const RESET: &str = "\x1B[24m";
/// ANSI escape: clear the screen and home the cursor.
const CLEAR: &str = "\x1B[2J\x1B[H";

#[derive(Parser, Debug)]
#[command(
    name = "bfsim",
    author,
    version,
    about = "Brainfuck machine simulator",
    long_about = "Run a Brainfuck program, optionally stepping through it with a state dump per \
                  instruction.\n\nThe ninth symbol ` is a non-standard timing toggle: paired \
                  toggles record wall-clock intervals and per-interval instruction counts, shown \
                  in the --verbose report.\n\nExamples:\n  bfsim hello.bf\n  bfsim hello.bf \
                  --num --verbose\n  bfsim hello.bf --debug --timer 50 --clear"
)]
struct Cli {
    /// Program source file to interpret.
    file: PathBuf,

    /// Print the post-run report (tape dump, instruction totals, timings).
    #[arg(short, long)]
    verbose: bool,

    /// Emit cell values as decimal numbers instead of characters.
    #[arg(long)]
    num: bool,

    /// Step through the program, dumping machine state per instruction.
    #[arg(long)]
    debug: bool,

    /// Milliseconds to wait between debug steps; 0 waits for Enter instead.
    #[arg(long, default_value_t = 0)]
    timer: u64,

    /// Clear the screen before each debug step for cleaner viewing.
    #[arg(long)]
    clear: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let program = loader::load_file(&cli.file).unwrap_or_else(|e| {
        tracing::error!(file = %cli.file.display(), error = %e, "failed to load program");
        eprintln!("\n[!] FATAL: Could not read '{}': {}", cli.file.display(), e);
        process::exit(1);
    });

    let mut config = Config::default();
    config.output.numeric = cli.num;
    let mut engine = Engine::new(program, config);

    let result = if cli.debug {
        run_debug(&mut engine, cli.timer, cli.clear)
    } else {
        run_live(&mut engine)
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "run halted");
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
    println!();

    if cli.verbose {
        let samples = engine.timing_samples();
        engine.stats.print_report(engine.tape(), &samples);
    }
}

/// Runs the program with console I/O and immediate output.
fn run_live(engine: &mut Engine) -> Result<(), ExecError> {
    let mut input = StdInput;
    let mut output = StdOutput;
    engine.run(&mut input, &mut output)
}

/// Steps the program, rendering machine state after each instruction.
///
/// Live output would corrupt the rendering, so emissions are recorded and
/// printed once the run finishes. Between steps the function either waits
/// for Enter (`timer_ms == 0`) or sleeps for the given interval.
fn run_debug(engine: &mut Engine, timer_ms: u64, clear: bool) -> Result<(), ExecError> {
    let mut input = StdInput;
    let mut output = RecordedOutput::new();

    while !engine.is_finished() {
        if clear {
            print!("{CLEAR}");
            let _ = io::stdout().flush();
        }

        let stepped = engine.step(&mut input, &mut output);
        // After a successful step the counter has advanced past the
        // executed instruction (or past the `[` re-entered by a jump);
        // underline the position just behind it. On error the counter is
        // still on the offending instruction.
        let highlight = match stepped {
            Ok(()) => engine.pc().saturating_sub(1),
            Err(_) => engine.pc(),
        };
        render_state(engine, highlight);
        stepped?;

        if timer_ms == 0 {
            let mut line = String::new();
            let _ = io::stdin().lock().read_line(&mut line);
        } else {
            thread::sleep(Duration::from_millis(timer_ms));
        }
    }
    engine.loops().finish(engine.pc())?;

    // Output was suppressed during stepping; show the record now.
    println!("{}", engine.output_record());
    Ok(())
}

/// Prints one machine-state frame: skip state, program, loop stack, tape.
fn render_state(engine: &Engine, highlight: usize) {
    match engine.loops().state() {
        SkipState::Normal => println!("\nSkip: false"),
        SkipState::Skipping { entry_depth } => {
            println!("\nSkip: true (since depth {entry_depth})");
        }
    }

    let ops: Vec<String> = engine
        .program()
        .ops()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Commands: {}", underline(&ops, "", highlight));

    let starts: Vec<String> = engine
        .loops()
        .starts()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("   Loops: {}", starts.join(","));

    let cells: Vec<String> = engine
        .tape()
        .cells()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  Memory: {}", underline(&cells, ",", engine.tape().index()));
}

/// Joins items with `separator`, underlining the item at `index`.
fn underline(items: &[String], separator: &str, index: usize) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        if i == index {
            out.push_str(UNDERLINE);
            out.push_str(item);
            out.push_str(RESET);
        } else {
            out.push_str(item);
        }
    }
    out
}
