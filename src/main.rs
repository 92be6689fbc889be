// algoscope: step-by-step algorithm visualizer with deterministic replay

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use algoscope::config::{VisualizerConfig, DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_SPEED_MS};
use algoscope::errors::VisualizerError;
use algoscope::step::{Algorithm, Value};
use algoscope::store::{Action, Store};
use algoscope::ui::App;

#[derive(Parser, Debug)]
#[command(author, version, about = "Step through sorting, tree and graph algorithms")]
struct Args {
    /// Algorithm to start with: bubble, merge, quick, heap, bst, bfs or dfs
    #[arg(long, default_value = "bubble")]
    algorithm: Algorithm,
    /// Comma-separated array for the sorting algorithms (e.g. 5,3,8,1)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    input: Option<Vec<Value>>,
    /// Milliseconds between steps while playing
    #[arg(long, default_value_t = DEFAULT_SPEED_MS)]
    speed: u64,
    /// Seed for shuffling the input, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
    /// Keep a replay checkpoint every N steps (0 disables)
    #[arg(long, default_value_t = DEFAULT_CHECKPOINT_INTERVAL)]
    checkpoint_interval: usize,
    /// Write tracing output to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Print every step and the final state instead of starting the TUI
    #[arg(long)]
    trace: bool,
}

/// Install a file-backed subscriber. The TUI owns stdout, so logs never go there.
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Step through the whole sequence, printing each step, then the final state
fn run_trace(store: &mut Store) -> Result<(), VisualizerError> {
    println!("{}", store.algorithm().name());
    while store.dispatch(Action::Advance)?.is_applied() {
        if let (Some(position), Some(step)) = (store.position(), store.current_step()) {
            println!("{:>4}  {}", position + 1, step);
        }
    }

    let state = store.state();
    println!();
    match store.algorithm() {
        Algorithm::Bst => {
            let order: Vec<String> = state
                .tree
                .in_order()
                .iter()
                .map(|n| n.value.to_string())
                .collect();
            println!("in-order: {}", order.join(" "));
        }
        Algorithm::Bfs | Algorithm::Dfs => {
            let mut visited: Vec<&str> = state.visited_nodes.iter().map(String::as_str).collect();
            visited.sort_unstable();
            println!("visited: {}", visited.join(" "));
        }
        _ => {
            println!("array: {:?}", state.array);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut config = VisualizerConfig {
        speed_ms: args.speed,
        checkpoint_interval: args.checkpoint_interval,
        shuffle_seed: args.seed,
        ..VisualizerConfig::default()
    };
    if let Some(input) = args.input {
        config.default_input = input;
    }

    let mut store = match Store::new(config, args.algorithm) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    info!(algorithm = args.algorithm.tag(), "starting");

    if args.trace {
        if let Err(e) = run_trace(&mut store) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(store);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
