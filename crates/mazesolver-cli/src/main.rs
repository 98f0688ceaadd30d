use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mazesolver_cli::commands::{maze::handle_maze, solve::handle_solve, GlobalOptions};
use mazesolver_cli::output::OutputFormat;
use mazesolver_cli::{MazeArgs, SolveArgs};
use mazesolver_lib::DEFAULT_GRID_SIZE;

#[derive(Parser, Debug)]
#[command(author, version, about = "Grid maze generation and A* shortest-path solving")]
struct Cli {
    /// Cells per side of the square grid.
    #[arg(long, global = true, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable ANSI colours (also honoured through `NO_COLOR`).
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a painted or generated board from start to end.
    Solve(SolveArgs),
    /// Generate a maze between two cells and print it.
    Maze(MazeArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let global = GlobalOptions {
        size: cli.size,
        format: cli.format,
        no_color: cli.no_color,
    };

    match &cli.command {
        Command::Solve(args) => handle_solve(args, &global),
        Command::Maze(args) => handle_maze(args, &global),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
