//! mazeviz: animate a grid maze search in the terminal.

mod render;

use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use mazeviz_core::CellKind;
use mazeviz_gen::{GenConfig, MazeKind};
use mazeviz_paths::{Algorithm, Observer, SearchOptions, Solver, StepEvent};

use render::Animator;

#[derive(Parser, Debug)]
#[command(name = "mazeviz")]
#[command(author, version, about = "Watch BFS, DFS and A* solve a grid maze")]
struct Cli {
    /// Search algorithm: BFS, DFS or A*
    #[arg(short, long, default_value_t = Algorithm::Bfs)]
    algorithm: Algorithm,

    /// Maze generator: fixed, backtracker or density
    #[arg(short, long, default_value_t = MazeKind::Fixed)]
    maze: MazeKind,

    /// Number of rows (ignored by the fixed maze)
    #[arg(short, long, default_value_t = 21)]
    rows: usize,

    /// Number of columns (ignored by the fixed maze)
    #[arg(short, long, default_value_t = 21)]
    cols: usize,

    /// Wall probability for the density generator
    #[arg(short, long, default_value_t = 0.3)]
    density: f64,

    /// Seed for reproducible mazes
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pause after each step, in milliseconds
    #[arg(long, default_value_t = 20)]
    delay_ms: u64,

    /// Also animate the cells the search expands
    #[arg(short, long)]
    explored: bool,

    /// Print the final grid instead of animating
    #[arg(long)]
    no_animate: bool,
}

impl Cli {
    fn gen_config(&self) -> GenConfig {
        GenConfig {
            kind: self.maze,
            rows: self.rows,
            cols: self.cols,
            wall_density: self.density,
            seed: self.seed,
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let grid = cli.gen_config().generate()?.reset_visualization();
    let terminals = grid.locate_terminals()?;
    log::info!(
        "{} maze {}x{}, {} -> {}",
        cli.maze,
        grid.rows(),
        grid.cols(),
        terminals.start,
        terminals.end
    );

    let solver = Solver::new(SearchOptions {
        emit_explored: cli.explored,
    });
    let began = Instant::now();

    let (result, painted) = if cli.no_animate {
        let mut painted = grid.clone();
        let mut paint_err = None;
        let result = solver.search(
            cli.algorithm,
            &grid,
            terminals.start,
            terminals.end,
            |e: StepEvent| {
                if let Err(err) = e.paint(&mut painted) {
                    paint_err.get_or_insert(err);
                }
            },
        )?;
        if let Some(err) = paint_err {
            return Err(err.into());
        }
        println!("{painted}");
        (result, painted)
    } else {
        let mut stdout = io::stdout();
        render::draw_grid(&mut stdout, &grid)?;
        let mut anim = Animator::new(
            io::stdout(),
            grid.clone(),
            Duration::from_millis(cli.delay_ms),
        );
        let result = solver.search(
            cli.algorithm,
            &grid,
            terminals.start,
            terminals.end,
            |e: StepEvent| anim.observe(e),
        )?;
        let painted = anim.finish()?;
        render::park_cursor(&mut stdout, &painted)?;
        (result, painted)
    };

    log::debug!(
        "{} path cells, {} explored",
        painted.count(CellKind::Path),
        painted.count(CellKind::Explored)
    );
    println!(
        "{}: found={} steps={} elapsed={:.1?}",
        cli.algorithm,
        result.found,
        result.steps,
        began.elapsed()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mazeviz: {e}");
            ExitCode::FAILURE
        }
    }
}
