//! Route a layout file from `S` to `G` and print the result.
//!
//! ```text
//! cargo run --bin route -- demos/maps/field.txt --scatter 12 --seed 7
//! ```
//!
//! Exits with status 1 when no route exists. Set `RUST_LOG=debug` to see
//! search and placement decisions.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilepath_core::{Connectivity, CornerRule, Layout, OccupantId, Point, Vec2};
use tilepath_demos::{PlacementError, RoutePlanner};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Movement {
    /// Eight directions.
    Diagonal,
    /// Four directions.
    Cardinal,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Corners {
    /// A diagonal needs its horizontal neighbor walkable.
    Horizontal,
    /// A diagonal needs both orthogonal neighbors walkable.
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "route", about = "Find a route across an ASCII layout")]
struct Args {
    /// Layout file: `.` open, `#` wall, `S` start, `G` goal.
    layout: PathBuf,

    #[arg(long, value_enum, default_value_t = Movement::Diagonal)]
    movement: Movement,

    #[arg(long, value_enum, default_value_t = Corners::Horizontal)]
    corners: Corners,

    /// Try to place this many random walls before routing. Placements that
    /// would seal the route are refused.
    #[arg(long, default_value_t = 0)]
    scatter: usize,

    /// Seed for `--scatter`; random when absent.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 1.0)]
    cell_size: f32,

    /// Center the grid on the world origin.
    #[arg(long)]
    centered: bool,

    /// Also print world-space waypoints.
    #[arg(long)]
    waypoints: bool,
}

impl Args {
    fn connectivity(&self) -> Connectivity {
        match (self.movement, self.corners) {
            (Movement::Cardinal, _) => Connectivity::Cardinal,
            (Movement::Diagonal, Corners::Horizontal) => {
                Connectivity::Diagonal(CornerRule::HorizontalGate)
            }
            (Movement::Diagonal, Corners::Both) => Connectivity::Diagonal(CornerRule::BothGates),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.layout)
        .with_context(|| format!("reading {}", args.layout.display()))?;
    let layout = parse_layout(&text, &args)
        .with_context(|| format!("parsing {}", args.layout.display()))?;
    let mut planner = RoutePlanner::from_layout(layout.clone(), args.connectivity())?;

    if args.scatter > 0 {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let (placed, refused) = scatter(&mut planner, &mut rng, args.scatter)?;
        println!("placed {placed} walls, refused {refused}");
    }

    let shown = Layout {
        grid: planner.grid().clone(),
        ..layout
    };
    let Some(route) = planner.route()? else {
        print!("{}", shown.render(&[]));
        println!("no route");
        return Ok(ExitCode::from(1));
    };

    print!("{}", shown.render(route.path.cells()));
    println!("cost {} over {} steps", route.path.cost(), route.path.steps());
    if args.waypoints {
        for w in &route.waypoints {
            println!("  ({:.2}, {:.2})", w.x, w.y);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn parse_layout(text: &str, args: &Args) -> anyhow::Result<Layout> {
    let layout = Layout::parse_with(text, args.cell_size, Vec2::ZERO)?;
    if !args.centered {
        return Ok(layout);
    }
    // Re-parse with the origin shifted so the grid's center sits at (0, 0).
    let size = Vec2::new(layout.grid.width() as f32, layout.grid.height() as f32);
    let origin = -0.5 * size * args.cell_size;
    Ok(Layout::parse_with(text, args.cell_size, origin)?)
}

/// Attempt `count` random placements; returns how many were placed and how
/// many were refused for sealing the route.
fn scatter(
    planner: &mut RoutePlanner,
    rng: &mut StdRng,
    count: usize,
) -> anyhow::Result<(usize, usize)> {
    let (w, h) = (planner.grid().width(), planner.grid().height());
    let mut placed = 0;
    let mut refused = 0;
    for id in 0..count {
        let cell = Point::new(rng.random_range(0..w), rng.random_range(0..h));
        match planner.place(cell, OccupantId(id as u32)) {
            Ok(_) => placed += 1,
            Err(PlacementError::SealsRoute(_)) => refused += 1,
            Err(PlacementError::Taken(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok((placed, refused))
}
