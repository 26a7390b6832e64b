use astar_snake::prelude::*;
use astar_snake::simulation::{RunLimits, Setup};
use astar_snake::surface::{draw, TextSurface};
use astar_snake::world::parse_scenario;
use clap::Parser;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Scenario file or fresh centred world
    let setup = match &args.scenario {
        Some(path) => Setup::Scenario(parse_scenario(path)?),
        None => {
            let size = args.grid_size()?;
            Setup::Fresh {
                cols: size.cols,
                rows: size.rows,
            }
        }
    };

    let mut sim = Simulation::new(setup, rng, args.suppress_events);
    let limits = RunLimits {
        max_ticks: args.max_ticks,
        tick_interval: args.tick_interval(),
    };

    for run in 1..=args.runs {
        sim.start()?;
        let mut surface = sim.world().map(TextSurface::for_world);

        let summary = sim.run(limits, |world| {
            if let (true, Some(surface)) = (args.watch, surface.as_mut()) {
                draw(world, surface);
                println!("{}", surface);
            }
        });

        sim.print_summary(run, &summary);
    }

    Ok(())
}
