use crate::error::Result;
use crate::planner::{PathPlanner, Plan};
use crate::world::{Collision, GridWorld, Outcome};
use colored::Colorize;
use std::time::{Duration, Instant};

/// How each run's world is built
#[derive(Clone, Debug)]
pub enum Setup {
    /// One-cell snake at the centre, random food
    Fresh { cols: u32, rows: u32 },
    /// Restart from a fixed layout every time
    Scenario(GridWorld),
}

/// Why a run stopped for good
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltReason {
    Collided(Collision),
    /// Nowhere left to put food. Terminal: the body covers every cell and the
    /// food stays where it was eaten, under the head.
    BoardFull,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    Running,
    Halted(HaltReason),
}

impl Status {
    pub fn label(self) -> String {
        match self {
            Status::NotStarted => "not-started".to_string(),
            Status::Running => "running".to_string(),
            Status::Halted(HaltReason::Collided(kind)) => format!("collided({})", kind.as_str()),
            Status::Halted(HaltReason::BoardFull) => "board-full".to_string(),
        }
    }
}

/// Permission to tick one particular run. `start` invalidates older tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

/// What one tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    Advanced { plan: Plan, outcome: Outcome },
    Halted { plan: Plan, reason: HaltReason },
    /// Not running; nothing changed
    Idle,
    /// Ticket from an earlier run; nothing changed
    Stale,
}

/// Limits and pacing for [`Simulation::run`]
#[derive(Clone, Copy, Debug)]
pub struct RunLimits {
    pub max_ticks: u64,
    pub tick_interval: Duration,
}

/// Totals for one run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub food_eaten: u64,
    pub fallbacks: u64,
    pub length: usize,
    pub status: Status,
    pub elapsed: Duration,
}

/// Tick driver: owns the single world, the planner and the RNG
pub struct Simulation {
    setup: Setup,
    rng: fastrand::Rng,
    planner: PathPlanner,
    world: Option<GridWorld>,
    status: Status,
    epoch: u64,
    ticks: u64,
    food_eaten: u64,
    fallbacks: u64,
    suppress_events: bool,
}

impl Simulation {
    /// Create a simulation in the `NotStarted` state
    pub fn new(setup: Setup, rng: fastrand::Rng, suppress_events: bool) -> Self {
        Self {
            setup,
            rng,
            // Sized by `start` once the world's dimensions are validated
            planner: PathPlanner::new(0, 0),
            world: None,
            status: Status::NotStarted,
            epoch: 0,
            ticks: 0,
            food_eaten: 0,
            fallbacks: 0,
            suppress_events,
        }
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Current world, if a run has started
    #[inline]
    pub fn world(&self) -> Option<&GridWorld> {
        self.world.as_ref()
    }

    /// Ticket for the current run
    #[inline]
    pub fn ticket(&self) -> Ticket {
        Ticket { epoch: self.epoch }
    }

    /// Begin a new run, discarding the old world wholesale.
    ///
    /// Tickets handed out before this call go stale first, so a tick
    /// scheduled for the previous run cannot touch the new world.
    pub fn start(&mut self) -> Result<Ticket> {
        self.epoch += 1;
        self.world = None;
        self.status = Status::NotStarted;
        self.ticks = 0;
        self.food_eaten = 0;
        self.fallbacks = 0;

        let world = match &self.setup {
            Setup::Fresh { cols, rows } => GridWorld::new(*cols, *rows, &mut self.rng)?,
            Setup::Scenario(world) => world.clone(),
        };
        self.planner.fit(&world);
        self.log_start(&world);
        self.world = Some(world);
        self.status = Status::Running;
        Ok(self.ticket())
    }

    /// Plan, move, and handle the outcome
    pub fn tick(&mut self, ticket: Ticket) -> TickEvent {
        if ticket.epoch != self.epoch {
            return TickEvent::Stale;
        }
        if self.status != Status::Running {
            return TickEvent::Idle;
        }
        let Some(world) = self.world.as_mut() else {
            return TickEvent::Idle;
        };

        let plan = self.planner.plan(world);
        if plan.is_fallback() {
            self.fallbacks += 1;
            log_fallback(self.suppress_events, world, plan.direction().as_str());
        }
        world.set_last_direction(plan.direction());
        let outcome = world.advance(plan.direction());
        self.ticks += 1;

        let halt = match outcome {
            Outcome::Moved => None,
            Outcome::Ate => {
                self.food_eaten += 1;
                match world.relocate_food(&mut self.rng) {
                    Ok(_) => {
                        log_meal(self.suppress_events, world);
                        None
                    }
                    Err(_) => Some(HaltReason::BoardFull),
                }
            }
            Outcome::Collided(kind) => Some(HaltReason::Collided(kind)),
        };

        match halt {
            Some(reason) => {
                log_halt(self.suppress_events, world, reason, self.ticks);
                self.status = Status::Halted(reason);
                TickEvent::Halted { plan, reason }
            }
            None => TickEvent::Advanced { plan, outcome },
        }
    }

    /// Tick at a fixed cadence until the run halts or `max_ticks` is reached.
    /// `on_tick` sees the world after every tick.
    pub fn run<F>(&mut self, limits: RunLimits, mut on_tick: F) -> RunSummary
    where
        F: FnMut(&GridWorld),
    {
        let ticket = self.ticket();
        let sim_start = Instant::now();
        let mut cadence = Cadence::new(limits.tick_interval, sim_start);

        while self.status == Status::Running && self.ticks < limits.max_ticks {
            match self.tick(ticket) {
                TickEvent::Stale | TickEvent::Idle => break,
                TickEvent::Advanced { .. } | TickEvent::Halted { .. } => {}
            }
            if let Some(world) = self.world.as_ref() {
                on_tick(world);
            }
            if !limits.tick_interval.is_zero() && self.status == Status::Running {
                let wait = cadence.wait_from(Instant::now());
                if !wait.is_zero() {
                    std::thread::sleep(wait);
                }
            }
        }

        self.summary(sim_start.elapsed())
    }

    /// Totals for the current run
    pub fn summary(&self, elapsed: Duration) -> RunSummary {
        RunSummary {
            ticks: self.ticks,
            food_eaten: self.food_eaten,
            fallbacks: self.fallbacks,
            length: self.world.as_ref().map_or(0, |w| w.snake().len()),
            status: self.status,
            elapsed,
        }
    }

    /// Print the end-of-run summary line
    pub fn print_summary(&self, run: u32, summary: &RunSummary) {
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            format!("⏱️  Run {} Latency:", run).green().bold(),
            summary.elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("ticks={}", summary.ticks).cyan(),
            format!("length={}", summary.length).cyan(),
            format!("eaten={}", summary.food_eaten).cyan(),
            format!("fallbacks={}", summary.fallbacks).cyan(),
            "|".dimmed(),
            format!("status={}", summary.status.label()).yellow(),
        );
    }

    fn log_start(&self, world: &GridWorld) {
        if self.suppress_events {
            return;
        }
        println!(
            "{} {} {}",
            "🐍".green(),
            format!("run started on {}x{} grid,", world.cols(), world.rows()).green(),
            format!("head {} food {}", world.head(), world.food()).yellow()
        );
    }
}

/// Fixed-rate tick schedule: deadlines advance by `interval` from the run's
/// start, so time spent inside a tick is not added on top of the wait.
struct Cadence {
    interval: Duration,
    next: Instant,
}

impl Cadence {
    fn new(interval: Duration, start: Instant) -> Self {
        Self { interval, next: start }
    }

    /// Time left until the next deadline. A tick that overran resets the
    /// schedule to `now` instead of firing a burst of catch-up ticks.
    fn wait_from(&mut self, now: Instant) -> Duration {
        self.next += self.interval;
        if self.next > now {
            self.next - now
        } else {
            self.next = now;
            Duration::ZERO
        }
    }
}

#[inline]
fn log_meal(suppress: bool, world: &GridWorld) {
    if suppress {
        return;
    }
    println!(
        "{} {} {}",
        "🍎".red(),
        format!("ate at {}, length now {};", world.head(), world.snake().len()).bright_green(),
        format!("new food at {}", world.food()).yellow()
    );
}

#[inline]
fn log_fallback(suppress: bool, world: &GridWorld, heading: &str) {
    if suppress {
        return;
    }
    println!(
        "{} {} {}",
        "🧭".yellow(),
        format!("no path from {} to {},", world.head(), world.food()).yellow(),
        format!("holding heading {}", heading).bright_yellow()
    );
}

#[inline]
fn log_halt(suppress: bool, world: &GridWorld, reason: HaltReason, ticks: u64) {
    if suppress {
        return;
    }
    match reason {
        HaltReason::Collided(kind) => println!(
            "{} {} {}",
            "💥".red(),
            format!("hit the {} heading {} from {}", kind.as_str(), world.last_direction().as_str(), world.head()).bright_red(),
            format!("after {} ticks", ticks).yellow()
        ),
        HaltReason::BoardFull => println!(
            "{} {} {}",
            "🏆".yellow(),
            "board filled".bright_green().bold(),
            format!("after {} ticks", ticks).yellow()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::error::SnakeError;
    use crate::world::{parse_scenario_str, Cell};

    fn scenario(src: &str) -> Simulation {
        let world = parse_scenario_str(src).expect("valid scenario");
        Simulation::new(Setup::Scenario(world), fastrand::Rng::with_seed(11), true)
    }

    fn limits(max_ticks: u64) -> RunLimits {
        RunLimits {
            max_ticks,
            tick_interval: Duration::ZERO,
        }
    }

    const ENCLOSED: &str = "grid 7 7\n\
        body 1,2 2,2 3,2 4,2 4,3 4,4 3,4 2,4 2,3\n\
        food 3,3\n\
        heading right\n";

    #[test]
    fn test_not_started_until_start() {
        let mut sim = Simulation::new(Setup::Fresh { cols: 10, rows: 10 }, fastrand::Rng::with_seed(1), true);

        assert_eq!(sim.status(), Status::NotStarted);
        assert!(sim.world().is_none());
        assert_eq!(sim.tick(sim.ticket()), TickEvent::Idle);

        sim.start().unwrap();
        assert_eq!(sim.status(), Status::Running);
        assert_eq!(sim.world().unwrap().head(), Cell::new(5, 5));
    }

    #[test]
    fn test_three_ticks_to_food() {
        let mut sim = scenario("grid 10 10\nbody 5,5\nfood 5,2\n");
        let ticket = sim.start().unwrap();

        let outcomes: Vec<TickEvent> = (0..3).map(|_| sim.tick(ticket)).collect();
        let up = Plan::Path {
            direction: Direction::Up,
            steps: 3,
        };
        assert_eq!(outcomes[0], TickEvent::Advanced { plan: up, outcome: Outcome::Moved });
        assert!(matches!(outcomes[1], TickEvent::Advanced { outcome: Outcome::Moved, .. }));
        assert!(matches!(outcomes[2], TickEvent::Advanced { outcome: Outcome::Ate, .. }));

        let world = sim.world().unwrap();
        assert_eq!(world.head(), Cell::new(5, 2));
        assert_eq!(world.snake().len(), 2);
        assert_eq!(world.last_direction(), Direction::Up);
        assert!(!world.is_occupied(world.food(), false));
    }

    #[test]
    fn test_enclosed_food_falls_back_and_halts() {
        let mut sim = scenario(ENCLOSED);
        let ticket = sim.start().unwrap();

        let event = sim.tick(ticket);
        assert_eq!(
            event,
            TickEvent::Halted {
                plan: Plan::Fallback(Direction::Right),
                reason: HaltReason::Collided(Collision::Body),
            }
        );
        assert_eq!(sim.status(), Status::Halted(HaltReason::Collided(Collision::Body)));
        assert_eq!(sim.world().unwrap().snake().len(), 9);

        // Halted is terminal for this run
        assert_eq!(sim.tick(ticket), TickEvent::Idle);
        assert_eq!(sim.summary(Duration::ZERO).fallbacks, 1);
    }

    #[test]
    fn test_restart_replaces_world_and_stales_old_ticket() {
        let mut sim = scenario(ENCLOSED);
        let old = sim.start().unwrap();
        sim.tick(old);
        assert!(matches!(sim.status(), Status::Halted(_)));

        let fresh = sim.start().unwrap();
        assert_eq!(sim.status(), Status::Running);
        assert_eq!(sim.summary(Duration::ZERO).ticks, 0);

        assert_eq!(sim.tick(old), TickEvent::Stale);
        assert_eq!(sim.status(), Status::Running);
        assert!(matches!(sim.tick(fresh), TickEvent::Halted { .. }));
    }

    #[test]
    fn test_board_full_halts() {
        let mut sim = scenario("grid 2 1\nbody 0,0\nfood 1,0\n");
        let ticket = sim.start().unwrap();

        assert!(matches!(
            sim.tick(ticket),
            TickEvent::Halted { reason: HaltReason::BoardFull, .. }
        ));
        assert_eq!(sim.summary(Duration::ZERO).food_eaten, 1);

        let world = sim.world().unwrap();
        assert_eq!(world.snake().len(), 2);
        assert!(world.free_cells().is_empty());
        assert_eq!(world.food(), world.head());
        assert_eq!(sim.tick(ticket), TickEvent::Idle);
    }

    #[test]
    fn test_run_respects_tick_cap() {
        let mut sim = Simulation::new(Setup::Fresh { cols: 12, rows: 12 }, fastrand::Rng::with_seed(5), true);
        sim.start().unwrap();

        let mut seen = 0u64;
        let summary = sim.run(limits(25), |_| seen += 1);

        assert!(summary.ticks <= 25);
        assert_eq!(seen, summary.ticks);
        if summary.status == Status::Running {
            assert_eq!(summary.ticks, 25);
        }
    }

    #[test]
    fn test_run_keeps_invariants() {
        let mut sim = Simulation::new(Setup::Fresh { cols: 9, rows: 7 }, fastrand::Rng::with_seed(77), true);
        sim.start().unwrap();

        let summary = sim.run(limits(5_000), |world| {
            let cells: Vec<Cell> = world.snake().segments().collect();
            for (i, a) in cells.iter().enumerate() {
                assert!(!cells[i + 1..].contains(a));
            }
            if world.snake().len() < (world.cols() * world.rows()) as usize {
                assert!(!world.is_occupied(world.food(), false));
            }
        });

        assert!(summary.food_eaten >= 1);
        assert_eq!(summary.length as u64, 1 + summary.food_eaten);
    }

    #[test]
    fn test_cadence_subtracts_tick_time() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;
        let mut cadence = Cadence::new(ms(50), t0);

        // Tick took 30ms: only the remaining 20ms is slept
        assert_eq!(cadence.wait_from(t0 + ms(30)), ms(20));
        // Next deadline is t0+100ms, not 50ms after the previous wake-up
        assert_eq!(cadence.wait_from(t0 + ms(60)), ms(40));
        // Overran the t0+150ms deadline: no sleep, schedule restarts from now
        assert_eq!(cadence.wait_from(t0 + ms(170)), Duration::ZERO);
        assert_eq!(cadence.wait_from(t0 + ms(180)), ms(40));
    }

    #[test]
    fn test_run_paces_ticks_at_interval() {
        let mut sim = scenario("grid 10 10\nbody 5,5\nfood 5,0\n");
        sim.start().unwrap();
        let interval = Duration::from_millis(15);

        let summary = sim.run(
            RunLimits {
                max_ticks: 4,
                tick_interval: interval,
            },
            |_| {},
        );

        assert_eq!(summary.ticks, 4);
        assert!(summary.elapsed >= interval * 4);
    }

    #[test]
    fn test_fresh_start_fails_on_single_cell_grid() {
        let mut sim = Simulation::new(Setup::Fresh { cols: 1, rows: 1 }, fastrand::Rng::with_seed(1), true);

        assert!(matches!(sim.start(), Err(SnakeError::GridFull)));
        assert_eq!(sim.status(), Status::NotStarted);
    }
}
