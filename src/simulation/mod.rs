pub mod engine;

pub use engine::{HaltReason, RunLimits, RunSummary, Setup, Simulation, Status, Ticket, TickEvent};
