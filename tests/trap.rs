use assert_cmd::prelude::*;
use predicates::str::contains;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const BIN: &str = "astar_snake";

/// Body ring around the food, head just outside heading into its own neck
const ENCLOSED: &str = "\
# food at (3,3) is walled in by the body
grid 7 7
body 1,2 2,2 3,2 4,2 4,3 4,4 3,4 2,4 2,3
food 3,3
heading right
";

#[test]
fn enclosed_food_falls_back_then_collides() -> Result<(), Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    write!(f, "{}", ENCLOSED)?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args(["--scenario", f.path().to_str().unwrap(), "--seed", "7"]);

    cmd.assert()
        .success()
        .stdout(contains("no path from (1, 2) to (3, 3)"))
        .stdout(contains("holding heading right"))
        .stdout(contains("ticks=1"))
        .stdout(contains("fallbacks=1"))
        .stdout(contains("status=collided(body)"));

    Ok(())
}

#[test]
fn restart_replays_the_same_trap() -> Result<(), Box<dyn std::error::Error>> {
    let mut f = NamedTempFile::new()?;
    write!(f, "{}", ENCLOSED)?;

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.args([
        "--scenario", f.path().to_str().unwrap(),
        "--runs", "2",
        "--suppress-events",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("Run 2 Latency"))
        .stdout(contains("length=9"))
        .stdout(contains("status=collided(body)"));

    Ok(())
}
