use crate::direction::Direction;
use crate::error::{Result, SnakeError};
use crate::world::cell::Cell;
use crate::world::world::GridWorld;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Load a scenario file.
///
/// ```text
/// # comment
/// grid 10 10
/// body 5,5 5,6 5,7
/// food 5,2
/// heading up
/// ```
///
/// `grid`, `body` and `food` are required; `heading` defaults to `still`.
pub fn parse_scenario(path: &str) -> Result<GridWorld> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut builder = ScenarioBuilder::default();

    for line in reader.lines() {
        builder.feed(&line?)?;
    }

    builder.finish()
}

/// Parse a scenario held in memory
pub fn parse_scenario_str(src: &str) -> Result<GridWorld> {
    let mut builder = ScenarioBuilder::default();
    for line in src.lines() {
        builder.feed(line)?;
    }
    builder.finish()
}

#[derive(Default)]
struct ScenarioBuilder {
    grid: Option<(u32, u32)>,
    body: Option<Vec<Cell>>,
    food: Option<Cell>,
    heading: Option<Direction>,
}

impl ScenarioBuilder {
    fn feed(&mut self, raw: &str) -> Result<()> {
        let line = match raw.find('#') {
            Some(hash) => &raw[..hash],
            None => raw,
        }
        .trim();
        if line.is_empty() {
            return Ok(());
        }

        let mut parts = line.split_whitespace();
        let keyword = parts
            .next()
            .ok_or_else(|| SnakeError::InvalidLine(raw.to_string()))?;
        let rest: Vec<&str> = parts.collect();

        match keyword {
            "grid" => {
                let &[cols, rows] = rest.as_slice() else {
                    return Err(SnakeError::InvalidLine(format!("expected `grid <cols> <rows>`: {}", raw)));
                };
                self.grid = Some((parse_number(cols, raw)?, parse_number(rows, raw)?));
            }
            "body" => {
                let cells = rest
                    .iter()
                    .map(|token| parse_cell(token, raw))
                    .collect::<Result<Vec<_>>>()?;
                self.body = Some(cells);
            }
            "food" => {
                let &[token] = rest.as_slice() else {
                    return Err(SnakeError::InvalidLine(format!("expected `food <x>,<y>`: {}", raw)));
                };
                self.food = Some(parse_cell(token, raw)?);
            }
            "heading" => {
                let &[token] = rest.as_slice() else {
                    return Err(SnakeError::InvalidLine(format!("expected `heading <direction>`: {}", raw)));
                };
                self.heading = Some(token.parse::<Direction>()?);
            }
            other => {
                return Err(SnakeError::InvalidLine(format!("unknown keyword `{}`", other)));
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<GridWorld> {
        let (cols, rows) = self
            .grid
            .ok_or_else(|| SnakeError::InvalidLine("missing `grid` line".to_string()))?;
        let body = self
            .body
            .ok_or_else(|| SnakeError::InvalidLine("missing `body` line".to_string()))?;
        let food = self
            .food
            .ok_or_else(|| SnakeError::InvalidLine("missing `food` line".to_string()))?;

        GridWorld::from_parts(cols, rows, body, food, self.heading.unwrap_or(Direction::Still))
    }
}

fn parse_number(token: &str, line: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| SnakeError::InvalidLine(format!("bad number `{}` in: {}", token, line)))
}

fn parse_cell(token: &str, line: &str) -> Result<Cell> {
    let (x, y) = token
        .split_once(',')
        .ok_or_else(|| SnakeError::InvalidLine(format!("bad cell `{}` in: {}", token, line)))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|_| SnakeError::InvalidLine(format!("bad cell `{}` in: {}", token, line)))
    };
    Ok(Cell::new(coord(x)?, coord(y)?))
}
