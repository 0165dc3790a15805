use crate::colony::colony::{Anthill, Colony};
use crate::error::ParseError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const START_MARKER: &str = "##start";
const END_MARKER: &str = "##end";

/// Parse an anthill from a file path
pub fn parse_anthill(path: impl AsRef<Path>) -> Result<Anthill, ParseError> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(64 * 1024, file);
    parse_lines(reader.lines())
}

/// Parse an anthill directly from an in-memory string
pub fn parse_anthill_from_str(src: &str) -> Result<Anthill, ParseError> {
    parse_lines(src.lines().map(|line| Ok(line.to_string())))
}

/// Markers waiting for their room line
#[derive(Default)]
struct Pending {
    start: bool,
    end: bool,
}

impl Pending {
    fn marker(&self) -> Option<&'static str> {
        if self.start {
            Some(START_MARKER)
        } else if self.end {
            Some(END_MARKER)
        } else {
            None
        }
    }
}

fn parse_lines<I>(lines: I) -> Result<Anthill, ParseError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut colony = Colony::new();
    let mut ants: Option<i64> = None;
    let mut start: Option<u32> = None;
    let mut end: Option<u32> = None;
    let mut pending = Pending::default();

    for (idx, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim();
        let line_no = idx + 1;
        if line.is_empty() {
            continue;
        }

        if ants.is_none() {
            if line.starts_with('#') {
                continue;
            }
            let count = line
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidAntCount(line.to_string()))?;
            ants = Some(count);
            continue;
        }

        if line == START_MARKER || line == END_MARKER {
            let slot = if line == START_MARKER {
                &mut pending.start
            } else {
                &mut pending.end
            };
            if *slot {
                return Err(ParseError::DanglingMarker(line.to_string()));
            }
            *slot = true;
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [name, x, y] => {
                validate_room(line_no, name, x, y)?;
                if colony.room_id(name).is_some() {
                    return Err(ParseError::DuplicateRoom(name.to_string()));
                }
                let id = colony.add_room(name);
                if pending.start {
                    set_once(&mut start, id, line_no, "start")?;
                }
                if pending.end {
                    set_once(&mut end, id, line_no, "end")?;
                }
                pending = Pending::default();
            }
            [tunnel] if tunnel.contains('-') => {
                if let Some(marker) = pending.marker() {
                    return Err(ParseError::DanglingMarker(marker.to_string()));
                }
                let (a, b) = tunnel.split_once('-').ok_or_else(|| ParseError::InvalidLine {
                    line: line_no,
                    reason: format!("malformed tunnel `{}`", tunnel),
                })?;
                let a_id = colony
                    .room_id(a)
                    .ok_or_else(|| ParseError::UnknownRoom(a.to_string()))?;
                let b_id = colony
                    .room_id(b)
                    .ok_or_else(|| ParseError::UnknownRoom(b.to_string()))?;
                if a_id != b_id {
                    colony.link(a_id, b_id);
                }
            }
            _ => {
                return Err(ParseError::InvalidLine {
                    line: line_no,
                    reason: format!("expected `name x y` or `a-b`, got `{}`", line),
                })
            }
        }
    }

    if let Some(marker) = pending.marker() {
        return Err(ParseError::DanglingMarker(marker.to_string()));
    }
    let ants = ants.ok_or(ParseError::MissingAntCount)?;
    let start = start.ok_or(ParseError::MissingStart)?;
    let end = end.ok_or(ParseError::MissingEnd)?;

    Ok(Anthill {
        colony,
        start,
        end,
        ants,
    })
}

fn validate_room(line_no: usize, name: &str, x: &str, y: &str) -> Result<(), ParseError> {
    if name.starts_with('L') || name.contains('-') {
        return Err(ParseError::InvalidLine {
            line: line_no,
            reason: format!("invalid room name `{}`", name),
        });
    }
    if x.parse::<i64>().is_err() || y.parse::<i64>().is_err() {
        return Err(ParseError::InvalidLine {
            line: line_no,
            reason: format!("invalid coordinates for room `{}`", name),
        });
    }
    Ok(())
}

fn set_once(slot: &mut Option<u32>, id: u32, line_no: usize, what: &str) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::InvalidLine {
            line: line_no,
            reason: format!("{} room declared twice", what),
        });
    }
    *slot = Some(id);
    Ok(())
}
