//! Scripted hall calls, loaded from CSV.
//!
//! # CSV format
//!
//! One row per call.  `people` may be left empty (defaults to 1).
//!
//! ```csv
//! tick,floor,direction,people
//! 0,1,up,3
//! 0,9,down,
//! 4,5,up,2
//! ```
//!
//! `direction` is `up` or `down` (case-insensitive).

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Heading, Tick};

use crate::{SimError, SimResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    tick:      u64,
    floor:     i32,
    direction: String,
    #[serde(default)]
    people:    Option<u32>,
}

// ── CallScript ────────────────────────────────────────────────────────────────

/// One hall call to place at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedCall {
    pub floor:   i32,
    pub heading: Heading,
    pub people:  u32,
}

/// Calls keyed by the tick they are placed at.  Calls for the same tick keep
/// file order.
#[derive(Debug, Default)]
pub struct CallScript {
    inner: BTreeMap<Tick, Vec<ScriptedCall>>,
    /// Cached total call count for O(1) `len()`.
    total: usize,
}

impl CallScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tick: Tick, call: ScriptedCall) {
        self.inner.entry(tick).or_default().push(call);
        self.total += 1;
    }

    /// Remove and return the calls for exactly `tick` (empty if none).
    pub fn drain_tick(&mut self, tick: Tick) -> Vec<ScriptedCall> {
        let calls = self.inner.remove(&tick).unwrap_or_default();
        self.total -= calls.len();
        calls
    }

    /// The earliest tick with a pending call.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// The latest tick with a pending call.
    pub fn last_tick(&self) -> Option<Tick> {
        self.inner.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a call script from a CSV file.
pub fn load_script_csv(path: &Path) -> SimResult<CallScript> {
    let file = std::fs::File::open(path)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
pub fn load_script_reader<R: Read>(reader: R) -> SimResult<CallScript> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut script = CallScript::new();

    for result in csv_reader.deserialize::<CallRecord>() {
        let row = result.map_err(|e| SimError::Parse(e.to_string()))?;
        script.push(
            Tick(row.tick),
            ScriptedCall {
                floor:   row.floor,
                heading: parse_heading(&row.direction)?,
                people:  row.people.unwrap_or(1),
            },
        );
    }
    Ok(script)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_heading(s: &str) -> SimResult<Heading> {
    match s.trim().to_ascii_lowercase().as_str() {
        "up"   => Ok(Heading::Up),
        "down" => Ok(Heading::Down),
        other  => Err(SimError::Parse(format!(
            "invalid direction {other:?}: expected \"up\" or \"down\""
        ))),
    }
}
