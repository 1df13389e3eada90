//! JSON path-guide asset loading.
//!
//! # Asset format
//!
//! ```text
//! hops:      { "x,y": { "x,y": "NORTH,EAST" } }      (or ["NORTH", "EAST"])
//! distances: { "x,y": { "x,y": 7 } }                  (optional, separate file)
//! ```
//!
//! Outer key is the origin cell, inner key the destination.  Candidate order
//! is preserved exactly.  An empty direction string is a valid entry with no
//! candidates.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::info;

use sm_core::{Direction, Point};

use crate::{GuideTable, GuideTableBuilder, SpatialError, SpatialResult};

type Nested<V> = FxHashMap<String, FxHashMap<String, V>>;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHops {
    Joined(String),
    List(Vec<String>),
}

/// Read the hops asset at `hops_path` and, if given, the distance asset.
pub fn load_guide(hops_path: &Path, distances_path: Option<&Path>) -> SpatialResult<GuideTable> {
    let hops = fs::read_to_string(hops_path)?;
    let distances = distances_path.map(fs::read_to_string).transpose()?;
    let table = GuideTable::from_json(&hops, distances.as_deref())?;
    info!(
        path = %hops_path.display(),
        pairs = table.len(),
        distances = table.distance_count(),
        "path guide loaded"
    );
    Ok(table)
}

impl GuideTable {
    /// Parse the guide from in-memory JSON text.
    pub fn from_json(hops: &str, distances: Option<&str>) -> SpatialResult<GuideTable> {
        let mut builder = GuideTableBuilder::new();

        let raw: Nested<RawHops> = serde_json::from_str(hops)?;
        for (from_key, row) in &raw {
            let from = parse_point(from_key)?;
            for (to_key, entry) in row {
                let to = parse_point(to_key)?;
                let dirs = match entry {
                    RawHops::Joined(s) => parse_joined(s)?,
                    RawHops::List(items) => items
                        .iter()
                        .map(|s| parse_direction(s))
                        .collect::<SpatialResult<Vec<_>>>()?,
                };
                builder.hops(from, to, &dirs);
            }
        }

        if let Some(text) = distances {
            let raw: Nested<u32> = serde_json::from_str(text)?;
            for (from_key, row) in &raw {
                let from = parse_point(from_key)?;
                for (to_key, &d) in row {
                    builder.distance(from, parse_point(to_key)?, d);
                }
            }
        }

        Ok(builder.build())
    }
}

fn parse_point(key: &str) -> SpatialResult<Point> {
    key.parse().map_err(|e: sm_core::CoreError| SpatialError::Parse {
        entry:  key.to_owned(),
        reason: e.to_string(),
    })
}

fn parse_direction(name: &str) -> SpatialResult<Direction> {
    name.parse().map_err(|e: sm_core::CoreError| SpatialError::Parse {
        entry:  name.to_owned(),
        reason: e.to_string(),
    })
}

fn parse_joined(joined: &str) -> SpatialResult<Vec<Direction>> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_direction)
        .collect()
}
