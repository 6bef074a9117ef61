//! Travel time along a one-way circular route.
//!
//! Variables:
//!   legs[(a, b)] = minutes from stop a to its successor b
//!   walk         = first, next(first), next(next(first)), ...
//!
//! Equation:
//!   eta(first, second) = sum of legs on walk until second is reached
//!
//! The walk stops with `UNREACHABLE` when a stop has no outgoing leg or
//! when it would re-enter a stop it already passed.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RouteError;

/// Returned by [`eta`] when `second` cannot be reached from `first`.
pub const UNREACHABLE: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub travel_time_mins: u64,
}

/// `(origin, destination)` to the leg between them.
pub type RouteMap = BTreeMap<(String, String), Leg>;

#[derive(Debug, Clone, Deserialize)]
struct LegRecord {
    from: String,
    to: String,
    travel_time_mins: u64,
}

/// Parse `[{"from": "a", "to": "b", "travel_time_mins": 5}, ...]`.
pub fn route_map_from_json(json: &str) -> Result<RouteMap, RouteError> {
    let records: Vec<LegRecord> = serde_json::from_str(json)?;
    let mut map = RouteMap::new();
    for LegRecord { from, to, travel_time_mins } in records {
        if map.contains_key(&(from.clone(), to.clone())) {
            return Err(RouteError::DuplicateLeg { from, to });
        }
        map.insert((from, to), Leg { travel_time_mins });
    }
    Ok(map)
}

/// Minutes from `first_stop` to `second_stop`, or [`UNREACHABLE`].
pub fn eta(first_stop: &str, second_stop: &str, route_map: &RouteMap) -> i64 {
    travel_time(first_stop, second_stop, route_map)
        .and_then(|mins| i64::try_from(mins).ok())
        .unwrap_or(UNREACHABLE)
}

pub fn travel_time(first_stop: &str, second_stop: &str, route_map: &RouteMap) -> Option<u64> {
    if first_stop == second_stop {
        return Some(0);
    }

    let mut visited = BTreeSet::new();
    let mut current = first_stop;
    let mut total = 0u64;

    while current != second_stop {
        visited.insert(current);
        let Some((next, leg)) = next_leg(current, route_map) else {
            debug!(stop = current, "no outgoing leg from stop");
            return None;
        };
        if visited.contains(next) {
            debug!(stop = current, target = second_stop, "route closed without reaching target");
            return None;
        }
        total = total.saturating_add(leg.travel_time_mins);
        current = next;
    }
    Some(total)
}

fn next_leg<'a>(stop: &str, route_map: &'a RouteMap) -> Option<(&'a str, &'a Leg)> {
    // keys sort by origin first, so the first key at or after (stop, "")
    // is the stop's leg if it has one
    route_map
        .range((stop.to_string(), String::new())..)
        .next()
        .filter(|((origin, _), _)| origin == stop)
        .map(|((_, destination), leg)| (destination.as_str(), leg))
}
