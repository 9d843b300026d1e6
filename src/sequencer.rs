//! Greedy stop sequencer.
//!
//! Nearest-neighbor with urgency weighting: from the current position, the
//! next stop is the unvisited one with the smallest
//! `distance * (1 + w_p / (priority + 1) + w_f * (1 - fill / 100))`.
//! Fuller and higher-priority bins are pulled forward, but distance
//! dominates. Greedy only: earlier choices are never revisited.

use serde::Deserialize;

use crate::geo::{GeoPoint, distance_km};
use crate::model::Stop;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    /// Multiplier on `1 / (priority + 1)`.
    pub priority_factor: f64,
    /// Multiplier on `1 - fill_level / 100`.
    pub fill_factor: f64,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            priority_factor: 0.5,
            fill_factor: 0.5,
        }
    }
}

/// Score of moving from `from` to `stop`. Lower is better.
pub fn score(from: GeoPoint, stop: &Stop, options: &ScoringOptions) -> f64 {
    let distance = distance_km(from, stop.location());
    let priority_weight = 1.0 / (f64::from(stop.priority()) + 1.0);
    let fill_weight = 1.0 - f64::from(stop.fill_level()) / 100.0;

    distance * (1.0 + options.priority_factor * priority_weight + options.fill_factor * fill_weight)
}

/// Orders `stops` into a tour starting from `depot`.
///
/// The result is a permutation of the input (same length, each stop once).
/// Candidates are considered in priority-then-fill descending order (stable
/// on input order); among equal scores the first candidate in that order
/// wins. The input slice is not modified.
pub fn sequence(stops: &[Stop], depot: GeoPoint, options: &ScoringOptions) -> Vec<Stop> {
    sequence_indices(stops, depot, options)
        .into_iter()
        .map(|index| stops[index].clone())
        .collect()
}

/// Same as [`sequence`] but returns indices into `stops`.
pub fn sequence_indices(stops: &[Stop], depot: GeoPoint, options: &ScoringOptions) -> Vec<usize> {
    let candidates = candidate_order(stops);
    let mut visited = vec![false; stops.len()];
    let mut tour = Vec::with_capacity(stops.len());
    let mut current = depot;

    while tour.len() < stops.len() {
        let mut best: Option<usize> = None;
        let mut best_score = f64::INFINITY;

        for &index in &candidates {
            if visited[index] {
                continue;
            }
            let candidate_score = score(current, &stops[index], options);
            // Strict comparison keeps the first candidate on ties. A NaN score
            // (garbage coordinates) never wins, so fall back to the first
            // unvisited candidate to keep the tour complete.
            if candidate_score < best_score || best.is_none() {
                if candidate_score < best_score {
                    best_score = candidate_score;
                }
                best = Some(index);
            }
        }

        // `best` is always set here: the loop guard ensures an unvisited stop.
        let Some(next) = best else { break };
        visited[next] = true;
        tour.push(next);
        current = stops[next].location();
    }

    tour
}

/// Indices of `stops` sorted by priority, then fill level, both descending.
fn candidate_order(stops: &[Stop]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..stops.len()).collect();
    order.sort_by(|&a, &b| {
        stops[b]
            .priority()
            .cmp(&stops[a].priority())
            .then_with(|| stops[b].fill_level().cmp(&stops[a].fill_level()))
    });
    order
}
