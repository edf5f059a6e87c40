//! Layout engine — force-directed node placement and node styling.
//!
//! Placement is a Fruchterman–Reingold spring simulation:
//!
//! 1. **Seeding**: every node gets a uniform random position in `[0, 1)²`
//!    from a `StdRng` seeded with the configured seed, in insertion order
//! 2. **Forces**: all pairs repel with `k² / d`; connected pairs attract
//!    with `w · d² / k`, where `k = sqrt(1 / n)` and `w` is the summed
//!    weight of both edge directions
//! 3. **Cooling**: each step moves a node by at most the temperature,
//!    which starts at a tenth of the initial extent and falls linearly
//! 4. **Rescaling**: the result is centred and scaled so the largest
//!    absolute coordinate equals `scale`
//!
//! The same graph (same nodes, edges and insertion order) with the same
//! seed always yields bit-identical coordinates. Running out of
//! iterations is not an error; the last positions are returned.

use crate::hubs::{DegreeMap, HubSet};
use protnhub_core::config::{LayoutConfig, StyleConfig};
use protnhub_core::error::{LayoutError, Result};
use protnhub_core::topology::InteractionTopology;
use protnhub_core::types::{NodeStyle, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Distances are clipped below this value to keep repulsion bounded.
const MIN_DISTANCE: f64 = 0.01;

/// Initial temperature as a fraction of the widest initial extent.
const INITIAL_TEMPERATURE_FRACTION: f64 = 0.1;

/// A node's computed position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEntry {
    pub name: String,
    pub position: Position,
}

/// Node name → position, in node insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    entries: Vec<LayoutEntry>,
    #[serde(skip)]
    lookup: HashMap<String, usize>,
    /// Simulation steps actually run.
    pub iterations: usize,
    /// Whether the displacement fell below tolerance before the budget ran out.
    pub converged: bool,
}

impl Layout {
    /// The layout of an edgeless graph: no positions at all.
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_positions(
        names: &[&str],
        positions: Vec<Position>,
        iterations: usize,
        converged: bool,
    ) -> Self {
        let entries: Vec<LayoutEntry> = names
            .iter()
            .zip(positions)
            .map(|(name, position)| LayoutEntry {
                name: name.to_string(),
                position,
            })
            .collect();
        let lookup = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        Self {
            entries,
            lookup,
            iterations,
            converged,
        }
    }

    pub fn get(&self, name: &str) -> Option<Position> {
        self.lookup.get(name).map(|&i| self.entries[i].position)
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<(Position, Position)> {
        let first = self.entries.first()?.position;
        Some(self.entries.iter().fold((first, first), |(lo, hi), e| {
            (
                Position::new(lo.x.min(e.position.x), lo.y.min(e.position.y)),
                Position::new(hi.x.max(e.position.x), hi.y.max(e.position.y)),
            )
        }))
    }
}

/// Compute node positions for `graph`.
///
/// Returns [`Layout::empty`] when the graph has no edges; callers present
/// that case as "no data" instead of laying out isolated singletons.
pub fn compute_layout(graph: &impl InteractionTopology, config: &LayoutConfig) -> Result<Layout> {
    config.validate()?;

    if !graph.has_edges() {
        debug!(nodes = graph.node_count(), "graph has no edges, skipping layout");
        return Ok(Layout::empty());
    }

    let names = graph.node_names();
    let n = names.len();
    if n == 1 {
        // Only a self-loop: nothing to balance
        return Ok(Layout::from_positions(&names, vec![config.center], 0, true));
    }

    let springs = spring_weights(graph, &names);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pos: Vec<[f64; 2]> = (0..n).map(|_| [rng.gen::<f64>(), rng.gen::<f64>()]).collect();

    let k = (1.0 / n as f64).sqrt();
    let mut temperature = initial_temperature(&pos);
    let cooling = temperature / (config.iterations as f64 + 1.0);
    let deadline = config
        .deadline_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));

    let mut iterations = 0;
    let mut converged = false;
    let mut displacement = vec![[0.0f64; 2]; n];

    while iterations < config.iterations {
        for d in displacement.iter_mut() {
            *d = [0.0, 0.0];
        }

        // Repulsion between every pair
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i][0] - pos[j][0];
                let dy = pos[i][1] - pos[j][1];
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let factor = k * k / (dist * dist);
                displacement[i][0] += dx * factor;
                displacement[i][1] += dy * factor;
                displacement[j][0] -= dx * factor;
                displacement[j][1] -= dy * factor;
            }
        }

        // Attraction along edges
        for &(i, j, weight) in &springs {
            let dx = pos[i][0] - pos[j][0];
            let dy = pos[i][1] - pos[j][1];
            let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let factor = weight * dist / k;
            displacement[i][0] -= dx * factor;
            displacement[i][1] -= dy * factor;
            displacement[j][0] += dx * factor;
            displacement[j][1] += dy * factor;
        }

        // Move each node by at most the current temperature
        let mut squared_moves = 0.0;
        for (p, d) in pos.iter_mut().zip(&displacement) {
            let mut length = (d[0] * d[0] + d[1] * d[1]).sqrt();
            if length < MIN_DISTANCE {
                length = 0.1;
            }
            let step = [d[0] * temperature / length, d[1] * temperature / length];
            p[0] += step[0];
            p[1] += step[1];
            squared_moves += step[0] * step[0] + step[1] * step[1];
        }

        temperature -= cooling;
        iterations += 1;

        if squared_moves.sqrt() / (n as f64) < config.tolerance {
            converged = true;
            break;
        }
        if deadline.is_some_and(|d| Instant::now() >= d) {
            warn!(iterations, "layout deadline reached");
            break;
        }
    }

    if !converged {
        warn!(
            iterations,
            nodes = n,
            "layout did not converge, returning best-effort positions"
        );
    }

    let positions = rescale(&pos, config.scale, config.center);
    for (name, p) in names.iter().zip(&positions) {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(LayoutError::NonFinite(name.to_string()).into());
        }
    }

    debug!(nodes = n, iterations, converged, "computed spring layout");
    Ok(Layout::from_positions(&names, positions, iterations, converged))
}

/// Symmetric spring weights as `(i, j, w)` with `i < j`, in first-seen
/// order. Self-loops exert no force and are dropped.
fn spring_weights(graph: &impl InteractionTopology, names: &[&str]) -> Vec<(usize, usize, f64)> {
    let index: HashMap<&str, usize> = names.iter().enumerate().map(|(i, n)| (*n, i)).collect();
    let mut slots: HashMap<(usize, usize), usize> = HashMap::new();
    let mut springs: Vec<(usize, usize, f64)> = Vec::new();

    for (source, target, data) in graph.all_edges() {
        let (Some(&a), Some(&b)) = (index.get(source), index.get(target)) else {
            continue;
        };
        if a == b {
            continue;
        }
        let key = (a.min(b), a.max(b));
        match slots.get(&key) {
            Some(&slot) => springs[slot].2 += data.weight,
            None => {
                slots.insert(key, springs.len());
                springs.push((key.0, key.1, data.weight));
            }
        }
    }
    springs
}

fn initial_temperature(pos: &[[f64; 2]]) -> f64 {
    let extent = |axis: usize| {
        let (lo, hi) = pos.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p[axis]), hi.max(p[axis]))
        });
        hi - lo
    };
    let widest = extent(0).max(extent(1));
    if widest > 0.0 {
        widest * INITIAL_TEMPERATURE_FRACTION
    } else {
        INITIAL_TEMPERATURE_FRACTION
    }
}

/// Centre on the mean, scale so the largest absolute coordinate equals
/// `scale`, then translate to `center`.
fn rescale(pos: &[[f64; 2]], scale: f64, center: Position) -> Vec<Position> {
    let n = pos.len() as f64;
    let mean_x = pos.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = pos.iter().map(|p| p[1]).sum::<f64>() / n;

    let lim = pos
        .iter()
        .flat_map(|p| [(p[0] - mean_x).abs(), (p[1] - mean_y).abs()])
        .fold(0.0f64, f64::max);
    let factor = if lim > 0.0 { scale / lim } else { 0.0 };

    pos.iter()
        .map(|p| {
            Position::new(
                (p[0] - mean_x) * factor + center.x,
                (p[1] - mean_y) * factor + center.y,
            )
        })
        .collect()
}

/// A node with its degree and derived visual attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledNode {
    pub name: String,
    pub degree: usize,
    pub style: NodeStyle,
}

/// Derive per-node size and highlight, in node insertion order.
///
/// Size is `base_size + degree * size_per_degree`; a node is highlighted
/// iff it is in `hubs`.
pub fn style_nodes(degrees: &DegreeMap, hubs: &HubSet, style: &StyleConfig) -> Vec<StyledNode> {
    degrees
        .entries()
        .iter()
        .map(|entry| StyledNode {
            name: entry.name.clone(),
            degree: entry.degree,
            style: NodeStyle {
                size: style.node_size(entry.degree),
                highlighted: hubs.contains(&entry.name),
            },
        })
        .collect()
}
