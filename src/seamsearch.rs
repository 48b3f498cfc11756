// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam
//!
//! The seam graph is layered: every edge runs from one layer to the
//! next.  The cheapest SOURCE to SINK path therefore falls out of a
//! single forward sweep, carrying only the previous layer's costs,
//! plus a table of back-pointers to walk the winning path home.

use crate::energy::{EnergyField, EnergyView};
use crate::errors::{CarveError, Result};
use crate::flipper::Flipper;
use crate::seamgraph::{Orientation, SeamGraph, SINK_WEIGHT};
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use tracing::trace;

type Layer = Vec<EnergyAndBackPointer<f64>>;

// The cheapest lane in `lanes`.  Ties go to the lowest lane, which
// keeps seams reproducible.
fn cheapest<I>(lanes: I, layer: &[EnergyAndBackPointer<f64>]) -> Option<u32>
where
    I: Iterator<Item = u32>,
{
    lanes.min_by(|a, b| {
        layer[*a as usize]
            .energy
            .total_cmp(&layer[*b as usize].energy)
    })
}

/// Given a seam graph, return the lane crossed in each layer by a
/// minimum-weight SOURCE to SINK path, in layer order.
pub fn shortest_path<V: EnergyView>(graph: &SeamGraph<V>) -> Result<Vec<u32>> {
    let (lanes, layers) = (graph.lanes(), graph.layers());
    if lanes == 0 || layers == 0 {
        return Err(CarveError::Disconnected);
    }

    let mut parents: TwoDimensionalMap<u32> = TwoDimensionalMap::new(lanes, layers);
    let mut previous: Layer = (0..lanes)
        .map(|lane| EnergyAndBackPointer {
            energy: graph.arrival_weight(lane, 0),
            parent: lane,
        })
        .collect();
    let mut current: Layer = previous.clone();

    // For every subsequent layer, each pixel costs its own arrival
    // weight plus the cheapest of the (up to) three pixels that feed it.
    for layer in 1..layers {
        for lane in 0..lanes {
            let parent =
                cheapest(graph.predecessors(lane), &previous).ok_or(CarveError::Disconnected)?;
            current[lane as usize] = EnergyAndBackPointer {
                energy: previous[parent as usize].energy + graph.arrival_weight(lane, layer),
                parent,
            };
            parents[(lane, layer)] = parent;
        }
        std::mem::swap(&mut previous, &mut current);
    }

    // Every pixel of the last layer enters the sink at the same cost,
    // so the cheapest of them ends the seam.
    let mut lane = cheapest(0..lanes, &previous).ok_or(CarveError::Disconnected)?;
    trace!(
        cost = previous[lane as usize].energy + SINK_WEIGHT,
        lanes,
        layers,
        "cheapest seam"
    );

    // Working backwards, collect the lane of each layer, then reverse.
    let mut seam = Vec::with_capacity(layers as usize);
    for layer in (0..layers).rev() {
        seam.push(lane);
        lane = parents[(lane, layer)];
    }
    seam.reverse();
    Ok(seam)
}

/// Build the seam graph for `orientation` over the energy field and
/// search it.  Vertical seams hold one x per row; horizontal seams hold
/// one y per column.
pub fn find_seam(energy: &EnergyField, orientation: Orientation) -> Result<Vec<u32>> {
    match orientation {
        Orientation::Vertical => shortest_path(&SeamGraph::new(energy)),
        Orientation::Horizontal => shortest_path(&SeamGraph::new(&Flipper::new(energy))),
    }
}
