// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam graph
//!
//! Every pixel is a node, plus a SOURCE above the first layer and a
//! SINK below the last.  A pixel is entered only from the pixel
//! directly before it in the previous layer or from that pixel's
//! immediate neighbors, so a seam drifts at most one lane per layer.
//! Entering a pixel costs that pixel's energy.  Leaving the source
//! costs `BORDER_ENERGY`, the energy of every first-layer pixel, and
//! entering the sink costs nothing.
//!
//! The graph is never materialized: the edge set is a pure function
//! of the energy view.  Layers are rows and lanes are columns; for
//! horizontal seams, hand in a `Flipper` over the energy field.

use crate::cq;
use crate::energy::{EnergyView, BORDER_ENERGY};
use std::ops::RangeInclusive;

/// Weight of every edge leaving the source.
pub const SOURCE_WEIGHT: f64 = BORDER_ENERGY;

/// Weight of every edge entering the sink.
pub const SINK_WEIGHT: f64 = 0.0;

/// Which way a seam runs.  A vertical seam runs top to bottom and
/// holds one x per row; a horizontal seam runs left to right and
/// holds one y per column.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn turn(self) -> Self {
        cq!(
            self == Orientation::Vertical,
            Orientation::Horizontal,
            Orientation::Vertical
        )
    }
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Node {
    Source,
    Pixel { lane: u32, layer: u32 },
    Sink,
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub weight: f64,
}

pub struct SeamGraph<'a, V: EnergyView> {
    view: &'a V,
}

impl<'a, V: EnergyView> SeamGraph<'a, V> {
    pub fn new(view: &'a V) -> Self {
        SeamGraph { view }
    }

    /// Number of layers a seam must cross, which is also the length
    /// of the seam.
    pub fn layers(&self) -> u32 {
        self.view.height()
    }

    /// Number of positions within a layer.
    pub fn lanes(&self) -> u32 {
        self.view.width()
    }

    /// The lanes of the previous layer with an edge into `lane`.  At
    /// the first and last lane only the neighbor that exists is
    /// included; with a single lane only the lane itself is.
    pub fn predecessors(&self, lane: u32) -> RangeInclusive<u32> {
        let last = self.lanes().saturating_sub(1);
        RangeInclusive::new(
            cq!(lane == 0, 0, lane - 1),
            cq!(lane >= last, last, lane + 1),
        )
    }

    /// The weight of every edge into the pixel at (`lane`, `layer`).
    pub fn arrival_weight(&self, lane: u32, layer: u32) -> f64 {
        cq!(layer == 0, SOURCE_WEIGHT, self.view.energy(lane, layer))
    }

    /// Spell out the edges into a node.  The search never calls this;
    /// it walks `predecessors` and `arrival_weight` directly.
    pub fn incoming(&self, node: Node) -> Vec<Edge> {
        match node {
            Node::Source => Vec::new(),
            Node::Pixel { lane, layer: 0 } => vec![Edge {
                from: Node::Source,
                to: node,
                weight: self.arrival_weight(lane, 0),
            }],
            Node::Pixel { lane, layer } => {
                let weight = self.arrival_weight(lane, layer);
                self.predecessors(lane)
                    .map(|from| Edge {
                        from: Node::Pixel {
                            lane: from,
                            layer: layer - 1,
                        },
                        to: node,
                        weight,
                    })
                    .collect()
            }
            Node::Sink => {
                let last = self.layers().saturating_sub(1);
                (0..self.lanes())
                    .map(|lane| Edge {
                        from: Node::Pixel { lane, layer: last },
                        to: Node::Sink,
                        weight: SINK_WEIGHT,
                    })
                    .collect()
            }
        }
    }
}
