//! Ranking of path nodes by distance from a query point.

use bevy_math::DVec2;
use math::{Length, Position};
use ordered_float::OrderedFloat;

use crate::{Error, PathNode, Result};


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDistance {
    pub distance: Length<f64>,
    pub index:    usize,
}

/// Ranks the nodes from `starting_index` onwards by ascending distance from `point`.
///
/// Nodes at equal distance keep their path order.
pub fn rank_nodes(
    path: &[PathNode],
    point: Position<DVec2>,
    starting_index: usize,
) -> Result<Vec<NodeDistance>> {
    let mut ranked = path
        .iter()
        .enumerate()
        .skip(starting_index)
        .map(|(index, node)| {
            let distance = node.position.distance_exact(point);
            if distance.is_nan() {
                bevy::log::error!(
                    "undefined distance from {point:?} to path node {index} at {:?}",
                    node.position
                );
                return Err(Error::NanDistance { index });
            }
            Ok(NodeDistance { distance, index })
        })
        .collect::<Result<Vec<_>>>()?;

    ranked.sort_by_key(|entry| OrderedFloat(entry.distance.into_meters()));
    Ok(ranked)
}
