//! Child-storage strategies for [`OctreeNode`].
//!
//! Both strategies hold exclusively owned children keyed by octant. They
//! differ in what a split materializes and in lookup cost:
//!
//! | Strategy        | Container                    | Split creates        |
//! |-----------------|------------------------------|----------------------|
//! | `ArrayChildren` | `[Option<Box<Node>>; 8]`     | all 8 octants        |
//! | `MapChildren`   | `HashMap<u8, Node>`          | occupied octants     |

use std::collections::HashMap;

use smallvec::SmallVec;

use super::{Aabb3, OctreeNode};
use crate::types::Point;

/// Owned children of one node, indexed by octant (0-7).
///
/// Implementations must yield children in ascending octant order from
/// [`iter`](Self::iter) so traversals are deterministic.
pub trait ChildStorage: Default + Sized {
  /// Label used in summaries and exports.
  const NAME: &'static str;

  fn get(&self, octant: u8) -> Option<&OctreeNode<Self>>;

  /// Child for `octant`, created from `parent`'s octant bounds if absent.
  fn get_or_create(&mut self, octant: u8, parent: &Aabb3) -> &mut OctreeNode<Self>;

  /// Materialize children ahead of redistributing `pending` during a split.
  fn prepare_split(&mut self, parent: &Aabb3, pending: &[Point]);

  /// Number of live children.
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Live children in ascending octant order.
  fn iter(&self) -> impl Iterator<Item = (u8, &OctreeNode<Self>)> + '_;
}

// =============================================================================
// ArrayChildren - fixed 8 slots
// =============================================================================

/// Eight fixed slots, filled all at once on split.
#[derive(Debug, Default)]
pub struct ArrayChildren {
  slots: [Option<Box<OctreeNode<ArrayChildren>>>; 8],
}

impl ChildStorage for ArrayChildren {
  const NAME: &'static str = "Classic Octree";

  #[inline]
  fn get(&self, octant: u8) -> Option<&OctreeNode<Self>> {
    self.slots[octant as usize].as_deref()
  }

  #[inline]
  fn get_or_create(&mut self, octant: u8, parent: &Aabb3) -> &mut OctreeNode<Self> {
    self.slots[octant as usize]
      .get_or_insert_with(|| Box::new(OctreeNode::new(parent.octant_bounds(octant))))
  }

  fn prepare_split(&mut self, parent: &Aabb3, _pending: &[Point]) {
    for octant in 0u8..8 {
      self.get_or_create(octant, parent);
    }
  }

  fn len(&self) -> usize {
    self.slots.iter().filter(|slot| slot.is_some()).count()
  }

  fn is_empty(&self) -> bool {
    self.slots.iter().all(Option::is_none)
  }

  fn iter(&self) -> impl Iterator<Item = (u8, &OctreeNode<Self>)> + '_ {
    self
      .slots
      .iter()
      .enumerate()
      .filter_map(|(octant, slot)| slot.as_deref().map(|child| (octant as u8, child)))
  }
}

// =============================================================================
// MapChildren - sparse octant map
// =============================================================================

/// Hash map holding only octants that received points.
#[derive(Debug, Default)]
pub struct MapChildren {
  map: HashMap<u8, OctreeNode<MapChildren>>,
}

impl ChildStorage for MapChildren {
  const NAME: &'static str = "HashMap Octree";

  #[inline]
  fn get(&self, octant: u8) -> Option<&OctreeNode<Self>> {
    self.map.get(&octant)
  }

  #[inline]
  fn get_or_create(&mut self, octant: u8, parent: &Aabb3) -> &mut OctreeNode<Self> {
    self
      .map
      .entry(octant)
      .or_insert_with(|| OctreeNode::new(parent.octant_bounds(octant)))
  }

  fn prepare_split(&mut self, parent: &Aabb3, pending: &[Point]) {
    for point in pending {
      self.get_or_create(parent.octant_of(*point), parent);
    }
  }

  fn len(&self) -> usize {
    self.map.len()
  }

  fn is_empty(&self) -> bool {
    self.map.is_empty()
  }

  // HashMap order is unspecified; sort so exports are stable across runs.
  fn iter(&self) -> impl Iterator<Item = (u8, &OctreeNode<Self>)> + '_ {
    let mut octants: SmallVec<[u8; 8]> = self.map.keys().copied().collect();
    octants.sort_unstable();
    octants.into_iter().map(move |octant| (octant, &self.map[&octant]))
  }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
