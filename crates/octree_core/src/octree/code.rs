//! LocationalCode - 64-bit linear key identifying a node by its path.
//!
//! The root is `1`. Each level appends the child's octant as three bits, so
//! the leading `1` acts as a sentinel that encodes depth. Stripped of the
//! sentinel, the code is the Morton (Z-order) interleave of the node's cell
//! coordinates at its depth, with x in the lowest bit.
//!
//! ```text
//! root            0b1
//! octant 5        0b1_101
//! octant 5 -> 2   0b1_101_010
//! ```

/// Linear octree key. See the module docs for the bit layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct LocationalCode(u64);

impl LocationalCode {
  /// Deepest level addressable with 63 path bits plus the sentinel.
  pub const MAX_DEPTH: u32 = 21;

  pub const ROOT: Self = Self(1);

  /// Wrap a raw key, rejecting values whose sentinel is missing or misplaced.
  pub fn from_raw(raw: u64) -> Option<Self> {
    if raw == 0 || (63 - raw.leading_zeros()) % 3 != 0 {
      return None;
    }
    Some(Self(raw))
  }

  /// Key of the node at cell `(x, y, z)` on level `depth`.
  ///
  /// Returns None if `depth` exceeds [`Self::MAX_DEPTH`] or a coordinate
  /// does not fit in `depth` bits.
  pub fn from_cell(x: u32, y: u32, z: u32, depth: u32) -> Option<Self> {
    if depth > Self::MAX_DEPTH {
      return None;
    }
    let limit = 1u64 << depth;
    if x as u64 >= limit || y as u64 >= limit || z as u64 >= limit {
      return None;
    }
    Some(Self(1u64 << (3 * depth) | morton_encode(x, y, z)))
  }

  /// Get the raw key value.
  pub fn raw(&self) -> u64 {
    self.0
  }

  /// Level of this node (root = 0).
  #[inline]
  pub fn depth(&self) -> u32 {
    (63 - self.0.leading_zeros()) / 3
  }

  /// Get child key for `octant` (bits: +X, +Y, +Z).
  ///
  /// Returns None at [`Self::MAX_DEPTH`].
  #[inline]
  pub fn child(&self, octant: u8) -> Option<Self> {
    debug_assert!(octant < 8, "octant out of range: {octant}");
    if self.depth() >= Self::MAX_DEPTH {
      return None;
    }
    Some(Self(self.0 << 3 | (octant & 7) as u64))
  }

  /// Get parent key. Returns None for the root.
  #[inline]
  pub fn parent(&self) -> Option<Self> {
    if *self == Self::ROOT {
      None
    } else {
      Some(Self(self.0 >> 3))
    }
  }

  /// Octant of this node inside its parent. Returns None for the root.
  #[inline]
  pub fn octant(&self) -> Option<u8> {
    self.parent().map(|_| (self.0 & 7) as u8)
  }

  /// Cell coordinates `[x, y, z]` on this node's level.
  pub fn cell(&self) -> [u32; 3] {
    let path = self.0 & ((1u64 << (3 * self.depth())) - 1);
    [
      compact_bits(path),
      compact_bits(path >> 1),
      compact_bits(path >> 2),
    ]
  }
}

impl Default for LocationalCode {
  fn default() -> Self {
    Self::ROOT
  }
}

/// Interleave the low 21 bits of each coordinate (x lowest).
pub fn morton_encode(x: u32, y: u32, z: u32) -> u64 {
  spread_bits(x) | spread_bits(y) << 1 | spread_bits(z) << 2
}

/// Inverse of [`morton_encode`].
pub fn morton_decode(code: u64) -> [u32; 3] {
  [
    compact_bits(code),
    compact_bits(code >> 1),
    compact_bits(code >> 2),
  ]
}

#[inline]
fn spread_bits(v: u32) -> u64 {
  let mut x = v as u64 & 0x1f_ffff;
  x = (x | x << 32) & 0x001f_0000_0000_ffff;
  x = (x | x << 16) & 0x001f_0000_ff00_00ff;
  x = (x | x << 8) & 0x100f_00f0_0f00_f00f;
  x = (x | x << 4) & 0x10c3_0c30_c30c_30c3;
  x = (x | x << 2) & 0x1249_2492_4924_9249;
  x
}

#[inline]
fn compact_bits(v: u64) -> u32 {
  let mut x = v & 0x1249_2492_4924_9249;
  x = (x ^ (x >> 2)) & 0x10c3_0c30_c30c_30c3;
  x = (x ^ (x >> 4)) & 0x100f_00f0_0f00_f00f;
  x = (x ^ (x >> 8)) & 0x001f_0000_ff00_00ff;
  x = (x ^ (x >> 16)) & 0x001f_0000_0000_ffff;
  x = (x ^ (x >> 32)) & 0x1f_ffff;
  x as u32
}

#[cfg(test)]
#[path = "code_test.rs"]
mod code_test;
