/*!
# Node Representation

We choose `Node = u32` as flow networks of practical size stay well below `2^32` vertices.
This saves space in the per-vertex working arrays (levels, arc cursors) compared to `usize`.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a network!
pub type NumNodes = Node;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Distance label assigned by the level builder
pub type Level = u32;

/// Level of a vertex that was not reached from the source
pub const UNREACHED: Level = Level::MAX;
