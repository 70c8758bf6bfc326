use serde::{Deserialize, Serialize};

use crate::network::stop::StopId;

/// Payload of an undirected road segment between two stops.
///
/// Distances are integer meters, matching the hand-authored network data;
/// non-negativity is guaranteed by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub distance_m: u64,
}

impl Segment {
    pub fn new(distance_m: u64) -> Self {
        Segment { distance_m }
    }
}

/// Order-normalized endpoint pair identifying an undirected segment.
///
/// Normalizing `(a, b)` so that `a <= b` makes the key direction-agnostic,
/// which is what duplicate detection and route highlighting need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentKey {
    pub a: StopId,
    pub b: StopId,
}

impl SegmentKey {
    pub fn new(a: StopId, b: StopId) -> Self {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        SegmentKey { a, b }
    }
}
