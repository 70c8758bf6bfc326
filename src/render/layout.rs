use std::collections::HashMap;

use crate::network::definition::NetworkDefinition;
use crate::network::stop::StopId;

/// Hand-authored 2D positions for each stop, in abstract map units
/// (x grows eastward, y grows northward).
#[derive(Debug, Clone, Default)]
pub struct MapLayout {
    positions: HashMap<StopId, [f32; 2]>,
}

impl MapLayout {
    pub fn from_definition(definition: &NetworkDefinition) -> Self {
        let mut positions = HashMap::with_capacity(definition.stops.len());
        for stop in &definition.stops {
            positions.insert(StopId::from_name(&stop.name), stop.position);
        }
        MapLayout { positions }
    }

    pub fn position(&self, id: StopId) -> Option<[f32; 2]> {
        self.positions.get(&id).copied()
    }

    /// Bounding box of all positions as (min, max). Degenerate axes (all
    /// stops on one line) are widened so projection never divides by zero.
    pub fn bounds(&self) -> ([f32; 2], [f32; 2]) {
        let mut min = [f32::MAX, f32::MAX];
        let mut max = [f32::MIN, f32::MIN];
        for position in self.positions.values() {
            for axis in 0..2 {
                min[axis] = min[axis].min(position[axis]);
                max[axis] = max[axis].max(position[axis]);
            }
        }
        if self.positions.is_empty() {
            return ([0.0, 0.0], [1.0, 1.0]);
        }
        for axis in 0..2 {
            if max[axis] - min[axis] < f32::EPSILON {
                min[axis] -= 0.5;
                max[axis] += 0.5;
            }
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::siginjai::SIGINJAI;

    #[test]
    fn layout_covers_all_builtin_stops() {
        let layout = MapLayout::from_definition(&SIGINJAI);
        for stop in &SIGINJAI.stops {
            assert!(layout.position(StopId::from_name(&stop.name)).is_some());
        }
        let (min, max) = layout.bounds();
        assert_eq!(min, [-4.0, -1.0]);
        assert_eq!(max, [4.0, 1.0]);
    }

    #[test]
    fn degenerate_bounds_are_widened() {
        let mut layout = MapLayout::default();
        layout
            .positions
            .insert(StopId::from_name("Only"), [2.0, 2.0]);
        let (min, max) = layout.bounds();
        assert!(max[0] > min[0]);
        assert!(max[1] > min[1]);
    }
}
