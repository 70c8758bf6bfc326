/*
 * Built-in Trans Siginjai network (Jambi): 8 stops and 10 road segments,
 * distances in meters, with the hand-authored west-to-east map layout.
 */

use once_cell::sync::Lazy;

use crate::network::definition::{NetworkDefinition, SegmentDefinition, StopDefinition};

pub const DEFAULT_SOURCE: &str = "Pijoan";
pub const DEFAULT_TARGET: &str = "Pasar (WTC)";

pub static SIGINJAI: Lazy<NetworkDefinition> = Lazy::new(|| {
    let stops = [
        ("Pijoan", [-4.0, 0.0]),
        ("Simpang Rimbo", [-2.0, 0.0]),
        ("Alam Barajo", [-1.0, 1.0]),
        ("UNJA Telanai", [-1.0, -1.0]),
        ("Jamtos", [0.5, 1.0]),
        ("Simpang BI", [0.5, -1.0]),
        ("Sipin", [2.0, 0.0]),
        ("Pasar (WTC)", [4.0, 0.0]),
    ];
    let segments = [
        ("Pijoan", "Simpang Rimbo", 12100),
        ("Simpang Rimbo", "Alam Barajo", 2700),
        ("Simpang Rimbo", "UNJA Telanai", 5200),
        ("Alam Barajo", "Jamtos", 6700),
        ("UNJA Telanai", "Simpang BI", 500),
        ("Simpang BI", "Sipin", 2100),
        ("Jamtos", "Sipin", 3100),
        ("Sipin", "Pasar (WTC)", 6500),
        ("UNJA Telanai", "Pasar (WTC)", 5400),
        ("Alam Barajo", "Simpang BI", 7800),
    ];

    NetworkDefinition {
        name: "Trans Siginjai".to_string(),
        stops: stops
            .into_iter()
            .map(|(name, position)| StopDefinition {
                name: name.to_string(),
                position,
            })
            .collect(),
        segments: segments
            .into_iter()
            .map(|(from, to, distance_m)| SegmentDefinition {
                from: from.to_string(),
                to: to.to_string(),
                distance_m,
            })
            .collect(),
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_network_builds() {
        let graph = SIGINJAI.build().expect("built-in network must be valid");
        assert_eq!(graph.stop_count(), 8);
        assert_eq!(graph.segment_count(), 10);
        assert!(graph.resolve(DEFAULT_SOURCE).is_some());
        assert!(graph.resolve(DEFAULT_TARGET).is_some());
    }

    #[test]
    fn builtin_network_roundtrips_as_json() {
        let json = serde_json::to_string(&*SIGINJAI).unwrap();
        let back = NetworkDefinition::from_json(&json).unwrap();
        assert_eq!(back.stops.len(), 8);
        assert_eq!(back.segments.len(), 10);
    }
}
