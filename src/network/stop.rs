use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a stop, derived from its name.
///
/// UUID v5 over the name bytes keeps ids reproducible across runs and
/// independent of insertion order, so highlight sets and layout tables can
/// be keyed by id rather than by graph index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StopId(Uuid);

impl StopId {
    pub fn from_name(name: &str) -> Self {
        StopId(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()))
    }
}

impl Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named stop (halte) in the transit network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    pub id: StopId,
}

impl Stop {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = StopId::from_name(&name);
        Self { name, id }
    }
}

impl Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
