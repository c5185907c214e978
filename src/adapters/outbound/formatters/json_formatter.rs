use crate::application::dto::ResolveResponse;
use crate::ports::outbound::GraphFormatter;
use crate::resolution::domain::{Cycle, PackageId};
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// Serialized shape of a resolution run
#[derive(Debug, Serialize)]
struct GraphDocument<'a> {
    root: &'a PackageId,
    dependencies: &'a IndexMap<PackageId, Vec<PackageId>>,
    cycles: &'a [Cycle],
    unresolved: &'a [PackageId],
}

/// JsonFormatter adapter for machine-readable output
///
/// Emits the adjacency mapping (keys in discovery order), the detected
/// cycles and the packages whose lookup failed.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, response: &ResolveResponse) -> Result<String> {
        let document = GraphDocument {
            root: response.graph.root(),
            dependencies: response.graph.adjacency(),
            cycles: &response.cycles,
            unresolved: response.graph.unresolved(),
        };

        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize graph to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
