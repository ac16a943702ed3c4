//! Property resolution
//!
//! Decides which property names drive both the list columns and the create
//! form. An operator-supplied override wins outright; otherwise the list is
//! derived once from the upstream schema and memoized for the rest of the
//! process. Resolution never fails outward: any schema-lookup problem is
//! logged and replaced by the `["name"]` fallback.

use tokio::sync::RwLock;
use tracing::warn;

use crate::client::CrmClient;
use crate::types::PropertyDescriptor;

/// Maximum number of auto-selected properties
const MAX_PROPERTIES: usize = 5;

/// Property name hoisted to the front when present
const PRIMARY_PROPERTY: &str = "name";

/// Resolves and caches the ordered property list for the configured object type
#[derive(Debug)]
pub struct PropertyResolver {
    override_list: Vec<String>,
    cache: RwLock<Option<Vec<String>>>,
}

impl PropertyResolver {
    /// Build a resolver with an explicit override list. An empty list means
    /// "derive from the schema".
    pub fn new(override_list: Vec<String>) -> Self {
        Self {
            override_list,
            cache: RwLock::new(None),
        }
    }

    /// Build a resolver from a comma-separated override spec, e.g. the
    /// `CRMGRID_PROPERTIES` variable. Entries are trimmed and blanks dropped;
    /// what survives is used verbatim.
    pub fn from_spec(spec: &str) -> Self {
        Self::new(parse_override(spec))
    }

    /// Resolve the property list, querying the schema at most once per
    /// process. Falls back to `["name"]` if the lookup fails.
    pub async fn resolve(&self, client: &CrmClient, object_type: &str) -> Vec<String> {
        if !self.override_list.is_empty() {
            return self.override_list.clone();
        }

        if let Some(cached) = self.cache.read().await.as_ref() {
            return cached.clone();
        }

        let resolved = match client.fetch_schema(object_type).await {
            Ok(descriptors) => select_properties(&descriptors),
            Err(err) => {
                warn!(%object_type, error = %err, "schema lookup failed, falling back to [\"name\"]");
                vec![PRIMARY_PROPERTY.to_string()]
            }
        };

        // Last write wins under a race; both writers computed from the same
        // schema, so the values converge.
        *self.cache.write().await = Some(resolved.clone());
        resolved
    }

    /// Drop the memoized list so the next call re-queries the schema.
    pub async fn reset(&self) {
        *self.cache.write().await = None;
    }
}

/// Parse a comma-separated override spec into a property list.
pub fn parse_override(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Apply the auto-selection policy to schema descriptors: string-typed
/// properties only, `name` first, duplicates dropped, at most five entries.
fn select_properties(descriptors: &[PropertyDescriptor]) -> Vec<String> {
    let mut selected: Vec<String> = Vec::new();

    let eligible = descriptors
        .iter()
        .filter(|d| d.field_type == "string")
        .map(|d| d.name.as_str());

    for name in eligible {
        if name == PRIMARY_PROPERTY && !selected.iter().any(|n| n == PRIMARY_PROPERTY) {
            selected.insert(0, name.to_string());
        } else if !selected.iter().any(|n| n == name) {
            selected.push(name.to_string());
        }
    }

    selected.truncate(MAX_PROPERTIES);
    if selected.is_empty() {
        selected.push(PRIMARY_PROPERTY.to_string());
    }
    selected
}
