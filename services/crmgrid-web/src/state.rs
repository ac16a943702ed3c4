//! Shared application state

use crmgrid_core::{CrmClient, PropertyResolver};

/// State shared by every request handler
#[derive(Debug)]
pub struct AppState {
    /// `None` when no access credential was configured; every CRM route
    /// short-circuits with a fixed error in that case
    pub client: Option<CrmClient>,

    /// Shared property list, driving both table columns and form fields
    pub resolver: PropertyResolver,

    /// The single configured custom object type
    pub object_type: String,
}

impl AppState {
    pub fn new(client: Option<CrmClient>, resolver: PropertyResolver, object_type: String) -> Self {
        Self {
            client,
            resolver,
            object_type,
        }
    }
}
