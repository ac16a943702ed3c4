//! crmgrid core
//!
//! Upstream CRM client, property resolution, and record mapping for the
//! crmgrid web front-end. The web service owns the HTTP surface; this crate
//! owns everything that talks to or reshapes data from the CRM API.

pub mod client;
pub mod error;
pub mod mapper;
pub mod resolver;
pub mod types;

pub use client::CrmClient;
pub use error::{Result, UpstreamError};
pub use resolver::PropertyResolver;
pub use types::{PropertyDescriptor, Record};
