//! Error types for the metric/scope registry.

use thiserror::Error;

use crate::defs::{MetricId, ScopeId, ServiceIdx};

/// Result type alias for registry lookups.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// A lookup missed both the service-specific and the common table. This is
/// a configuration defect in the calling service, discoverable at test
/// time, not a runtime fault to recover from.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no scope definition for id {id} in service {service} or the common table")]
    UnknownScope { service: ServiceIdx, id: ScopeId },

    #[error("no metric definition for id {id} in service {service} or the common table")]
    UnknownMetric { service: ServiceIdx, id: MetricId },
}
