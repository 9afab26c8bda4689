//! Registry lookups: (service, id) → definition with Common fallback.
//!
//! Both lookups probe the service-specific table first and fall back to the
//! shared Common table, so common persistence/client scopes do not have to
//! be re-enumerated per service. A miss in both tables means the calling
//! service references an id that was never declared.

use tracing::warn;

use crate::defs::{MetricDef, MetricId, ScopeDef, ScopeId, ServiceIdx, UNKNOWN_TAG_VALUE};
use crate::error::{RegistryError, RegistryResult};
use crate::{metrics, scopes};

/// Fallback definition handed to emission paths for unknown scope ids.
static UNKNOWN_SCOPE: ScopeDef = ScopeDef {
    operation: UNKNOWN_TAG_VALUE,
    tags: &[],
};

/// Resolve the tag definition for an operation scope.
///
/// Probes the service-specific table first, then the Common table. An
/// `Err` means the id is not declared anywhere and the caller's scope
/// wiring is wrong.
pub fn resolve_scope(service: ServiceIdx, id: ScopeId) -> RegistryResult<&'static ScopeDef> {
    let defs = scopes::scope_defs();
    defs.get(&service)
        .and_then(|table| table.get(&id))
        .or_else(|| defs.get(&ServiceIdx::Common).and_then(|table| table.get(&id)))
        .ok_or(RegistryError::UnknownScope { service, id })
}

/// Resolve the (name, kind) definition for a metric. Same two-level lookup
/// as [`resolve_scope`].
pub fn resolve_metric(service: ServiceIdx, id: MetricId) -> RegistryResult<&'static MetricDef> {
    let defs = metrics::metric_defs();
    defs.get(&service)
        .and_then(|table| table.get(&id))
        .or_else(|| defs.get(&ServiceIdx::Common).and_then(|table| table.get(&id)))
        .ok_or(RegistryError::UnknownMetric { service, id })
}

/// Production-safe variant of [`resolve_scope`] for emission paths: an
/// unknown id is logged and tagged `Unknown` instead of failing, so one
/// mis-wired scope cannot take down telemetry for the rest of the service.
pub fn scope_or_unknown(service: ServiceIdx, id: ScopeId) -> &'static ScopeDef {
    match resolve_scope(service, id) {
        Ok(def) => def,
        Err(err) => {
            warn!(service = service.name(), scope_id = id.0, %err, "emitting Unknown operation tag");
            &UNKNOWN_SCOPE
        }
    }
}
