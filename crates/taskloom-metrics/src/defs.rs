//! Core types for the metric/scope registry.
//!
//! These types describe the emission contract of a metric (name + kind) and
//! the tag set of an operation scope. They are constructed once into static
//! tables at first use and never mutated afterward.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Tag keys ──────────────────────────────────────────────────────

/// Tag key carrying the current scope's operation name.
pub const OPERATION_TAG: &str = "operation";

/// Tag key carrying the emitting host's name.
pub const HOSTNAME_TAG: &str = "hostname";

/// Tag value emitted when a scope id cannot be resolved.
pub const UNKNOWN_TAG_VALUE: &str = "Unknown";

// ── Services ──────────────────────────────────────────────────────

/// Index of a service that emits metrics; the outer key of both registry
/// tables. `Common` entries are implicitly available to every service via
/// the lookup fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceIdx {
    Common,
    Frontend,
    History,
    Matching,
}

impl ServiceIdx {
    /// Every service index, in declaration order.
    pub const ALL: [ServiceIdx; 4] = [
        ServiceIdx::Common,
        ServiceIdx::Frontend,
        ServiceIdx::History,
        ServiceIdx::Matching,
    ];

    /// Lowercase service name, suitable as a tag value.
    pub fn name(&self) -> &'static str {
        match self {
            ServiceIdx::Common => "common",
            ServiceIdx::Frontend => "frontend",
            ServiceIdx::History => "history",
            ServiceIdx::Matching => "matching",
        }
    }
}

impl fmt::Display for ServiceIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Ids ───────────────────────────────────────────────────────────

/// Identifier of an operation scope. Ids are assigned explicitly in
/// [`crate::scopes`] and are unique across the whole platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeId(pub u32);

/// Identifier of a metric. Ids are assigned explicitly in
/// [`crate::metrics`] and are unique across the whole platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetricId(pub u32);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ── Definitions ───────────────────────────────────────────────────

/// Kind of measurement a metric records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Counter,
    Timer,
    Gauge,
}

/// Emission contract for one metric: its name and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricDef {
    pub name: &'static str,
    pub kind: MetricKind,
}

/// Tag set attached to every metric emitted within an operation scope:
/// the `operation` tag value plus any extra tags (usually none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeDef {
    pub operation: &'static str,
    pub tags: &'static [(&'static str, &'static str)],
}

// ── Error classification ──────────────────────────────────────────

/// Classification attached by callers to each completed operation, so the
/// emission runtime can separate SLA-reportable failures from user-caused
/// ones. Assigning a class is entirely the calling service's
/// responsibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// The operation completed without error.
    #[default]
    NoError,
    /// The error was caused by the caller; not SLA-reportable.
    UserError,
    /// The error is the platform's fault and counts against the SLA.
    InternalError,
}

impl ErrorClass {
    /// Whether this class counts against the service's SLA error budget.
    pub fn is_sla_reportable(&self) -> bool {
        matches!(self, ErrorClass::InternalError)
    }
}
