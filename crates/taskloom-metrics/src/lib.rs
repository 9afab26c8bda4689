//! taskloom-metrics — static metric/scope registry for Taskloom services.
//!
//! Declares every metric name, metric kind (counter/timer/gauge), and
//! per-service operation scope the platform emits, plus the error
//! classification used for SLA accounting. The emission runtime resolves a
//! (service, id) pair here to learn which operation tag and metric kind to
//! attach to a sample; everything downstream of that (aggregation, export,
//! storage) lives outside this crate.
//!
//! # Architecture
//!
//! ```text
//! registry
//!   ├── resolve_scope(service, id)    → operation tag + extra tags
//!   ├── resolve_metric(service, id)   → metric name + kind
//!   └── scope_or_unknown(service, id) → safe fallback for emission paths
//!
//! lookup order: service-specific table → shared Common table
//! ```
//!
//! All tables are built once into process-wide immutable statics and are
//! safe for unsynchronized concurrent reads.

pub mod defs;
pub mod error;
pub mod metrics;
pub mod registry;
pub mod scopes;

pub use defs::{
    ErrorClass, MetricDef, MetricId, MetricKind, ScopeDef, ScopeId, ServiceIdx, HOSTNAME_TAG,
    OPERATION_TAG, UNKNOWN_TAG_VALUE,
};
pub use error::{RegistryError, RegistryResult};
pub use registry::{resolve_metric, resolve_scope, scope_or_unknown};
