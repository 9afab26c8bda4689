//! Metric ids, metric definitions, and name-keyed metric sets.
//!
//! Id-keyed metrics follow the same per-service block numbering as scope
//! ids (Common starts at 0; the per-service tables are currently empty but
//! present so the Common fallback path is exercised). The base and runtime
//! sets are keyed by name rather than id: they are emitted outside any
//! operation scope by the service bootstrap and the runtime sampler.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::defs::{MetricDef, MetricId, MetricKind, ServiceIdx};

// ── Id-keyed workflow metrics (Common block) ──────────────────────

pub const WORKFLOW_REQUESTS: MetricId = MetricId(0);
pub const WORKFLOW_FAILURES: MetricId = MetricId(1);
pub const WORKFLOW_LATENCY: MetricId = MetricId(2);

// ── Service base metric names ─────────────────────────────────────

/// Incremented once per service start, so restarts show up as a rate.
pub const RESTARTS: &str = "restarts";

// ── Runtime metric names ──────────────────────────────────────────

pub const NUM_TASKS: &str = "num-tasks";
pub const NUM_THREADS: &str = "num-threads";
pub const MEMORY_ALLOCATED: &str = "memory.allocated";
pub const MEMORY_RESIDENT: &str = "memory.resident";
pub const MEMORY_VIRTUAL: &str = "memory.virtual";
pub const TASK_POLL_LATENCY: &str = "task-poll-latency";

/// Base metrics every service emits on its own behalf.
pub static SERVICE_BASE_METRICS: &[(&str, MetricKind)] = &[(RESTARTS, MetricKind::Counter)];

/// Self-telemetry sampled from the async runtime and the allocator.
pub static RUNTIME_METRICS: &[(&str, MetricKind)] = &[
    (NUM_TASKS, MetricKind::Gauge),
    (NUM_THREADS, MetricKind::Gauge),
    (MEMORY_ALLOCATED, MetricKind::Gauge),
    (MEMORY_RESIDENT, MetricKind::Gauge),
    (MEMORY_VIRTUAL, MetricKind::Gauge),
    (TASK_POLL_LATENCY, MetricKind::Timer),
];

static METRIC_DEFS: LazyLock<HashMap<ServiceIdx, HashMap<MetricId, MetricDef>>> =
    LazyLock::new(|| {
        let mut defs = HashMap::new();
        defs.insert(
            ServiceIdx::Common,
            HashMap::from([
                (
                    WORKFLOW_REQUESTS,
                    MetricDef {
                        name: "requests",
                        kind: MetricKind::Counter,
                    },
                ),
                (
                    WORKFLOW_FAILURES,
                    MetricDef {
                        name: "errors",
                        kind: MetricKind::Counter,
                    },
                ),
                (
                    WORKFLOW_LATENCY,
                    MetricDef {
                        name: "latency",
                        kind: MetricKind::Timer,
                    },
                ),
            ]),
        );
        defs.insert(ServiceIdx::Frontend, HashMap::new());
        defs.insert(ServiceIdx::History, HashMap::new());
        defs.insert(ServiceIdx::Matching, HashMap::new());
        defs
    });

/// The full metric table: service → metric id → definition.
pub fn metric_defs() -> &'static HashMap<ServiceIdx, HashMap<MetricId, MetricDef>> {
    &METRIC_DEFS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_service_has_a_table() {
        for service in ServiceIdx::ALL {
            assert!(metric_defs().contains_key(&service), "{service} missing");
        }
    }

    #[test]
    fn metric_ids_are_globally_unique() {
        let mut seen = HashSet::new();
        for table in metric_defs().values() {
            for id in table.keys() {
                assert!(seen.insert(*id), "metric id {id} defined twice");
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn every_metric_has_a_name_and_kind() {
        for table in metric_defs().values() {
            for def in table.values() {
                assert!(!def.name.is_empty());
                assert!(matches!(
                    def.kind,
                    MetricKind::Counter | MetricKind::Timer | MetricKind::Gauge
                ));
            }
        }
    }

    #[test]
    fn name_keyed_sets_have_unique_names() {
        let mut names = HashSet::new();
        for (name, _) in SERVICE_BASE_METRICS.iter().chain(RUNTIME_METRICS) {
            assert!(names.insert(*name), "metric name {name} defined twice");
        }
    }
}
