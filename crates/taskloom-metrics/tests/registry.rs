//! Integration tests exercising the public registry surface the way the
//! emission runtime consumes it.

use std::collections::HashSet;

use taskloom_metrics::{
    metrics, resolve_metric, resolve_scope, scope_or_unknown, scopes, ErrorClass, MetricKind,
    RegistryError, ScopeId, ServiceIdx, UNKNOWN_TAG_VALUE,
};

/// Every declared (service, id) pair resolves to a non-empty operation tag.
#[test]
fn all_declared_scopes_resolve() {
    for (service, table) in scopes::scope_defs() {
        for id in table.keys() {
            let def = resolve_scope(*service, *id).unwrap();
            assert!(!def.operation.is_empty(), "{service}/{id}");
        }
    }
}

/// Every declared metric resolves with a name and one of the three kinds.
#[test]
fn all_declared_metrics_resolve() {
    for (service, table) in metrics::metric_defs() {
        for id in table.keys() {
            let def = resolve_metric(*service, *id).unwrap();
            assert!(!def.name.is_empty(), "{service}/{id}");
            assert!(matches!(
                def.kind,
                MetricKind::Counter | MetricKind::Timer | MetricKind::Gauge
            ));
        }
    }
}

/// Within each service's usable id space (its own table plus Common), no
/// two scopes share an id.
#[test]
fn combined_id_space_has_no_collisions() {
    let defs = scopes::scope_defs();
    let common: HashSet<ScopeId> = defs[&ServiceIdx::Common].keys().copied().collect();
    for service in [ServiceIdx::Frontend, ServiceIdx::History, ServiceIdx::Matching] {
        for id in defs[&service].keys() {
            assert!(
                !common.contains(id),
                "scope {id} declared by both {service} and common"
            );
        }
    }
}

/// A service without its own entry for an id falls back to Common.
#[test]
fn common_scopes_are_available_to_all_services() {
    for service in ServiceIdx::ALL {
        let def = resolve_scope(service, scopes::common::CREATE_SHARD).unwrap();
        assert_eq!(def.operation, "CreateShard");

        let def = resolve_metric(service, metrics::WORKFLOW_LATENCY).unwrap();
        assert_eq!((def.name, def.kind), ("latency", MetricKind::Timer));
    }
}

/// Frontend and history declare the same API operations under distinct ids.
#[test]
fn same_operation_tag_under_distinct_ids() {
    let pairs = [
        (
            scopes::frontend::START_WORKFLOW_EXECUTION,
            scopes::history::START_WORKFLOW_EXECUTION,
        ),
        (
            scopes::frontend::RESPOND_ACTIVITY_TASK_FAILED,
            scopes::history::RESPOND_ACTIVITY_TASK_FAILED,
        ),
        (
            scopes::frontend::GET_WORKFLOW_EXECUTION_HISTORY,
            scopes::history::GET_WORKFLOW_EXECUTION_HISTORY,
        ),
    ];
    for (fe_id, hi_id) in pairs {
        assert_ne!(fe_id, hi_id);
        let fe = resolve_scope(ServiceIdx::Frontend, fe_id).unwrap();
        let hi = resolve_scope(ServiceIdx::History, hi_id).unwrap();
        assert_eq!(fe.operation, hi.operation);
    }
}

/// The strict API reports a miss; the emission-path API degrades to the
/// Unknown tag instead.
#[test]
fn unknown_ids_error_or_degrade() {
    let id = ScopeId(9999);
    assert_eq!(
        resolve_scope(ServiceIdx::Matching, id).unwrap_err(),
        RegistryError::UnknownScope {
            service: ServiceIdx::Matching,
            id,
        }
    );
    assert_eq!(scope_or_unknown(ServiceIdx::Matching, id).operation, UNKNOWN_TAG_VALUE);
}

/// Serde wire names are stable snake_case strings.
#[test]
fn wire_names_are_snake_case() {
    assert_eq!(serde_json::to_string(&ServiceIdx::Frontend).unwrap(), "\"frontend\"");
    assert_eq!(serde_json::to_string(&MetricKind::Timer).unwrap(), "\"timer\"");
    assert_eq!(
        serde_json::to_string(&ErrorClass::InternalError).unwrap(),
        "\"internal_error\""
    );
    assert_eq!(
        serde_json::from_str::<ErrorClass>("\"user_error\"").unwrap(),
        ErrorClass::UserError
    );
}
