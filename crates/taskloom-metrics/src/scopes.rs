//! Operation scope ids and their tag definitions.
//!
//! Ids are assigned explicitly, one contiguous block per service, so the
//! numbering survives reordering of declarations: Common 0–27, Frontend
//! 28–35, History 36–43, Matching 44–47. Every id is unique across the
//! whole platform; a service's usable id space is its own block plus the
//! Common block.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::defs::{ScopeDef, ScopeId, ServiceIdx};

/// Scopes shared by all services: persistence operations and client-side
/// RPC calls to the history and matching services.
pub mod common {
    use crate::defs::ScopeId;

    // Persistence layer operations.
    pub const CREATE_SHARD: ScopeId = ScopeId(0);
    pub const GET_SHARD: ScopeId = ScopeId(1);
    pub const UPDATE_SHARD: ScopeId = ScopeId(2);
    pub const CREATE_WORKFLOW_EXECUTION: ScopeId = ScopeId(3);
    pub const GET_WORKFLOW_EXECUTION: ScopeId = ScopeId(4);
    pub const UPDATE_WORKFLOW_EXECUTION: ScopeId = ScopeId(5);
    pub const DELETE_WORKFLOW_EXECUTION: ScopeId = ScopeId(6);
    pub const GET_TRANSFER_TASKS: ScopeId = ScopeId(7);
    pub const COMPLETE_TRANSFER_TASK: ScopeId = ScopeId(8);
    pub const GET_TIMER_INDEX_TASKS: ScopeId = ScopeId(9);
    pub const GET_WORKFLOW_MUTABLE_STATE: ScopeId = ScopeId(10);
    pub const CREATE_TASK: ScopeId = ScopeId(11);
    pub const GET_TASKS: ScopeId = ScopeId(12);
    pub const COMPLETE_TASK: ScopeId = ScopeId(13);
    pub const LEASE_TASK_LIST: ScopeId = ScopeId(14);
    pub const UPDATE_TASK_LIST: ScopeId = ScopeId(15);

    // RPC calls made to the history service.
    pub const HISTORY_CLIENT_START_WORKFLOW_EXECUTION: ScopeId = ScopeId(16);
    pub const HISTORY_CLIENT_RECORD_ACTIVITY_TASK_HEARTBEAT: ScopeId = ScopeId(17);
    pub const HISTORY_CLIENT_RESPOND_DECISION_TASK_COMPLETED: ScopeId = ScopeId(18);
    pub const HISTORY_CLIENT_RESPOND_ACTIVITY_TASK_COMPLETED: ScopeId = ScopeId(19);
    pub const HISTORY_CLIENT_RESPOND_ACTIVITY_TASK_FAILED: ScopeId = ScopeId(20);
    pub const HISTORY_CLIENT_GET_WORKFLOW_EXECUTION_HISTORY: ScopeId = ScopeId(21);
    pub const HISTORY_CLIENT_RECORD_DECISION_TASK_STARTED: ScopeId = ScopeId(22);
    pub const HISTORY_CLIENT_RECORD_ACTIVITY_TASK_STARTED: ScopeId = ScopeId(23);

    // RPC calls made to the matching service.
    pub const MATCHING_CLIENT_POLL_FOR_DECISION_TASK: ScopeId = ScopeId(24);
    pub const MATCHING_CLIENT_POLL_FOR_ACTIVITY_TASK: ScopeId = ScopeId(25);
    pub const MATCHING_CLIENT_ADD_ACTIVITY_TASK: ScopeId = ScopeId(26);
    pub const MATCHING_CLIENT_ADD_DECISION_TASK: ScopeId = ScopeId(27);
}

/// API calls received by the frontend service.
pub mod frontend {
    use crate::defs::ScopeId;

    pub const START_WORKFLOW_EXECUTION: ScopeId = ScopeId(28);
    pub const POLL_FOR_DECISION_TASK: ScopeId = ScopeId(29);
    pub const POLL_FOR_ACTIVITY_TASK: ScopeId = ScopeId(30);
    pub const RECORD_ACTIVITY_TASK_HEARTBEAT: ScopeId = ScopeId(31);
    pub const RESPOND_DECISION_TASK_COMPLETED: ScopeId = ScopeId(32);
    pub const RESPOND_ACTIVITY_TASK_COMPLETED: ScopeId = ScopeId(33);
    pub const RESPOND_ACTIVITY_TASK_FAILED: ScopeId = ScopeId(34);
    pub const GET_WORKFLOW_EXECUTION_HISTORY: ScopeId = ScopeId(35);
}

/// API calls received by the history service. Several carry the same
/// operation tag value as a frontend scope; the ids stay distinct.
pub mod history {
    use crate::defs::ScopeId;

    pub const START_WORKFLOW_EXECUTION: ScopeId = ScopeId(36);
    pub const RECORD_ACTIVITY_TASK_HEARTBEAT: ScopeId = ScopeId(37);
    pub const RESPOND_DECISION_TASK_COMPLETED: ScopeId = ScopeId(38);
    pub const RESPOND_ACTIVITY_TASK_COMPLETED: ScopeId = ScopeId(39);
    pub const RESPOND_ACTIVITY_TASK_FAILED: ScopeId = ScopeId(40);
    pub const GET_WORKFLOW_EXECUTION_HISTORY: ScopeId = ScopeId(41);
    pub const RECORD_DECISION_TASK_STARTED: ScopeId = ScopeId(42);
    pub const RECORD_ACTIVITY_TASK_STARTED: ScopeId = ScopeId(43);
}

/// API calls received by the matching service.
pub mod matching {
    use crate::defs::ScopeId;

    pub const POLL_FOR_DECISION_TASK: ScopeId = ScopeId(44);
    pub const POLL_FOR_ACTIVITY_TASK: ScopeId = ScopeId(45);
    pub const ADD_ACTIVITY_TASK: ScopeId = ScopeId(46);
    pub const ADD_DECISION_TASK: ScopeId = ScopeId(47);
}

static SCOPE_DEFS: LazyLock<HashMap<ServiceIdx, HashMap<ScopeId, ScopeDef>>> =
    LazyLock::new(|| {
        let mut defs = HashMap::new();
        defs.insert(
            ServiceIdx::Common,
            table(&[
                (common::CREATE_SHARD, "CreateShard"),
                (common::GET_SHARD, "GetShard"),
                (common::UPDATE_SHARD, "UpdateShard"),
                (common::CREATE_WORKFLOW_EXECUTION, "CreateWorkflowExecution"),
                (common::GET_WORKFLOW_EXECUTION, "GetWorkflowExecution"),
                (common::UPDATE_WORKFLOW_EXECUTION, "UpdateWorkflowExecution"),
                (common::DELETE_WORKFLOW_EXECUTION, "DeleteWorkflowExecution"),
                (common::GET_TRANSFER_TASKS, "GetTransferTasks"),
                (common::COMPLETE_TRANSFER_TASK, "CompleteTransferTask"),
                (common::GET_TIMER_INDEX_TASKS, "GetTimerIndexTasks"),
                (common::GET_WORKFLOW_MUTABLE_STATE, "GetWorkflowMutableState"),
                (common::CREATE_TASK, "CreateTask"),
                (common::GET_TASKS, "GetTasks"),
                (common::COMPLETE_TASK, "CompleteTask"),
                (common::LEASE_TASK_LIST, "LeaseTaskList"),
                (common::UPDATE_TASK_LIST, "UpdateTaskList"),
                (
                    common::HISTORY_CLIENT_START_WORKFLOW_EXECUTION,
                    "HistoryClientStartWorkflowExecution",
                ),
                (
                    common::HISTORY_CLIENT_RECORD_ACTIVITY_TASK_HEARTBEAT,
                    "HistoryClientRecordActivityTaskHeartbeat",
                ),
                (
                    common::HISTORY_CLIENT_RESPOND_DECISION_TASK_COMPLETED,
                    "HistoryClientRespondDecisionTaskCompleted",
                ),
                (
                    common::HISTORY_CLIENT_RESPOND_ACTIVITY_TASK_COMPLETED,
                    "HistoryClientRespondActivityTaskCompleted",
                ),
                (
                    common::HISTORY_CLIENT_RESPOND_ACTIVITY_TASK_FAILED,
                    "HistoryClientRespondActivityTaskFailed",
                ),
                (
                    common::HISTORY_CLIENT_GET_WORKFLOW_EXECUTION_HISTORY,
                    "HistoryClientGetWorkflowExecutionHistory",
                ),
                (
                    common::HISTORY_CLIENT_RECORD_DECISION_TASK_STARTED,
                    "HistoryClientRecordDecisionTaskStarted",
                ),
                (
                    common::HISTORY_CLIENT_RECORD_ACTIVITY_TASK_STARTED,
                    "HistoryClientRecordActivityTaskStarted",
                ),
                (
                    common::MATCHING_CLIENT_POLL_FOR_DECISION_TASK,
                    "MatchingClientPollForDecisionTask",
                ),
                (
                    common::MATCHING_CLIENT_POLL_FOR_ACTIVITY_TASK,
                    "MatchingClientPollForActivityTask",
                ),
                (
                    common::MATCHING_CLIENT_ADD_ACTIVITY_TASK,
                    "MatchingClientAddActivityTask",
                ),
                (
                    common::MATCHING_CLIENT_ADD_DECISION_TASK,
                    "MatchingClientAddDecisionTask",
                ),
            ]),
        );
        defs.insert(
            ServiceIdx::Frontend,
            table(&[
                (frontend::START_WORKFLOW_EXECUTION, "StartWorkflowExecution"),
                (frontend::POLL_FOR_DECISION_TASK, "PollForDecisionTask"),
                (frontend::POLL_FOR_ACTIVITY_TASK, "PollForActivityTask"),
                (
                    frontend::RECORD_ACTIVITY_TASK_HEARTBEAT,
                    "RecordActivityTaskHeartbeat",
                ),
                (
                    frontend::RESPOND_DECISION_TASK_COMPLETED,
                    "RespondDecisionTaskCompleted",
                ),
                (
                    frontend::RESPOND_ACTIVITY_TASK_COMPLETED,
                    "RespondActivityTaskCompleted",
                ),
                (
                    frontend::RESPOND_ACTIVITY_TASK_FAILED,
                    "RespondActivityTaskFailed",
                ),
                (
                    frontend::GET_WORKFLOW_EXECUTION_HISTORY,
                    "GetWorkflowExecutionHistory",
                ),
            ]),
        );
        defs.insert(
            ServiceIdx::History,
            table(&[
                (history::START_WORKFLOW_EXECUTION, "StartWorkflowExecution"),
                (
                    history::RECORD_ACTIVITY_TASK_HEARTBEAT,
                    "RecordActivityTaskHeartbeat",
                ),
                (
                    history::RESPOND_DECISION_TASK_COMPLETED,
                    "RespondDecisionTaskCompleted",
                ),
                (
                    history::RESPOND_ACTIVITY_TASK_COMPLETED,
                    "RespondActivityTaskCompleted",
                ),
                (
                    history::RESPOND_ACTIVITY_TASK_FAILED,
                    "RespondActivityTaskFailed",
                ),
                (
                    history::GET_WORKFLOW_EXECUTION_HISTORY,
                    "GetWorkflowExecutionHistory",
                ),
                (
                    history::RECORD_DECISION_TASK_STARTED,
                    "RecordDecisionTaskStarted",
                ),
                (
                    history::RECORD_ACTIVITY_TASK_STARTED,
                    "RecordActivityTaskStarted",
                ),
            ]),
        );
        defs.insert(
            ServiceIdx::Matching,
            table(&[
                (matching::POLL_FOR_DECISION_TASK, "PollForDecisionTask"),
                (matching::POLL_FOR_ACTIVITY_TASK, "PollForActivityTask"),
                (matching::ADD_ACTIVITY_TASK, "AddActivityTask"),
                (matching::ADD_DECISION_TASK, "AddDecisionTask"),
            ]),
        );
        defs
    });

fn table(entries: &[(ScopeId, &'static str)]) -> HashMap<ScopeId, ScopeDef> {
    entries
        .iter()
        .map(|&(id, operation)| (id, ScopeDef { operation, tags: &[] }))
        .collect()
}

/// The full scope table: service → scope id → definition.
pub fn scope_defs() -> &'static HashMap<ServiceIdx, HashMap<ScopeId, ScopeDef>> {
    &SCOPE_DEFS
}
