use std::fmt;
use std::str::FromStr;

use crate::error::WfGlueError;

/// Well-known context keys. The string form is what ends up in log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    AppName,
    Namespace,
    TaskType,
    Project,
    Domain,
    WorkflowId,
    NodeId,
    TaskId,
    ExecId,
    JobId,
    Phase,
}

/// Keys that are copied into log lines. Project, domain and task id are not.
pub const LOG_KEYS: [Key; 8] = [
    Key::AppName,
    Key::JobId,
    Key::Namespace,
    Key::ExecId,
    Key::NodeId,
    Key::WorkflowId,
    Key::TaskType,
    Key::Phase,
];

impl Key {
    pub const ALL: [Key; 11] = [
        Key::AppName,
        Key::Namespace,
        Key::TaskType,
        Key::Project,
        Key::Domain,
        Key::WorkflowId,
        Key::NodeId,
        Key::TaskId,
        Key::ExecId,
        Key::JobId,
        Key::Phase,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Key::AppName => "app_name",
            Key::Namespace => "ns",
            Key::TaskType => "tasktype",
            Key::Project => "project",
            Key::Domain => "domain",
            Key::WorkflowId => "wf",
            Key::NodeId => "node",
            Key::TaskId => "task",
            Key::ExecId => "exec_id",
            Key::JobId => "job_id",
            Key::Phase => "phase",
        }
    }

    /// Nested keys accumulate a `/`-separated path instead of being replaced.
    pub fn is_nested(self) -> bool {
        matches!(self, Key::JobId | Key::NodeId)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Key {
    type Err = WfGlueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| WfGlueError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_round_trip() {
        for k in Key::ALL {
            assert_eq!(k.as_str().parse::<Key>().ok(), Some(k));
            assert_eq!(k.to_string(), k.as_str());
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "jobid".parse::<Key>().err();
        assert!(matches!(err, Some(WfGlueError::UnknownKey(s)) if s == "jobid"));
    }

    #[test]
    fn only_job_and_node_are_nested() {
        let nested: Vec<Key> = Key::ALL.into_iter().filter(|k| k.is_nested()).collect();
        assert_eq!(nested, vec![Key::NodeId, Key::JobId]);
    }
}
