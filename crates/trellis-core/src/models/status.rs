//! Status and category enumerations shared across the runtime entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step and tool-invocation statuses.
///
/// The wire literals are part of the stored record format and must not
/// change: `pending`, `running`, `stop`, `error`, `success`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Step has been created but not picked up yet
    #[default]
    Pending,

    /// Step is being executed by an agent
    Running,

    /// Step was stopped before completion
    Stop,

    /// Step failed
    Error,

    /// Step completed successfully
    Success,
}

impl Status {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Running => "running",
            Status::Stop => "stop",
            Status::Error => "error",
            Status::Success => "success",
        }
    }

    /// Whether this status ends a step's execution. Terminal statuses stamp
    /// the step's `finished_at` timestamp; pending/running leave it untouched.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Stop | Status::Error | Status::Success)
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "running" => Ok(Status::Running),
            "stop" => Ok(Status::Stop),
            "error" => Ok(Status::Error),
            "success" => Ok(Status::Success),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency semantics of an edge between two steps in the execution graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// Target runs after the source step completes
    DependsOn,

    /// Source step completion triggers the target
    Triggers,

    /// Target runs after all referenced steps complete
    DependsOnAll,

    /// Target runs after any referenced step completes
    DependsOnAny,
}

impl EdgeType {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::DependsOn => "depends_on",
            EdgeType::Triggers => "triggers",
            EdgeType::DependsOnAll => "depends_on_all",
            EdgeType::DependsOnAny => "depends_on_any",
        }
    }
}

impl FromStr for EdgeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "depends_on" => Ok(EdgeType::DependsOn),
            "triggers" => Ok(EdgeType::Triggers),
            "depends_on_all" => Ok(EdgeType::DependsOnAll),
            "depends_on_any" => Ok(EdgeType::DependsOnAny),
            _ => Err(format!("Invalid edge type: {s}")),
        }
    }
}

/// Category of a capability tool, used for routing and curation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Logs,
    Databases,
    Docs,
    Metrics,
    Systems,
    Incidents,
    Planner,
}

/// Kind of tangible output produced by a step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    LogSnippet,
    QueryResult,
    DocSummary,
    RootCause,
    Remediation,
}
