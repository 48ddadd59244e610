//! Query/answer/context primitives and the message trace.

use std::collections::HashMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Active working state of the system at a given step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Context {
    pub id: String,

    pub content: String,

    /// Ephemeral reasoning state or variables
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub cognitive: HashMap<String, String>,

    /// Environment state such as paths, files or endpoints
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub workspace: HashMap<String, String>,

    /// Persistent facts or goals
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub knowledge: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub logs: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metrics: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub systems: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub incidents: HashMap<String, String>,
}

/// The user's or planner's request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
    pub id: String,

    pub content: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

/// The system's or agent's answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Answer {
    pub id: String,

    pub content: String,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

/// One entry in an interaction's message trace. Generalizes both queries and
/// answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    pub id: String,

    /// Originator: user, planner, agent, etc.
    pub role: String,

    pub content: String,

    pub step_id: String,

    pub agent_id: String,

    pub sequence: i64,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}
