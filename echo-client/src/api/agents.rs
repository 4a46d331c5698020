//! Agent endpoints: list available agents and run one to completion.

use echo_types::ClientError;
use serde::{Deserialize, Serialize};

use crate::client::EchoClient;

/// An agent the backend can run.
#[derive(Debug, Clone, Deserialize)]
pub struct Agent {
    /// Identifier passed to [`EchoClient::run_agent`].
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// What the agent does.
    pub description: String,
    /// Availability: `active` or `coming_soon`.
    pub status: String,
}

/// Request body for running an agent.
#[derive(Debug, Serialize)]
struct AgentRunRequest<'a> {
    agent_id: &'a str,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a serde_json::Value>,
}

/// Result of one agent run.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentRunOutcome {
    /// What the agent produced.
    pub result: AgentReport,
    /// Backend status string, `success` on success.
    pub status: String,
}

/// An agent's findings.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentReport {
    /// Prose summary of the run.
    pub summary: String,
    /// Task titles the agent proposes; each can seed a
    /// [`NewTask`](crate::api::NewTask).
    #[serde(default)]
    pub suggested_tasks: Vec<String>,
}

impl EchoClient {
    /// List the agents the backend offers.
    pub async fn agents(&self) -> Result<Vec<Agent>, ClientError> {
        self.get_json("/api/agents/").await
    }

    /// Run the agent with the given id on `input` and wait for its report.
    ///
    /// `context` is passed through to the agent untouched; use `None` unless
    /// the agent documents what it expects.
    pub async fn run_agent(
        &self,
        agent_id: &str,
        input: &str,
        context: Option<&serde_json::Value>,
    ) -> Result<AgentRunOutcome, ClientError> {
        let body = AgentRunRequest {
            agent_id,
            input,
            context,
        };
        self.post_json("/api/agents/run", &body).await
    }
}
