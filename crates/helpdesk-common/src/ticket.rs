//! Ticket aggregate

use crate::actor::Actor;
use crate::error::DomainError;
use crate::ids::{ActorId, TicketId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticket lifecycle status.
///
/// `Closed` is terminal: no transition leaves it except by admin override.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Filed, not yet picked up
    #[default]
    Open,
    /// An agent is working the ticket
    InProgress,
    /// The agent considers the ticket done; awaiting requester acceptance
    Resolved,
    /// Accepted and closed
    Closed,
}

impl TicketStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    /// Wire/storage name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OPEN" => Ok(TicketStatus::Open),
            "IN_PROGRESS" => Ok(TicketStatus::InProgress),
            "RESOLVED" => Ok(TicketStatus::Resolved),
            "CLOSED" => Ok(TicketStatus::Closed),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

/// Ticket priority
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    /// Low
    Low,
    /// Default priority
    #[default]
    Medium,
    /// High
    High,
}

impl FromStr for TicketPriority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LOW" => Ok(TicketPriority::Low),
            "MEDIUM" => Ok(TicketPriority::Medium),
            "HIGH" => Ok(TicketPriority::High),
            _ => Err(DomainError::InvalidPriority(s.to_string())),
        }
    }
}

/// A support ticket as loaded from storage.
///
/// The policy core never fetches or persists tickets; it receives a fully
/// populated value, and approved mutations are applied to a clone which the
/// caller persists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket id
    pub id: TicketId,
    /// Short subject line
    pub subject: String,
    /// Free-form description
    pub description: String,
    /// Lifecycle status
    pub status: TicketStatus,
    /// Priority
    pub priority: TicketPriority,
    /// Creator; required, immutable after creation
    pub created_by: ActorId,
    /// Assigned agent, if any. Invariant: references a support agent.
    pub assigned_agent: Option<ActorId>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Whether `actor` created this ticket
    pub fn is_creator(&self, actor: &Actor) -> bool {
        self.created_by == actor.id
    }

    /// Whether `actor` is the assigned agent on this ticket
    pub fn is_assigned_agent(&self, actor: &Actor) -> bool {
        self.assigned_agent == Some(actor.id)
    }

    /// Attach an agent.
    ///
    /// Assignment to an `Open` ticket advances it to `InProgress` in the
    /// same step; any other status is left untouched. Role validation of
    /// the agent happens in the orchestrator before this is reached.
    pub fn assign(&mut self, agent_id: ActorId) {
        self.assigned_agent = Some(agent_id);
        if self.status == TicketStatus::Open {
            self.status = TicketStatus::InProgress;
        }
        self.touch();
    }

    /// Set the lifecycle status
    pub fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
        self.touch();
    }

    /// Apply a partial edit; absent fields are left untouched
    pub fn apply_patch(&mut self, patch: &TicketPatch) {
        if let Some(subject) = &patch.subject {
            self.subject = subject.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        self.touch();
    }

    /// Stamp `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Partial ticket edit: `None` means "leave as is"
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketPatch {
    /// New subject, if any
    pub subject: Option<String>,
    /// New description, if any
    pub description: Option<String>,
    /// New priority, if any
    pub priority: Option<TicketPriority>,
}
