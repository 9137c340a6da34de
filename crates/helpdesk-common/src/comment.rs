//! Comment entity

use crate::actor::Actor;
use crate::ids::{ActorId, CommentId, TicketId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a ticket.
///
/// Comments have no independent lifecycle: visibility follows the parent
/// ticket's access rules, and deletion is restricted to the author or an
/// admin. There is no comment update operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment id
    pub id: CommentId,
    /// Author; required, immutable
    pub author: ActorId,
    /// Parent ticket; required
    pub ticket: TicketId,
    /// Comment text
    pub body: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Whether `actor` authored this comment
    pub fn is_author(&self, actor: &Actor) -> bool {
        self.author == actor.id
    }
}
