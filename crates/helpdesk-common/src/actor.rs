//! Actors and roles

use crate::error::DomainError;
use crate::ids::ActorId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Actor role.
///
/// Closed enumeration: `Admin` is the superset-permission role, while
/// `SupportAgent` and `User` are not comparable - each has a distinct
/// permission profile keyed off its relationship to the ticket (assignee vs
/// creator), not rank. Unknown role strings are rejected at the boundary
/// with [`DomainError::InvalidRole`] rather than silently defaulting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular requester; rights are scoped to tickets they created
    User,
    /// Support agent; rights are scoped to tickets assigned to them
    SupportAgent,
    /// Administrator with override authority
    Admin,
}

impl Role {
    /// All roles, in declaration order
    pub const ALL: [Role; 3] = [Role::User, Role::SupportAgent, Role::Admin];

    /// Wire/storage name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::SupportAgent => "SUPPORT_AGENT",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "SUPPORT_AGENT" => Ok(Role::SupportAgent),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

/// An authenticated party performing an operation.
///
/// Identity is resolved upstream (token verification is not this crate's
/// concern); for policy purposes an actor is solely an id and a role,
/// immutable for the duration of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Actor id
    pub id: ActorId,
    /// Actor role
    pub role: Role,
}

impl Actor {
    /// Create an actor
    pub fn new(id: ActorId, role: Role) -> Self {
        Self { id, role }
    }

    /// Whether this actor holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this actor holds the support-agent role
    pub fn is_agent(&self) -> bool {
        self.role == Role::SupportAgent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("support_agent".parse::<Role>().unwrap(), Role::SupportAgent);
        assert_eq!("User".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = "SUPERVISOR".parse::<Role>().unwrap_err();
        assert_eq!(err, DomainError::InvalidRole("SUPERVISOR".to_string()));
    }

    #[test]
    fn test_role_serde_uses_wire_names() {
        let json = serde_json::to_string(&Role::SupportAgent).unwrap();
        assert_eq!(json, "\"SUPPORT_AGENT\"");
        // Unknown variants must fail deserialization, not default
        assert!(serde_json::from_str::<Role>("\"MANAGER\"").is_err());
    }
}
