use uuid::Uuid;

/// Identity resolved from a bearer token for the duration of one request.
/// Use cases receive it explicitly; it is never stored process-wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolicyViolation {
    #[error("admin privileges required")]
    AdminRequired,

    #[error("operation restricted to the resource owner")]
    OwnerRequired,
}

impl Actor {
    /// Movie mutations and the user directory listing.
    pub fn require_admin(&self) -> Result<(), PolicyViolation> {
        if self.is_admin {
            Ok(())
        } else {
            Err(PolicyViolation::AdminRequired)
        }
    }

    /// Profile and review mutations, watchlist reads: the owner may act on
    /// their own resource, an admin on anyone's.
    pub fn require_self_or_admin(&self, target_user_id: Uuid) -> Result<(), PolicyViolation> {
        if self.id == target_user_id || self.is_admin {
            Ok(())
        } else {
            Err(PolicyViolation::OwnerRequired)
        }
    }

    /// Impersonation guard for payloads that declare a `user_id`: the
    /// declared id must be the actor's own. Admins do not bypass this —
    /// even an admin cannot write a review or watchlist entry as someone
    /// else.
    pub fn require_self(&self, declared_user_id: Uuid) -> Result<(), PolicyViolation> {
        if self.id == declared_user_id {
            Ok(())
        } else {
            Err(PolicyViolation::OwnerRequired)
        }
    }
}
