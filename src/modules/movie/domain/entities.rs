use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Catalogue entry. Every field is public data, so the entity doubles as
/// the outward DTO.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
