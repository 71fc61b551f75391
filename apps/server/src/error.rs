use thiserror::Error;

pub use crate::app::forms::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Venue,
    Artist,
}

impl Entity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Venue => "Venue",
            Self::Artist => "Artist",
        }
    }
}

/// Failures an operation reports to the route that invoked it
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("{} {id} not found", .entity.label())]
    NotFound { entity: Entity, id: i64 },
    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl AppError {
    pub const fn not_found(entity: Entity, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

pub type AppResult<T> = Result<T, AppError>;
