use crate::integrity::{self, DuplicateKey};
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    /// A store integrity rule rejected the write. Carries the offending
    /// column and value when they could be recovered from the store message.
    #[error("{}", integrity::constraint_detail(.0.as_ref()))]
    ConstraintViolation(Option<DuplicateKey>),

    #[error("Internal error: {0}")]
    Internal(String),
}
