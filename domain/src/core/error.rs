//! Domain error types

use crate::party::PARTIES_PER_SCALE;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Party count overflow: {0} * {per} parties is too many", per = PARTIES_PER_SCALE)]
    PartyCountOverflow(u64),
}
