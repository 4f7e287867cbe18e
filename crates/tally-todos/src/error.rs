//! Todo error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Todo text cannot be empty")]
    EmptyText,
}
