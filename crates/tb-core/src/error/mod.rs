use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid board role: {value} {location}")]
    InvalidBoardRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task status: {value} {location}")]
    InvalidTaskStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task priority: {value} {location}")]
    InvalidTaskPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid notification kind: {value} {location}")]
    InvalidNotificationKind {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
