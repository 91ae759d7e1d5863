use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid user id: {value} {location}")]
    InvalidUserId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid conversation id: {value} {location}")]
    InvalidConversationId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid notification type: {value} {location}")]
    InvalidNotificationType {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
