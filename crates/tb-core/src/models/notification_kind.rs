use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    System,
    Assignment,
    Comment,
    Invitation,
    Mention,
    DueDate,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Assignment => "assignment",
            Self::Comment => "comment",
            Self::Invitation => "invitation",
            Self::Mention => "mention",
            Self::DueDate => "due_date",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "system" => Ok(Self::System),
            "assignment" => Ok(Self::Assignment),
            "comment" => Ok(Self::Comment),
            "invitation" => Ok(Self::Invitation),
            "mention" => Ok(Self::Mention),
            "due_date" => Ok(Self::DueDate),
            _ => Err(CoreError::InvalidNotificationKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
