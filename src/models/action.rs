use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ActionType {
    Start,
    End,
}

impl ActionType {
    pub const ALL: [ActionType; 2] = [ActionType::Start, ActionType::End];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ActionType::Start => "START",
            ActionType::End => "END",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "START" => Some(ActionType::Start),
            "END" => Some(ActionType::End),
            _ => None,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, ActionType::Start)
    }
}

impl FromStr for ActionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(&s.trim().to_uppercase()).ok_or_else(|| AppError::InvalidAction(s.into()))
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
