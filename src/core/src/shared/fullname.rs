use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
}

impl FullName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        FullName {
            first_name: first_name.into(),
            last_name: last_name.into(),
            nickname: None,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        let nickname = nickname.into();
        self.nickname = if nickname.is_empty() { None } else { Some(nickname) };
        self
    }

    /// Nickname when one is set, otherwise "first last".
    pub fn display_name(&self) -> String {
        match &self.nickname {
            Some(nickname) => nickname.clone(),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.display_name())
    }
}
