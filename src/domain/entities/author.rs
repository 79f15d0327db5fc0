use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    pub id: String,
    pub nickname: String,
    pub avatar: String,
}

impl Author {
    pub fn new(id: impl Into<String>, nickname: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nickname: nickname.into(),
            avatar: avatar.into(),
        }
    }
}
