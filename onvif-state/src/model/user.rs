//! Device user accounts

use onvif_api::types::{User as WireUser, UserLevel as WireUserLevel};
use serde::{Deserialize, Serialize};

remap_enum! {
    /// Access level of a device account
    pub enum UserLevel <=> WireUserLevel {
        Administrator <=> Administrator,
        Operator <=> Operator,
        User <=> User,
        Anonymous <=> Anonymous,
        Extended <=> Extended,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub level: UserLevel,
}

impl From<&WireUser> for User {
    fn from(src: &WireUser) -> Self {
        Self {
            username: src.username.clone(),
            password: src.password.clone(),
            level: src.user_level.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Users {
    pub users: Vec<User>,
}

impl Users {
    pub fn primary(&self) -> Option<&User> {
        self.users.first()
    }
}

impl From<&[WireUser]> for Users {
    fn from(src: &[WireUser]) -> Self {
        Self {
            users: src.iter().map(User::from).collect(),
        }
    }
}
