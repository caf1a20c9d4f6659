use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Closed authorization tiers. The role column is stored as TEXT but the
/// predicate over it stays exhaustive and statically checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Viewer,
    Editor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Viewer => "Viewer",
            Role::Editor => "Editor",
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Viewer" => Ok(Role::Viewer),
            "Editor" => Ok(Role::Editor),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
}
