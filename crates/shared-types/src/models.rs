use serde::{Deserialize, Serialize};

/// Session role controlling which top-level dashboard view renders.
///
/// - `Admin`: staff view with portfolio stats and the project table.
/// - `Client`: single-project progress view. Also the fallback for any
///   unrecognised role string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    #[default]
    Client,
}

impl UserRole {
    /// Parse a role string. Unknown values default to Client.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            _ => UserRole::Client,
        }
    }

    /// Uppercase label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Client => "CLIENT",
        }
    }
}

/// The signed-in user as supplied by the session layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub role: UserRole,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// First character of the name, used as the avatar glyph.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    /// Text before the first space, used in the greeting.
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }
}
