use serde::{Deserialize, Serialize};

/// Presence status of a member on the authoritative roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    Online,
    Offline,
    /// Any other status text the roster export produced (e.g. "Away")
    Other(String),
}

impl MemberStatus {
    /// Parse a status from its string representation (case-insensitive)
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "online" => MemberStatus::Online,
            "offline" => MemberStatus::Offline,
            _ => MemberStatus::Other(trimmed.to_string()),
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "Online"),
            Self::Offline => write!(f, "Offline"),
            Self::Other(status) => write!(f, "{status}"),
        }
    }
}

/// A single member of the authoritative roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Display name as it appears on the roster
    pub name: String,

    /// Presence status
    pub status: MemberStatus,

    /// Free-form role labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl MemberRecord {
    pub fn new(name: impl Into<String>, status: MemberStatus) -> Self {
        Self {
            name: name.into(),
            status,
            roles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_online(&self) -> bool {
        self.status == MemberStatus::Online
    }

    /// Check whether any of this member's roles appears in `roles`.
    /// Comparison is case-insensitive and ignores surrounding whitespace.
    pub fn has_any_role(&self, roles: &[String]) -> bool {
        let wanted: Vec<String> = roles.iter().map(|r| r.trim().to_lowercase()).collect();

        self.roles
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .any(|own| wanted.contains(&own.to_lowercase()))
    }
}
