use serde::Serialize;

/// Granularity of library permission requested from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    AddOnly,
    ReadWrite,
}

impl Default for AccessLevel {
    fn default() -> Self {
        AccessLevel::ReadWrite
    }
}

/// Outcome reported by the store's authorization prompt.
///
/// `Other` absorbs statuses introduced by future platform versions; the
/// facade treats those as granted rather than failing on values it does not
/// recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    NotDetermined,
    Authorized,
    Limited,
    Denied,
    Restricted,
    Other(i32),
}

impl AuthorizationStatus {
    pub fn is_granted(&self) -> bool {
        match self {
            AuthorizationStatus::Authorized | AuthorizationStatus::Limited => true,
            AuthorizationStatus::Denied
            | AuthorizationStatus::NotDetermined
            | AuthorizationStatus::Restricted => false,
            AuthorizationStatus::Other(_) => true,
        }
    }
}
