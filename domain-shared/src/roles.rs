use crate::discord::{RoleId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-facing shape of a new role.
///
/// `roleName` is renamed to Discord's `name` before it goes on the wire; every
/// other field (color, permissions, hoist, ...) is forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCreateRequest {
    #[serde(rename = "roleName")]
    pub role_name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RoleCreateRequest {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub user_id: UserId,
    pub role_id: RoleId,
}

impl RoleAssignment {
    pub fn new(user_id: UserId, role_id: RoleId) -> Self {
        Self { user_id, role_id }
    }
}

/// Projection of a guild role; every other field Discord sends is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub id: RoleId,
    pub name: String,
}
