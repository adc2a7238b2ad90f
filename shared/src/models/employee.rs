//! Employee Model

use serde::{Deserialize, Serialize};

use super::user::Role;

/// Employee entity (business principal)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub workplace_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub workplace_id: i64,
}

/// Transfer employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeTransfer {
    pub workplace_id: i64,
}

/// Create an employee together with its login user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeWithUserCreate {
    pub name: String,
    pub workplace_id: i64,
    pub password: String,
    /// `manager` or `employee`
    pub role: Role,
}

/// Employee plus the user created alongside it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeWithUser {
    pub employee: Employee,
    pub user: super::user::User,
}
