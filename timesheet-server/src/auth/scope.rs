//! 作用域检查 (Scope Guard)
//!
//! 每个业务操作在访问存储之前调用 [`authorize`]。
//! 输入是调用者 [`Identity`]、操作 [`Operation`] 和目标归属链 [`Owner`]，
//! 输出只依赖这三个参数，不访问数据库。
//!
//! | 操作 | admin | manager | employee |
//! |------|-------|---------|----------|
//! | 读取办公室 | 本办公室 | 本办公室 | 本办公室 |
//! | 读取工作场所 / 员工 | 本办公室 | 本办公室 | 仅自己的工作场所 / 自己 |
//! | 列出工作场所 / 员工 | 本办公室 | 本办公室 | 拒绝 |
//! | 创建/删除/调动 | 本办公室 | 拒绝 | 拒绝 |
//! | 按办公室列出工时 | 本办公室 | 拒绝 | 拒绝 |
//! | 按工作场所列出工时 | 本办公室 | 本工作场所 | 拒绝 |
//! | 单个员工的工时 | 本办公室 | 本工作场所 | 仅自己 |

use shared::error::{AppError, ErrorCode};

use super::Identity;
use crate::security_log;

/// Operation being attempted on a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ReadOffice,
    ReadWorkplace,
    ReadEmployee,
    ListWorkplaces,
    ListEmployees,
    ManageOffice,
    ManageWorkplace,
    ManageEmployee,
    ManageUser,
    ListEntriesByOffice,
    ListEntriesByWorkplace,
    /// List, create or delete entries of one employee
    EmployeeEntries,
}

/// Resolved ownership chain of a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    pub office_id: i64,
    pub workplace_id: Option<i64>,
    pub employee_id: Option<i64>,
}

impl Owner {
    pub fn office(office_id: i64) -> Self {
        Self {
            office_id,
            workplace_id: None,
            employee_id: None,
        }
    }

    pub fn workplace(office_id: i64, workplace_id: i64) -> Self {
        Self {
            office_id,
            workplace_id: Some(workplace_id),
            employee_id: None,
        }
    }

    pub fn employee(office_id: i64, workplace_id: i64, employee_id: i64) -> Self {
        Self {
            office_id,
            workplace_id: Some(workplace_id),
            employee_id: Some(employee_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(ErrorCode),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Deny becomes a `Forbidden` error and a security log line
    pub fn into_result(
        self,
        identity: &Identity,
        operation: Operation,
        owner: &Owner,
    ) -> Result<(), AppError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(code) => {
                security_log!(
                    "WARN",
                    "scope_denied",
                    user_id = identity.user_id,
                    role = identity.role.as_str(),
                    operation = format!("{:?}", operation),
                    target_office = owner.office_id,
                    reason = code.message()
                );
                Err(AppError::new(code))
            }
        }
    }
}

fn same(mine: Option<i64>, theirs: Option<i64>) -> bool {
    mine.is_some() && mine == theirs
}

/// Decide whether `identity` may perform `operation` on a target owned by `owner`
pub fn authorize(identity: &Identity, operation: Operation, owner: &Owner) -> Decision {
    use shared::models::Role::{Admin, Employee, Manager};

    if identity.office_id != owner.office_id {
        return Decision::Deny(ErrorCode::OfficeMismatch);
    }

    match (operation, identity.role) {
        (Operation::ReadOffice, _) => Decision::Allow,

        (Operation::ReadWorkplace, Admin | Manager) => Decision::Allow,
        (Operation::ReadWorkplace, Employee) => {
            if same(identity.workplace_id, owner.workplace_id) {
                Decision::Allow
            } else {
                Decision::Deny(ErrorCode::WorkplaceMismatch)
            }
        }

        (Operation::ReadEmployee, Admin | Manager) => Decision::Allow,
        (Operation::ReadEmployee, Employee) => {
            if same(identity.employee_id, owner.employee_id) {
                Decision::Allow
            } else {
                Decision::Deny(ErrorCode::EmployeeMismatch)
            }
        }

        (Operation::ListWorkplaces | Operation::ListEmployees, Admin | Manager) => Decision::Allow,
        (Operation::ListWorkplaces | Operation::ListEmployees, Employee) => {
            Decision::Deny(ErrorCode::PermissionDenied)
        }

        (
            Operation::ManageOffice
            | Operation::ManageWorkplace
            | Operation::ManageEmployee
            | Operation::ManageUser
            | Operation::ListEntriesByOffice,
            Admin,
        ) => Decision::Allow,
        (
            Operation::ManageOffice
            | Operation::ManageWorkplace
            | Operation::ManageEmployee
            | Operation::ManageUser
            | Operation::ListEntriesByOffice,
            Manager | Employee,
        ) => Decision::Deny(ErrorCode::AdminRequired),

        (Operation::ListEntriesByWorkplace, Admin) => Decision::Allow,
        (Operation::ListEntriesByWorkplace, Manager) => {
            if same(identity.workplace_id, owner.workplace_id) {
                Decision::Allow
            } else {
                Decision::Deny(ErrorCode::WorkplaceMismatch)
            }
        }
        (Operation::ListEntriesByWorkplace, Employee) => Decision::Deny(ErrorCode::PermissionDenied),

        (Operation::EmployeeEntries, Admin) => Decision::Allow,
        (Operation::EmployeeEntries, Manager) => {
            if same(identity.workplace_id, owner.workplace_id) {
                Decision::Allow
            } else {
                Decision::Deny(ErrorCode::WorkplaceMismatch)
            }
        }
        (Operation::EmployeeEntries, Employee) => {
            if same(identity.employee_id, owner.employee_id) {
                Decision::Allow
            } else {
                Decision::Deny(ErrorCode::EmployeeMismatch)
            }
        }
    }
}

/// [`authorize`] followed by [`Decision::into_result`]
pub fn ensure(identity: &Identity, operation: Operation, owner: &Owner) -> Result<(), AppError> {
    authorize(identity, operation, owner).into_result(identity, operation, owner)
}
