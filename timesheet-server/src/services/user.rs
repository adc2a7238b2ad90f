//! User operations
//!
//! Role invariants:
//! - `admin` users carry no employee
//! - `manager` / `employee` users link to a live employee of the same office

use shared::error::{AppError, ErrorCode};
use shared::models::{
    EmployeeCreate, EmployeeWithUser, EmployeeWithUserCreate, Role, User, UserCreate,
};
use sqlx::{SqliteConnection, SqlitePool};

use super::{Lookup, ServiceError, ServiceResult, find_employee, find_office, find_workplace};
use crate::auth::scope::{Operation, Owner, ensure};
use crate::auth::{Identity, password};
use crate::db::repository::{self, user::NewUser};
use crate::utils::validation::{MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_required_text};

fn validate(name: &str, password: &str) -> Result<(), AppError> {
    validate_required_text(name, "name", MAX_NAME_LEN)?;
    validate_required_text(password, "password", MAX_PASSWORD_LEN)
}

fn check_role_link(role: Role, employee_id: Option<i64>) -> Result<(), AppError> {
    match (role.requires_employee(), employee_id) {
        (true, None) => Err(AppError::new(ErrorCode::UserEmployeeRequired)
            .with_detail("role", role.as_str())),
        (false, Some(id)) => Err(AppError::new(ErrorCode::UserEmployeeNotAllowed)
            .with_detail("employee_id", id)),
        _ => Ok(()),
    }
}

pub(crate) fn hash(plain: &str) -> ServiceResult<String> {
    password::hash_password(plain).map_err(|e| ServiceError::Db(e.to_string().into()))
}

/// Insert a user into `office_id` after checking the role/employee invariants
///
/// No scope check: callers either authorized already or are the CLI.
pub async fn insert_user(
    conn: &mut SqliteConnection,
    office_id: i64,
    data: &UserCreate,
) -> ServiceResult<User> {
    validate(&data.name, &data.password)?;
    check_role_link(data.role, data.employee_id)?;
    find_office(conn, office_id, Lookup::Live).await?;

    if let Some(employee_id) = data.employee_id {
        let (_, _, owner) = find_employee(conn, employee_id, Lookup::Live).await?;
        if owner.office_id != office_id {
            return Err(AppError::new(ErrorCode::UserEmployeeOfficeMismatch)
                .with_detail("employee_id", employee_id)
                .into());
        }
    }

    let password_hash = hash(&data.password)?;
    let user = repository::user::create(
        conn,
        &NewUser {
            office_id,
            name: data.name.trim(),
            password_hash: &password_hash,
            role: data.role,
            employee_id: data.employee_id,
        },
    )
    .await?;

    tracing::info!(
        user_id = user.id,
        office_id,
        role = user.role.as_str(),
        "User created"
    );
    Ok(user)
}

/// Admin only, always in the admin's own office
pub async fn create_user(
    pool: &SqlitePool,
    identity: &Identity,
    data: UserCreate,
) -> ServiceResult<User> {
    ensure(identity, Operation::ManageUser, &Owner::office(identity.office_id))?;

    let mut tx = pool.begin().await?;
    let user = insert_user(&mut tx, identity.office_id, &data).await?;
    tx.commit().await?;
    Ok(user)
}

/// Create an employee and its login user together
pub async fn create_employee_with_user(
    pool: &SqlitePool,
    identity: &Identity,
    data: EmployeeWithUserCreate,
) -> ServiceResult<EmployeeWithUser> {
    let mut tx = pool.begin().await?;
    let (workplace, owner) = find_workplace(&mut tx, data.workplace_id, Lookup::Live).await?;
    ensure(identity, Operation::ManageEmployee, &owner)?;
    ensure(identity, Operation::ManageUser, &owner)?;
    check_role_link(data.role, Some(0))?;
    validate(&data.name, &data.password)?;

    let employee = repository::employee::create(
        &mut tx,
        &EmployeeCreate {
            name: data.name.trim().to_string(),
            workplace_id: workplace.id,
        },
    )
    .await?;
    let user = insert_user(
        &mut tx,
        workplace.office_id,
        &UserCreate {
            name: data.name,
            password: data.password,
            role: data.role,
            employee_id: Some(employee.id),
        },
    )
    .await?;
    tx.commit().await?;

    Ok(EmployeeWithUser { employee, user })
}
