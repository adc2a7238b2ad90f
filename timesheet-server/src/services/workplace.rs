//! Workplace operations

use shared::error::{AppError, ErrorCode};
use shared::models::{Workplace, WorkplaceCreate};
use sqlx::SqlitePool;

use super::{Lookup, ServiceResult, find_office, find_workplace};
use crate::auth::scope::{Operation, Owner, ensure};
use crate::auth::Identity;
use crate::db::repository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Admin only, inside the admin's own office
///
/// A declared `office_id` other than the caller's is rejected as input,
/// after the role check.
pub async fn create_workplace(
    pool: &SqlitePool,
    identity: &Identity,
    data: WorkplaceCreate,
) -> ServiceResult<Workplace> {
    ensure(identity, Operation::ManageWorkplace, &Owner::office(identity.office_id))?;
    if data.office_id != identity.office_id {
        return Err(AppError::new(ErrorCode::CrossOfficeWorkplace)
            .with_detail("office_id", data.office_id)
            .into());
    }
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;

    let mut tx = pool.begin().await?;
    find_office(&mut tx, data.office_id, Lookup::Live).await?;
    let workplace = repository::workplace::create(
        &mut tx,
        &WorkplaceCreate {
            name: data.name.trim().to_string(),
            ..data
        },
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        workplace_id = workplace.id,
        office_id = workplace.office_id,
        work_type = workplace.work_type.as_str(),
        "Workplace created"
    );
    Ok(workplace)
}

pub async fn get_workplace(
    pool: &SqlitePool,
    identity: &Identity,
    id: i64,
) -> ServiceResult<Workplace> {
    let mut conn = pool.acquire().await?;
    let (workplace, owner) = find_workplace(&mut conn, id, Lookup::Live).await?;
    ensure(identity, Operation::ReadWorkplace, &owner)?;
    Ok(workplace)
}

pub async fn list_workplaces(
    pool: &SqlitePool,
    identity: &Identity,
    office_id: i64,
) -> ServiceResult<Vec<Workplace>> {
    let mut conn = pool.acquire().await?;
    find_office(&mut conn, office_id, Lookup::Live).await?;
    ensure(identity, Operation::ListWorkplaces, &Owner::office(office_id))?;
    Ok(repository::workplace::list_by_office(&mut conn, office_id).await?)
}

pub async fn delete_workplace(pool: &SqlitePool, identity: &Identity, id: i64) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;
    let (_, owner) = find_workplace(&mut tx, id, Lookup::IncludeDeleted).await?;
    ensure(identity, Operation::ManageWorkplace, &owner)?;

    repository::workplace::soft_delete(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!(workplace_id = id, by = identity.user_id, "Workplace deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::*;
    use shared::error::ErrorKind;
    use shared::models::WorkType;

    fn create(office_id: i64) -> WorkplaceCreate {
        WorkplaceCreate {
            name: "Warehouse".into(),
            office_id,
            work_type: WorkType::Hours,
        }
    }

    #[tokio::test]
    async fn test_cross_office_creation_rejected() {
        let pool = pool().await;
        let mine = office(&pool, "Mine").await;
        let theirs = office(&pool, "Theirs").await;

        let err = create_workplace(&pool, &admin(mine.id), create(theirs.id))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.code(), ErrorCode::CrossOfficeWorkplace);

        let mut conn = pool.acquire().await.unwrap();
        assert!(repository::workplace::list_by_office(&mut conn, theirs.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_non_admin_forbidden_before_office_check() {
        let pool = pool().await;
        let mine = office(&pool, "Mine").await;

        let err = create_workplace(&pool, &manager(mine.id, 1, 1), create(mine.id + 1))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_visibility_by_role() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let w1 = create_workplace(&pool, &admin(o.id), create(o.id)).await.unwrap();
        let w2 = workplace(&pool, o.id, WorkType::Time).await;

        let mgr = manager(o.id, w1.id, 1);
        assert_eq!(list_workplaces(&pool, &mgr, o.id).await.unwrap().len(), 2);
        assert!(get_workplace(&pool, &mgr, w2.id).await.is_ok());

        let emp = employee(o.id, w1.id, 1);
        assert!(get_workplace(&pool, &emp, w1.id).await.is_ok());
        let err = get_workplace(&pool, &emp, w2.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        let err = list_workplaces(&pool, &emp, o.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_deleted_workplace_invisible() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let w = workplace(&pool, o.id, WorkType::Attendance).await;
        let caller = admin(o.id);

        delete_workplace(&pool, &caller, w.id).await.unwrap();
        let err = get_workplace(&pool, &caller, w.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::WorkplaceNotFound);
        assert!(list_workplaces(&pool, &caller, o.id).await.unwrap().is_empty());

        let err = delete_workplace(&pool, &caller, w.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }
}
