//! Office operations

use shared::models::{Office, OfficeCreate};
use sqlx::SqlitePool;

use super::{Lookup, ServiceResult, find_office};
use crate::auth::scope::{Operation, Owner, ensure};
use crate::auth::Identity;
use crate::db::repository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Admin only; the new office starts empty
pub async fn create_office(
    pool: &SqlitePool,
    identity: &Identity,
    data: OfficeCreate,
) -> ServiceResult<Office> {
    ensure(identity, Operation::ManageOffice, &Owner::office(identity.office_id))?;
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;

    let mut conn = pool.acquire().await?;
    let office = repository::office::create(&mut conn, data.name.trim()).await?;
    tracing::info!(office_id = office.id, by = identity.user_id, "Office created");
    Ok(office)
}

/// The caller's own office, the only one any role may see
pub async fn list_offices(pool: &SqlitePool, identity: &Identity) -> ServiceResult<Vec<Office>> {
    ensure(identity, Operation::ReadOffice, &Owner::office(identity.office_id))?;

    let mut conn = pool.acquire().await?;
    let office = repository::office::find_by_id(&mut conn, identity.office_id).await?;
    Ok(office.into_iter().collect())
}

pub async fn delete_office(pool: &SqlitePool, identity: &Identity, id: i64) -> ServiceResult<()> {
    let mut tx = pool.begin().await?;
    let office = find_office(&mut tx, id, Lookup::IncludeDeleted).await?;
    ensure(identity, Operation::ManageOffice, &Owner::office(office.id))?;

    repository::office::soft_delete(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!(office_id = id, by = identity.user_id, "Office deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::*;
    use shared::error::{ErrorCode, ErrorKind};

    #[tokio::test]
    async fn test_list_returns_own_office_only() {
        let pool = pool().await;
        let mine = office(&pool, "Mine").await;
        office(&pool, "Theirs").await;

        let listed = list_offices(&pool, &employee(mine.id, 1, 1)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, mine.id);
    }

    #[tokio::test]
    async fn test_create_requires_admin() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;

        let err = create_office(
            &pool,
            &manager(o.id, 1, 1),
            OfficeCreate {
                name: "New".into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::AdminRequired);

        let created = create_office(
            &pool,
            &admin(o.id),
            OfficeCreate {
                name: "  New  ".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(created.name, "New");
    }

    #[tokio::test]
    async fn test_delete_twice_conflicts() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let caller = admin(o.id);

        delete_office(&pool, &caller, o.id).await.unwrap();
        assert!(list_offices(&pool, &caller).await.unwrap().is_empty());

        let err = delete_office(&pool, &caller, o.id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = delete_office(&pool, &caller, 999).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_other_office_forbidden() {
        let pool = pool().await;
        let mine = office(&pool, "Mine").await;
        let theirs = office(&pool, "Theirs").await;

        let err = delete_office(&pool, &admin(mine.id), theirs.id)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::OfficeMismatch);
    }
}
