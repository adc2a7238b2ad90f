//! Monthly report feed
//!
//! One row per live entry of a workplace within a calendar month, in
//! insertion order. Spreadsheet/CSV rendering consumes these rows elsewhere.

use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use shared::models::{ReportQuery, ReportRow};
use sqlx::SqlitePool;

use super::{Lookup, ServiceResult, find_workplace};
use crate::auth::scope::{Operation, ensure};
use crate::auth::Identity;
use crate::db::repository;
use crate::entries::reported_hours;

/// `[first day of month, first day of next month)`
fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let from = NaiveDate::from_ymd_opt(year, month, 1)?;
    let until = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((from, until))
}

pub async fn monthly_report(
    pool: &SqlitePool,
    identity: &Identity,
    workplace_id: i64,
    query: ReportQuery,
) -> ServiceResult<Vec<ReportRow>> {
    let mut conn = pool.acquire().await?;
    let (_, owner) = find_workplace(&mut conn, workplace_id, Lookup::Live).await?;
    ensure(identity, Operation::ListEntriesByWorkplace, &owner)?;

    let (from, until) = month_bounds(query.year, query.month).ok_or_else(|| {
        AppError::new(ErrorCode::InvalidMonth)
            .with_detail("year", query.year)
            .with_detail("month", query.month)
    })?;

    let views =
        repository::work_entry::list_by_workplace_between(&mut conn, workplace_id, from, until)
            .await?;
    Ok(views
        .into_iter()
        .map(|view| ReportRow {
            hours: reported_hours(&view.entry.payload),
            date: view.entry.date,
            employee_name: view.employee_name,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::*;
    use crate::services::work_entry::create_work_entry;
    use shared::error::ErrorKind;
    use shared::models::{WorkEntryInput, WorkType};

    #[test]
    fn test_month_bounds() {
        let (from, until) = month_bounds(2024, 12).unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(until, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(month_bounds(2024, 0).is_none());
        assert!(month_bounds(2024, 13).is_none());
    }

    #[tokio::test]
    async fn test_time_report_uses_duration() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let w = workplace(&pool, o.id, WorkType::Time).await;
        let e = employee_in(&pool, w.id, "Alice").await;
        let caller = admin(o.id);

        for (date, start, end) in [
            ("2024-01-05T00:00:00.000+09:00", "2024-01-04T23:00:00.000Z", "2024-01-05T08:00:00.000Z"),
            ("2024-02-01T00:00:00.000+09:00", "2024-01-31T23:00:00.000Z", "2024-02-01T03:30:00.000Z"),
        ] {
            create_work_entry(
                &pool,
                &caller,
                WorkEntryInput {
                    employee_id: e.id,
                    workplace_id: w.id,
                    date: date.into(),
                    start_time: Some(start.into()),
                    end_time: Some(end.into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }

        let rows = monthly_report(&pool, &caller, w.id, ReportQuery { year: 2024, month: 1 })
            .await
            .unwrap();
        assert_eq!(
            rows,
            vec![ReportRow {
                employee_name: "Alice".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                hours: 9,
            }]
        );

        let rows = monthly_report(&pool, &caller, w.id, ReportQuery { year: 2024, month: 2 })
            .await
            .unwrap();
        assert_eq!(rows[0].hours, 4);
    }

    #[tokio::test]
    async fn test_invalid_month_and_scope() {
        let pool = pool().await;
        let o = office(&pool, "O1").await;
        let w = workplace(&pool, o.id, WorkType::Attendance).await;

        let err = monthly_report(&pool, &admin(o.id), w.id, ReportQuery { year: 2024, month: 13 })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidMonth);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = monthly_report(
            &pool,
            &employee(o.id, w.id, 1),
            w.id,
            ReportQuery { year: 2024, month: 1 },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }
}
