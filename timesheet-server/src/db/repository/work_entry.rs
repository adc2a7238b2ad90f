//! Work Entry Repository
//!
//! The only place where [`WorkPayload`] meets the table: one payload enum on
//! the Rust side, three nullable columns (`hours`, `start_time`/`end_time`,
//! `attendance`) on the SQLite side. Times are stored as Unix microseconds.

use super::{RepoError, RepoResult, soft_delete_row};
use chrono::{DateTime, NaiveDate, Utc};
use shared::models::{WorkEntry, WorkEntryView, WorkPayload};
use sqlx::SqliteConnection;

/// Raw table row
#[derive(Debug, Clone, sqlx::FromRow)]
struct WorkEntryRow {
    id: i64,
    employee_id: i64,
    workplace_id: i64,
    date: NaiveDate,
    hours: Option<i64>,
    start_time: Option<i64>,
    end_time: Option<i64>,
    attendance: Option<bool>,
    comment: Option<String>,
    created_at: i64,
    updated_at: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct WorkEntryViewRow {
    #[sqlx(flatten)]
    entry: WorkEntryRow,
    employee_name: String,
    workplace_name: String,
}

/// Column tuple for one payload
#[derive(Debug, Default, PartialEq, Eq)]
struct PayloadColumns {
    hours: Option<i64>,
    start_time: Option<i64>,
    end_time: Option<i64>,
    attendance: Option<bool>,
}

impl From<&WorkPayload> for PayloadColumns {
    fn from(payload: &WorkPayload) -> Self {
        match payload {
            WorkPayload::Hours { hours } => Self {
                hours: Some(i64::from(*hours)),
                ..Default::default()
            },
            WorkPayload::Time {
                start_time,
                end_time,
            } => Self {
                start_time: Some(start_time.timestamp_micros()),
                end_time: Some(end_time.timestamp_micros()),
                ..Default::default()
            },
            WorkPayload::Attendance => Self {
                attendance: Some(true),
                ..Default::default()
            },
        }
    }
}

fn micros_to_utc(id: i64, micros: i64) -> RepoResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| RepoError::Database(format!("work_entry {id}: time out of range")))
}

impl TryFrom<WorkEntryRow> for WorkEntry {
    type Error = RepoError;

    fn try_from(row: WorkEntryRow) -> Result<Self, Self::Error> {
        let payload = match (row.hours, row.start_time, row.end_time, row.attendance) {
            (Some(hours), None, None, None) => {
                let hours = i16::try_from(hours).map_err(|_| {
                    RepoError::Database(format!("work_entry {}: hours out of range", row.id))
                })?;
                WorkPayload::Hours { hours }
            }
            (None, Some(start), Some(end), None) => WorkPayload::Time {
                start_time: micros_to_utc(row.id, start)?,
                end_time: micros_to_utc(row.id, end)?,
            },
            (None, None, None, Some(true)) => WorkPayload::Attendance,
            _ => {
                return Err(RepoError::Database(format!(
                    "work_entry {}: payload columns do not form one shape",
                    row.id
                )));
            }
        };

        Ok(WorkEntry {
            id: row.id,
            employee_id: row.employee_id,
            workplace_id: row.workplace_id,
            date: row.date,
            payload,
            comment: row.comment,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<WorkEntryViewRow> for WorkEntryView {
    type Error = RepoError;

    fn try_from(row: WorkEntryViewRow) -> Result<Self, Self::Error> {
        Ok(WorkEntryView {
            entry: row.entry.try_into()?,
            employee_name: row.employee_name,
            workplace_name: row.workplace_name,
        })
    }
}

/// Insert parameters, already validated by the codec
#[derive(Debug, Clone)]
pub struct NewWorkEntry {
    pub employee_id: i64,
    pub workplace_id: i64,
    pub date: NaiveDate,
    pub payload: WorkPayload,
    pub comment: Option<String>,
}

const COLUMNS: &str = "id, employee_id, workplace_id, date, hours, start_time, end_time, attendance, comment, created_at, updated_at";

const VIEW_SELECT: &str = "SELECT we.id, we.employee_id, we.workplace_id, we.date, we.hours, \
     we.start_time, we.end_time, we.attendance, we.comment, we.created_at, we.updated_at, \
     e.name AS employee_name, w.name AS workplace_name \
     FROM work_entry we \
     JOIN employee e ON e.id = we.employee_id \
     JOIN workplace w ON w.id = we.workplace_id";

/// Entry, its employee and its workplace all live
const VIEW_LIVE: &str = "we.deleted_at IS NULL AND e.deleted_at IS NULL AND w.deleted_at IS NULL";

pub async fn create(conn: &mut SqliteConnection, data: &NewWorkEntry) -> RepoResult<WorkEntry> {
    let now = shared::util::now_millis();
    let columns = PayloadColumns::from(&data.payload);
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO work_entry (employee_id, workplace_id, date, hours, start_time, end_time, attendance, comment, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9) RETURNING id",
    )
    .bind(data.employee_id)
    .bind(data.workplace_id)
    .bind(data.date)
    .bind(columns.hours)
    .bind(columns.start_time)
    .bind(columns.end_time)
    .bind(columns.attendance)
    .bind(&data.comment)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create work entry".into()))
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<WorkEntry>> {
    let sql = format!("SELECT {COLUMNS} FROM work_entry WHERE id = ? AND deleted_at IS NULL");
    let row = sqlx::query_as::<_, WorkEntryRow>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    row.map(WorkEntry::try_from).transpose()
}

pub async fn find_by_id_any(
    conn: &mut SqliteConnection,
    id: i64,
) -> RepoResult<Option<WorkEntry>> {
    let sql = format!("SELECT {COLUMNS} FROM work_entry WHERE id = ?");
    let row = sqlx::query_as::<_, WorkEntryRow>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    row.map(WorkEntry::try_from).transpose()
}

pub async fn soft_delete(conn: &mut SqliteConnection, id: i64) -> RepoResult<()> {
    soft_delete_row(conn, "work_entry", id).await
}

/// Soft delete all live entries of an employee, returns the count
pub async fn soft_delete_by_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> RepoResult<u64> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE work_entry SET deleted_at = ?1, updated_at = ?1 WHERE employee_id = ?2 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(employee_id)
    .execute(&mut *conn)
    .await?;
    Ok(rows.rows_affected())
}

async fn fetch_views(
    conn: &mut SqliteConnection,
    filter: &str,
    bind: i64,
) -> RepoResult<Vec<WorkEntryView>> {
    let sql = format!("{VIEW_SELECT} WHERE {filter} AND {VIEW_LIVE} ORDER BY we.id");
    let rows = sqlx::query_as::<_, WorkEntryViewRow>(&sql)
        .bind(bind)
        .fetch_all(&mut *conn)
        .await?;
    rows.into_iter().map(WorkEntryView::try_from).collect()
}

pub async fn list_by_office(
    conn: &mut SqliteConnection,
    office_id: i64,
) -> RepoResult<Vec<WorkEntryView>> {
    fetch_views(conn, "w.office_id = ?", office_id).await
}

pub async fn list_by_workplace(
    conn: &mut SqliteConnection,
    workplace_id: i64,
) -> RepoResult<Vec<WorkEntryView>> {
    fetch_views(conn, "we.workplace_id = ?", workplace_id).await
}

pub async fn list_by_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> RepoResult<Vec<WorkEntryView>> {
    fetch_views(conn, "we.employee_id = ?", employee_id).await
}

/// Live entries of a workplace dated in `[from, until)`
pub async fn list_by_workplace_between(
    conn: &mut SqliteConnection,
    workplace_id: i64,
    from: NaiveDate,
    until: NaiveDate,
) -> RepoResult<Vec<WorkEntryView>> {
    let sql = format!(
        "{VIEW_SELECT} WHERE we.workplace_id = ? AND we.date >= ? AND we.date < ? \
         AND {VIEW_LIVE} ORDER BY we.id"
    );
    let rows = sqlx::query_as::<_, WorkEntryViewRow>(&sql)
        .bind(workplace_id)
        .bind(from)
        .bind(until)
        .fetch_all(&mut *conn)
        .await?;
    rows.into_iter().map(WorkEntryView::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{employee, office, testing::test_pool, workplace};
    use shared::models::{EmployeeCreate, WorkType, WorkplaceCreate};
    use shared::util::parse_entry_time;

    struct Fixture {
        office_id: i64,
        workplace_id: i64,
        employee_id: i64,
    }

    async fn fixture(conn: &mut SqliteConnection, work_type: WorkType) -> Fixture {
        let o = office::create(conn, "O1").await.unwrap();
        let w = workplace::create(
            conn,
            &WorkplaceCreate {
                name: "Site".into(),
                office_id: o.id,
                work_type,
            },
        )
        .await
        .unwrap();
        let e = employee::create(
            conn,
            &EmployeeCreate {
                name: "Alice".into(),
                workplace_id: w.id,
            },
        )
        .await
        .unwrap();
        Fixture {
            office_id: o.id,
            workplace_id: w.id,
            employee_id: e.id,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[tokio::test]
    async fn test_hours_payload_roundtrip() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let f = fixture(&mut conn, WorkType::Hours).await;

        let entry = create(
            &mut conn,
            &NewWorkEntry {
                employee_id: f.employee_id,
                workplace_id: f.workplace_id,
                date: day(5),
                payload: WorkPayload::Hours { hours: 8 },
                comment: Some("late shift".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(entry.payload, WorkPayload::Hours { hours: 8 });
        assert_eq!(entry.date, day(5));
        assert_eq!(entry.comment.as_deref(), Some("late shift"));
    }

    #[tokio::test]
    async fn test_time_payload_keeps_instants() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let f = fixture(&mut conn, WorkType::Time).await;

        let start = parse_entry_time("2024-01-05T08:00:00.000Z").unwrap();
        let end = parse_entry_time("2024-01-05T17:00:00.000Z").unwrap();
        let entry = create(
            &mut conn,
            &NewWorkEntry {
                employee_id: f.employee_id,
                workplace_id: f.workplace_id,
                date: day(5),
                payload: WorkPayload::Time {
                    start_time: start,
                    end_time: end,
                },
                comment: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(
            entry.payload,
            WorkPayload::Time {
                start_time: start,
                end_time: end
            }
        );
    }

    #[tokio::test]
    async fn test_views_are_scoped_and_skip_deleted() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let f = fixture(&mut conn, WorkType::Attendance).await;

        let mut ids = Vec::new();
        for d in [3, 1, 2] {
            let entry = create(
                &mut conn,
                &NewWorkEntry {
                    employee_id: f.employee_id,
                    workplace_id: f.workplace_id,
                    date: day(d),
                    payload: WorkPayload::Attendance,
                    comment: None,
                },
            )
            .await
            .unwrap();
            ids.push(entry.id);
        }
        soft_delete(&mut conn, ids[1]).await.unwrap();

        let by_office = list_by_office(&mut conn, f.office_id).await.unwrap();
        let listed: Vec<i64> = by_office.iter().map(|v| v.entry.id).collect();
        assert_eq!(listed, vec![ids[0], ids[2]]);
        assert_eq!(by_office[0].employee_name, "Alice");
        assert_eq!(by_office[0].workplace_name, "Site");

        assert_eq!(list_by_workplace(&mut conn, f.workplace_id).await.unwrap().len(), 2);
        assert_eq!(list_by_employee(&mut conn, f.employee_id).await.unwrap().len(), 2);
        assert!(list_by_office(&mut conn, f.office_id + 1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_views_hide_entries_under_deleted_workplace() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let f = fixture(&mut conn, WorkType::Hours).await;
        create(
            &mut conn,
            &NewWorkEntry {
                employee_id: f.employee_id,
                workplace_id: f.workplace_id,
                date: day(5),
                payload: WorkPayload::Hours { hours: 7 },
                comment: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(list_by_office(&mut conn, f.office_id).await.unwrap().len(), 1);

        workplace::soft_delete(&mut conn, f.workplace_id).await.unwrap();

        assert!(list_by_office(&mut conn, f.office_id).await.unwrap().is_empty());
        assert!(list_by_workplace(&mut conn, f.workplace_id).await.unwrap().is_empty());
        assert!(list_by_employee(&mut conn, f.employee_id).await.unwrap().is_empty());
        assert!(
            list_by_workplace_between(&mut conn, f.workplace_id, day(1), day(20))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_views_hide_entries_of_deleted_employee() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let f = fixture(&mut conn, WorkType::Attendance).await;
        create(
            &mut conn,
            &NewWorkEntry {
                employee_id: f.employee_id,
                workplace_id: f.workplace_id,
                date: day(5),
                payload: WorkPayload::Attendance,
                comment: None,
            },
        )
        .await
        .unwrap();

        // row-level delete only, entries stay live
        soft_delete_row(&mut conn, "employee", f.employee_id).await.unwrap();

        assert!(list_by_office(&mut conn, f.office_id).await.unwrap().is_empty());
        assert!(list_by_workplace(&mut conn, f.workplace_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_month_window_is_half_open() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let f = fixture(&mut conn, WorkType::Hours).await;

        for date in [
            day(1),
            day(31),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
        ] {
            create(
                &mut conn,
                &NewWorkEntry {
                    employee_id: f.employee_id,
                    workplace_id: f.workplace_id,
                    date,
                    payload: WorkPayload::Hours { hours: 1 },
                    comment: None,
                },
            )
            .await
            .unwrap();
        }

        let january = list_by_workplace_between(
            &mut conn,
            f.workplace_id,
            day(1),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
        .await
        .unwrap();
        let dates: Vec<NaiveDate> = january.iter().map(|v| v.entry.date).collect();
        assert_eq!(dates, vec![day(1), day(31)]);
    }

    #[tokio::test]
    async fn test_employee_delete_cascades_entries() {
        let pool = test_pool().await;
        let mut tx = pool.begin().await.unwrap();
        let f = fixture(&mut tx, WorkType::Hours).await;
        for d in 1..=3 {
            create(
                &mut tx,
                &NewWorkEntry {
                    employee_id: f.employee_id,
                    workplace_id: f.workplace_id,
                    date: day(d),
                    payload: WorkPayload::Hours { hours: 2 },
                    comment: None,
                },
            )
            .await
            .unwrap();
        }

        let cascaded = employee::soft_delete(&mut tx, f.employee_id).await.unwrap();
        tx.commit().await.unwrap();
        assert_eq!(cascaded, 3);

        let mut conn = pool.acquire().await.unwrap();
        assert!(list_by_employee(&mut conn, f.employee_id).await.unwrap().is_empty());
    }

    #[test]
    fn test_payload_columns_exclusive() {
        let cols = PayloadColumns::from(&WorkPayload::Attendance);
        assert_eq!(
            cols,
            PayloadColumns {
                attendance: Some(true),
                ..Default::default()
            }
        );
        let cols = PayloadColumns::from(&WorkPayload::Hours { hours: 8 });
        assert_eq!(cols.hours, Some(8));
        assert!(cols.start_time.is_none() && cols.attendance.is_none());
    }
}
