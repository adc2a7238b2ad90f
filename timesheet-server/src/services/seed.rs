//! Sample data for local development
//!
//! One office, one time-type workplace, three employees with login users and
//! three clock-in/out entries each (today and the two days before, centred on
//! noon UTC). An admin user is added so the office can be managed over HTTP.
//! All users share the password [`SAMPLE_PASSWORD`].

use chrono::{Days, NaiveDate, NaiveTime, Utc};
use shared::models::{
    EmployeeCreate, EmployeeWithUser, Office, Role, User, WorkPayload, WorkType, Workplace,
    WorkplaceCreate,
};
use sqlx::SqlitePool;

use super::ServiceResult;
use super::user::hash;
use crate::db::repository::{self, user::NewUser, work_entry::NewWorkEntry};

pub const SAMPLE_PASSWORD: &str = "password";

const EMPLOYEES: usize = 3;
const ENTRIES_PER_EMPLOYEE: u32 = 3;

#[derive(Debug)]
pub struct SampleData {
    pub office: Office,
    pub workplace: Workplace,
    pub admin: User,
    pub employees: Vec<EmployeeWithUser>,
    pub entries: usize,
}

fn sample_day(today: NaiveDate, days_back: u32) -> NaiveDate {
    today.checked_sub_days(Days::new(u64::from(days_back))).unwrap_or(today)
}

fn sample_payload(date: NaiveDate, days_back: u32) -> WorkPayload {
    let at = |hour: u32| {
        date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN))
            .and_utc()
    };
    WorkPayload::Time {
        start_time: at(12 - days_back),
        end_time: at(12 + days_back),
    }
}

/// Seed everything in one transaction
pub async fn create_sample(pool: &SqlitePool) -> ServiceResult<SampleData> {
    // one hash for all sample users
    let password_hash = hash(SAMPLE_PASSWORD)?;
    let today = Utc::now().date_naive();

    let mut tx = pool.begin().await?;
    let office = repository::office::create(&mut tx, "sample_office").await?;
    let workplace = repository::workplace::create(
        &mut tx,
        &WorkplaceCreate {
            name: "sample_workplace_time".to_string(),
            office_id: office.id,
            work_type: WorkType::Time,
        },
    )
    .await?;

    let admin = repository::user::create(
        &mut tx,
        &NewUser {
            office_id: office.id,
            name: "sample_admin",
            password_hash: &password_hash,
            role: Role::Admin,
            employee_id: None,
        },
    )
    .await?;

    let mut employees = Vec::with_capacity(EMPLOYEES);
    let mut entries = 0;
    for i in 0..EMPLOYEES {
        let name = format!("sample_employee_{i}");
        let employee = repository::employee::create(
            &mut tx,
            &EmployeeCreate {
                name: name.clone(),
                workplace_id: workplace.id,
            },
        )
        .await?;
        let user = repository::user::create(
            &mut tx,
            &NewUser {
                office_id: office.id,
                name: &name,
                password_hash: &password_hash,
                role: Role::Employee,
                employee_id: Some(employee.id),
            },
        )
        .await?;

        for days_back in 0..ENTRIES_PER_EMPLOYEE {
            let date = sample_day(today, days_back);
            repository::work_entry::create(
                &mut tx,
                &NewWorkEntry {
                    employee_id: employee.id,
                    workplace_id: workplace.id,
                    date,
                    payload: sample_payload(date, days_back),
                    comment: None,
                },
            )
            .await?;
            entries += 1;
        }

        employees.push(EmployeeWithUser { employee, user });
    }
    tx.commit().await?;

    tracing::info!(
        office_id = office.id,
        workplace_id = workplace.id,
        admin_user_id = admin.id,
        employees = employees.len(),
        entries,
        "Sample data created"
    );

    Ok(SampleData {
        office,
        workplace,
        admin,
        employees,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::reported_hours;
    use crate::services::testing::pool;

    #[test]
    fn test_sample_payload_widens_each_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(reported_hours(&sample_payload(date, 0)), 0);
        assert_eq!(reported_hours(&sample_payload(date, 2)), 4);
    }

    #[tokio::test]
    async fn test_create_sample() {
        let pool = pool().await;
        let sample = create_sample(&pool).await.unwrap();

        assert_eq!(sample.workplace.work_type, WorkType::Time);
        assert_eq!(sample.employees.len(), 3);
        assert_eq!(sample.entries, 9);
        assert_eq!(sample.admin.role, Role::Admin);

        let mut conn = pool.acquire().await.unwrap();
        let listed = repository::work_entry::list_by_office(&mut conn, sample.office.id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 9);
        assert!(sample
            .employees
            .iter()
            .all(|e| e.user.employee_id == Some(e.employee.id)));
    }
}
