//! Employee repository
//!
//! Listings are always `ORDER BY id ASC`; page slicing depends on it.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use staffdir_core::{Employee, NewEmployee, Page, PageRequest, PageSize, PageWindow};

/// Rows per multi-row INSERT, well under SQLite's bound-parameter limit
const INSERT_CHUNK: usize = 500;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Employee repository
pub struct EmployeeRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EmployeeRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<u64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    /// Resolve `request` and fetch that page.
    ///
    /// Count and fetch run in one transaction so both see the same snapshot.
    pub async fn page(
        &self,
        page_size: PageSize,
        request: &PageRequest,
    ) -> Result<Page<Employee>, DbError> {
        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&mut *tx)
            .await?;

        let window = PageWindow::locate(count.max(0) as u64, page_size, request);

        let rows: Vec<(i64, String)> = sqlx::query_as(
            "SELECT id, title FROM employees ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(i64::from(window.limit()))
        .bind(i64::try_from(window.offset()).unwrap_or(i64::MAX))
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let items = rows
            .into_iter()
            .map(|(id, title)| Employee { id, title })
            .collect();
        Ok(window.into_page(items))
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>, DbError> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, title FROM employees ORDER BY id ASC")
                .fetch_all(self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, title)| Employee { id, title })
            .collect())
    }

    pub async fn get(&self, id: i64) -> Result<Employee, DbError> {
        let (id, title): (i64, String) =
            sqlx::query_as("SELECT id, title FROM employees WHERE id = ?")
                .bind(id)
                .fetch_optional(self.pool)
                .await?
                .ok_or_else(|| DbError::NotFound {
                    resource: "employee",
                    id: id.to_string(),
                })?;

        Ok(Employee { id, title })
    }

    pub async fn insert(&self, employee: &NewEmployee) -> Result<Employee, DbError> {
        let (id, title): (i64, String) =
            sqlx::query_as("INSERT INTO employees (title) VALUES (?) RETURNING id, title")
                .bind(employee.title.as_str())
                .fetch_one(self.pool)
                .await?;

        Ok(Employee { id, title })
    }

    /// Insert many employees in one transaction (batched, no N+1).
    ///
    /// Ids are assigned in slice order.
    pub async fn insert_many(&self, employees: &[NewEmployee]) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for chunk in employees.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Sqlite> =
                QueryBuilder::new("INSERT INTO employees (title) ");
            builder.push_values(chunk, |mut b, employee| {
                b.push_bind(employee.title.as_str());
            });
            inserted += builder.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Delete every employee and restart ids at 1.
    pub async fn clear(&self) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM employees")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'employees'")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(deleted)
    }
}
