use crate::DbError;
use core_types::{EmissionType, NewEmissionType};
use sqlx::postgres::{PgPool, Postgres};
use sqlx::QueryBuilder;

/// The `EmissionTypeRepository` provides a high-level interface to the
/// `emission_type` table. It encapsulates all SQL queries and data access
/// logic; no other component issues statements against the store.
#[derive(Debug, Clone)]
pub struct EmissionTypeRepository {
    pool: PgPool,
}

impl EmissionTypeRepository {
    /// Creates a new `EmissionTypeRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches the emission type record with the given id.
    ///
    /// Returns `None` when no row matches; a missing record is a normal
    /// empty result, not an error. At most one row can match since `id`
    /// is the primary key.
    pub async fn select_by_id(&self, id: i64) -> Result<Option<EmissionType>, DbError> {
        tracing::trace!(id, "Selecting emission type by id");
        let record = sqlx::query_as::<_, EmissionType>(
            "SELECT id, name, abbreviation, description, version FROM emission_type WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    /// Fetches all emission type records in id order.
    pub async fn select_all(&self) -> Result<Vec<EmissionType>, DbError> {
        tracing::trace!("Selecting all emission types");
        let records = sqlx::query_as::<_, EmissionType>(
            "SELECT id, name, abbreviation, description, version FROM emission_type ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Inserts every record in the input as one multi-row statement and
    /// returns the created rows, each carrying its store-assigned `id` and
    /// `version = 1`, in input order.
    ///
    /// The whole batch inserts or fails as one unit; an empty input issues
    /// no statement at all.
    pub async fn insert_all(
        &self,
        records: &[NewEmissionType],
    ) -> Result<Vec<EmissionType>, DbError> {
        tracing::trace!(count = records.len(), "Inserting emission type batch");
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO emission_type (name, abbreviation, description) ");
        builder.push_values(records, |mut row, record| {
            row.push_bind(&record.name)
                .push_bind(&record.abbreviation)
                .push_bind(&record.description);
        });
        builder.push(" RETURNING id, name, abbreviation, description, version");

        let created = builder
            .build_query_as::<EmissionType>()
            .fetch_all(&self.pool)
            .await?;
        Ok(created)
    }

    /// Updates the `name`, `abbreviation` and `description` of the record
    /// matching the given record's `id` and returns the number of rows
    /// affected: 0 when no row matched, 1 on success, never more since `id`
    /// is unique. The `version` column is left untouched.
    pub async fn update(&self, record: &EmissionType) -> Result<u64, DbError> {
        tracing::trace!(id = record.id, "Updating emission type");
        let result = sqlx::query(
            "UPDATE emission_type SET name = $1, abbreviation = $2, description = $3 WHERE id = $4",
        )
        .bind(&record.name)
        .bind(&record.abbreviation)
        .bind(&record.description)
        .bind(record.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
