use std::time::Duration;

use seeder_config::shared::PgConnectionConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::info;

use crate::destination::Destination;
use crate::error::{ErrorKind, SeedResult};
use crate::seed_error;
use crate::types::CatalogRecord;

/// Column list of the destination catalog table, in bind order.
const CATALOG_COLUMNS: &str = "code, name, description, solution_method, subject, area, \
     standard_code, standard_content, cognitive_tag, difficulty_min, difficulty_max, \
     keywords, school_level, level_code, domain_code, is_active";

/// Update-on-conflict clause keyed by `code`.
///
/// Always update, never ignore duplicates: re-running the seeder must replace stale
/// rows with the current catalog content.
const ON_CONFLICT_UPDATE: &str = " on conflict (code) do update set \
     name = excluded.name, description = excluded.description, \
     solution_method = excluded.solution_method, subject = excluded.subject, \
     area = excluded.area, standard_code = excluded.standard_code, \
     standard_content = excluded.standard_content, cognitive_tag = excluded.cognitive_tag, \
     difficulty_min = excluded.difficulty_min, difficulty_max = excluded.difficulty_max, \
     keywords = excluded.keywords, school_level = excluded.school_level, \
     level_code = excluded.level_code, domain_code = excluded.domain_code, \
     is_active = excluded.is_active";

/// Destination backed by the hosted Postgres catalog store.
#[derive(Debug, Clone)]
pub struct PostgresDestination {
    pool: PgPool,
    table: String,
}

impl PostgresDestination {
    /// Connects to the destination database and returns a destination bound to the
    /// given catalog table.
    pub async fn connect(
        config: &PgConnectionConfig,
        table: impl Into<String>,
    ) -> SeedResult<Self> {
        let table = table.into();

        let pool = PgPoolOptions::new()
            .max_connections(2)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(config.with_db())
            .await
            .map_err(|err| {
                seed_error!(
                    ErrorKind::DestinationConnectionFailed,
                    "Failed to connect to the destination database",
                    format!("host '{}', database '{}'", config.host, config.name),
                    source: err
                )
            })?;

        info!(host = %config.host, database = %config.name, table = %table, "connected to destination");

        Ok(Self { pool, table })
    }
}

impl Destination for PostgresDestination {
    fn name() -> &'static str {
        "postgres"
    }

    async fn table_exists(&self) -> SeedResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "select exists (select 1 from information_schema.tables \
             where table_schema = current_schema() and table_name = $1)",
        )
        .bind(&self.table)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn count_records(&self) -> SeedResult<u64> {
        let count =
            sqlx::query_scalar::<_, i64>(&format!("select count(*) from {}", self.table))
                .fetch_one(&self.pool)
                .await?;

        Ok(count.max(0) as u64)
    }

    async fn upsert_records(&self, records: Vec<CatalogRecord>) -> SeedResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("insert into {} ({CATALOG_COLUMNS}) ", self.table));

        query.push_values(records.iter(), |mut row, record| {
            row.push_bind(&record.code)
                .push_bind(&record.name)
                .push_bind(&record.description)
                .push_bind(&record.solution_method)
                .push_bind(&record.subject)
                .push_bind(&record.area)
                .push_bind(&record.standard_code)
                .push_bind(&record.standard_content)
                .push_bind(&record.cognitive_tag)
                .push_bind(record.difficulty_min)
                .push_bind(record.difficulty_max)
                .push_bind(Json(&record.keywords))
                .push_bind(&record.school_level)
                .push_bind(&record.level_code)
                .push_bind(&record.domain_code)
                .push_bind(record.is_active);
        });

        query.push(ON_CONFLICT_UPDATE);

        query.build().execute(&self.pool).await?;

        Ok(())
    }
}
