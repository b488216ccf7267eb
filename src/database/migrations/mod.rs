//! SeaORM migrations for multi-database support
//!
//! Migrations work across SQLite, PostgreSQL, and MySQL. Timestamps use
//! `timestamp with time zone` on PostgreSQL and `timestamp` elsewhere so that
//! every backend decodes them as `DateTime<Utc>`.

use sea_orm_migration::prelude::*;

pub mod m20250301_000001_create_lineup;
pub mod m20250301_000002_create_lineup_channel;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_lineup::Migration),
            Box::new(m20250301_000002_create_lineup_channel::Migration),
        ]
    }
}

pub(crate) fn timestamp_column(manager: &SchemaManager, column: impl IntoIden) -> ColumnDef {
    match manager.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => {
            ColumnDef::new(column).timestamp_with_time_zone().to_owned()
        }
        sea_orm::DatabaseBackend::MySql => ColumnDef::new(column).timestamp().to_owned(),
        // SQLite stores the value as text; SeaORM converts it to DateTime<Utc>
        _ => ColumnDef::new(column).timestamp().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn created_at_sql(backend: DatabaseBackend) -> String {
        let connection = MockDatabase::new(backend).into_connection();
        let manager = SchemaManager::new(&connection);
        let mut table = Table::create();
        table
            .table(Alias::new("lineup"))
            .col(timestamp_column(&manager, Alias::new("created_at")));

        let sql = match backend {
            DatabaseBackend::Postgres => table.to_string(PostgresQueryBuilder),
            DatabaseBackend::MySql => table.to_string(MysqlQueryBuilder),
            DatabaseBackend::Sqlite => table.to_string(SqliteQueryBuilder),
        };
        sql.to_lowercase()
    }

    #[test]
    fn timestamps_are_native_on_every_backend() {
        let mysql = created_at_sql(DatabaseBackend::MySql);
        assert!(mysql.contains("`created_at` timestamp"), "{mysql}");
        assert!(!mysql.contains("varchar"), "{mysql}");

        let postgres = created_at_sql(DatabaseBackend::Postgres);
        assert!(
            postgres.contains("\"created_at\" timestamp with time zone"),
            "{postgres}"
        );

        let sqlite = created_at_sql(DatabaseBackend::Sqlite);
        assert!(sqlite.contains("\"created_at\" timestamp"), "{sqlite}");
        assert!(!sqlite.contains("varchar"), "{sqlite}");
    }
}
