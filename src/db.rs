use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema,
    Statement,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::{compensation, employee};
use crate::error::{AppError, AppResult};
use crate::gateway::{EmployeeGateway, MemoryGateway, SeaOrmGateway};

/// Build the storage gateway selected by `config.db_type`
pub async fn init_gateway(config: &DatabaseConfig) -> AppResult<Arc<dyn EmployeeGateway>> {
    match config.db_type.as_str() {
        "postgres" => {
            let db = init_database(config).await?;
            Ok(Arc::new(SeaOrmGateway::new(db)))
        }
        "memory" => {
            info!("Using in-memory storage, data is lost on shutdown");
            Ok(Arc::new(MemoryGateway::new()))
        }
        other => Err(AppError::Config(format!("unsupported database type '{}'", other))),
    }
}

/// Initialize database connection and create missing tables
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let database_url = config.connection_url();

    info!("Connecting to database: {}:{}/{}", config.host, config.port, config.name);

    let mut opt = ConnectOptions::new(&database_url);
    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug)
        .set_schema_search_path("public");

    let db = Database::connect(opt).await?;
    info!("Database connection established");

    create_tables(&db).await?;

    Ok(db)
}

async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Creating directory tables if missing...");

    // No foreign keys between the two tables, order does not matter
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(employee::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(compensation::Entity)).await?;

    Ok(())
}

/// Create a table if it doesn't exist
async fn create_table_if_not_exists(
    db: &DatabaseConnection,
    backend: DbBackend,
    mut stmt: TableCreateStatement,
) -> Result<(), DbErr> {
    stmt.if_not_exists();

    let sql = backend.build(&stmt);

    db.execute(Statement::from_string(backend, sql.to_string())).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_table_sql() {
        let schema = Schema::new(DbBackend::Postgres);
        let mut stmt = schema.create_table_from_entity(employee::Entity);
        stmt.if_not_exists();

        let sql = DbBackend::Postgres.build(&stmt).to_string();
        assert!(sql.starts_with(r#"CREATE TABLE IF NOT EXISTS "employee""#));
        assert!(sql.contains(r#""manager_id""#));
    }

    #[tokio::test]
    async fn test_memory_gateway_selected() {
        let config = DatabaseConfig {
            db_type: "memory".to_string(),
            ..DatabaseConfig::default()
        };
        let gateway = init_gateway(&config).await.unwrap();
        assert_eq!(gateway.count_employees().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_database_type() {
        let config = DatabaseConfig {
            db_type: "oracle".to_string(),
            ..DatabaseConfig::default()
        };
        let result = init_gateway(&config).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
