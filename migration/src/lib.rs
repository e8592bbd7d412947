pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_organisations_table;
mod m20240101_000002_create_users_table;
mod m20240101_000003_create_clients_table;
mod m20240101_000004_create_otps_table;
mod m20240101_000005_create_logs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_organisations_table::Migration),
            Box::new(m20240101_000002_create_users_table::Migration),
            Box::new(m20240101_000003_create_clients_table::Migration),
            Box::new(m20240101_000004_create_otps_table::Migration),
            Box::new(m20240101_000005_create_logs_table::Migration),
        ]
    }
}
