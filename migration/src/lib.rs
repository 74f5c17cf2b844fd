pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_streams_table;
mod m20250601_000002_create_sub_domains_table;
mod m20250601_000003_create_roles_table;
mod m20250601_000004_create_courses_table;
mod m20250601_000005_create_jobs_table;
mod m20250601_000006_create_users_table;
mod m20250601_000007_create_feedback_table;
mod m20250601_000008_create_login_logs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_streams_table::Migration),
            Box::new(m20250601_000002_create_sub_domains_table::Migration),
            Box::new(m20250601_000003_create_roles_table::Migration),
            Box::new(m20250601_000004_create_courses_table::Migration),
            Box::new(m20250601_000005_create_jobs_table::Migration),
            Box::new(m20250601_000006_create_users_table::Migration),
            Box::new(m20250601_000007_create_feedback_table::Migration),
            Box::new(m20250601_000008_create_login_logs_table::Migration),
        ]
    }
}
