use sea_orm_migration::prelude::*;

mod m20241007_000001_create_users;
mod m20241007_000002_create_locations;
mod m20241007_000003_create_weekly_operations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241007_000001_create_users::Migration),
            Box::new(m20241007_000002_create_locations::Migration),
            Box::new(m20241007_000003_create_weekly_operations::Migration),
        ]
    }
}
