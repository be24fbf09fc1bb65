pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_boat_table;
mod m20260801_000003_create_user_boat_table;
mod m20260801_000004_create_race_table;
mod m20260801_000005_create_trail_table;
mod m20260801_000006_create_trail_point_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_boat_table::Migration),
            Box::new(m20260801_000003_create_user_boat_table::Migration),
            Box::new(m20260801_000004_create_race_table::Migration),
            Box::new(m20260801_000005_create_trail_table::Migration),
            Box::new(m20260801_000006_create_trail_point_table::Migration),
        ]
    }
}
