pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_portfolio_profile_table;
mod m20250301_000002_create_portfolio_sections_table;
mod m20250301_000003_create_portfolio_skills_table;
mod m20250301_000004_create_portfolio_projects_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_portfolio_profile_table::Migration),
            Box::new(m20250301_000002_create_portfolio_sections_table::Migration),
            Box::new(m20250301_000003_create_portfolio_skills_table::Migration),
            Box::new(m20250301_000004_create_portfolio_projects_table::Migration),
        ]
    }
}
