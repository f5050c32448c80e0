use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolio_skills` table and its columns.
#[derive(DeriveIden)]
enum PortfolioSkills {
    Table,
    Position,
    Id,
    Name,
    Category,
    Level,
    Icon,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioSkills::Position)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PortfolioSkills::Id).string().not_null())
                    .col(ColumnDef::new(PortfolioSkills::Name).string().not_null())
                    .col(ColumnDef::new(PortfolioSkills::Category).string().not_null())
                    .col(ColumnDef::new(PortfolioSkills::Level).string().null())
                    .col(ColumnDef::new(PortfolioSkills::Icon).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioSkills::Table).to_owned())
            .await
    }
}
