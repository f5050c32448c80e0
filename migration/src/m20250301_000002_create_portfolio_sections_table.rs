use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolio_sections` table and its columns.
#[derive(DeriveIden)]
enum PortfolioSections {
    Table,
    Position,
    Id,
    Kind,
    Enabled,
    SortOrder,
    Content,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioSections::Position)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PortfolioSections::Id).string().not_null())
                    .col(ColumnDef::new(PortfolioSections::Kind).string().not_null())
                    .col(
                        ColumnDef::new(PortfolioSections::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PortfolioSections::SortOrder)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PortfolioSections::Content).json().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioSections::Table).to_owned())
            .await
    }
}
