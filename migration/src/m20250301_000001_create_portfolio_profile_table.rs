use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the single-row `portfolio_profile` table.
#[derive(DeriveIden)]
enum PortfolioProfile {
    Table,
    Id,
    Name,
    Titles,
    Image,
    Bio,
    Email,
    Social,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioProfile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioProfile::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PortfolioProfile::Name).string().not_null())
                    .col(ColumnDef::new(PortfolioProfile::Titles).json().not_null())
                    .col(ColumnDef::new(PortfolioProfile::Image).string().null())
                    .col(ColumnDef::new(PortfolioProfile::Bio).text().not_null())
                    .col(ColumnDef::new(PortfolioProfile::Email).string().not_null())
                    .col(ColumnDef::new(PortfolioProfile::Social).json().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioProfile::Table).to_owned())
            .await
    }
}
