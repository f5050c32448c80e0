use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolio_projects` table and its columns.
#[derive(DeriveIden)]
enum PortfolioProjects {
    Table,
    Position,
    Id,
    Title,
    Description,
    Role,
    Year,
    Images,
    Tags,
    TagsLabel,
    Link,
    Github,
    Gallery,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioProjects::Position)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PortfolioProjects::Id).string().not_null())
                    .col(ColumnDef::new(PortfolioProjects::Title).string().not_null())
                    .col(ColumnDef::new(PortfolioProjects::Description).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioProjects::Role)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(PortfolioProjects::Year).string().null())
                    .col(ColumnDef::new(PortfolioProjects::Images).json().not_null())
                    .col(ColumnDef::new(PortfolioProjects::Tags).json().not_null())
                    .col(ColumnDef::new(PortfolioProjects::TagsLabel).string().null())
                    .col(ColumnDef::new(PortfolioProjects::Link).string().null())
                    .col(ColumnDef::new(PortfolioProjects::Github).string().null())
                    .col(ColumnDef::new(PortfolioProjects::Gallery).json().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioProjects::Table).to_owned())
            .await
    }
}
