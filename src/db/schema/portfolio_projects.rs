use sea_orm::entity::prelude::*;

/// SeaORM entity for the `portfolio_projects` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub position: i32,
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub role: String,
    pub year: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub images: Json,
    #[sea_orm(column_type = "Json")]
    pub tags: Json,
    pub tags_label: Option<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub gallery: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
