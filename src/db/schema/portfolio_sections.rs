use sea_orm::entity::prelude::*;

/// SeaORM entity for the `portfolio_sections` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub position: i32,
    pub id: String,
    pub kind: String,
    pub enabled: bool,
    pub sort_order: i64,
    #[sea_orm(column_type = "Json")]
    pub content: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
