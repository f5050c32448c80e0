use sea_orm::entity::prelude::*;

/// SeaORM entity for the single-row `portfolio_profile` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Json")]
    pub titles: Json,
    pub image: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub email: String,
    #[sea_orm(column_type = "Json")]
    pub social: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Primary key of the only profile row.
pub const SINGLETON_ID: i32 = 1;
