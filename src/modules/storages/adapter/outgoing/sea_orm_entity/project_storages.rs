use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_storages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub project_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub storage_id: Uuid,

    #[sea_orm(column_type = "Text", nullable)]
    pub project_folder_id: Option<String>,

    /// `automatic`, `manual` or `disabled`
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub project_folder_mode: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
