use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::storages::application::domain::entities::FileLink;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "file_links")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub storage_id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub container_id: Uuid,

    /// Polymorphic owner, e.g. `WorkPackage`; no foreign key
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub container_type: String,

    /// File id on the remote storage
    #[sea_orm(column_type = "Text")]
    pub origin_id: String,

    #[sea_orm(column_type = "Text")]
    pub origin_name: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FileLink {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            storage_id: model.storage_id,
            container_id: model.container_id,
            container_type: model.container_type,
            origin_id: model.origin_id,
            origin_name: model.origin_name,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}
