use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

use super::raffles::ItemStatus;
use super::users::Plan;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "catalog")]
#[schema(as = CatalogItem)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub image_url: String,
    /// Prompt the image was generated from. Hidden from callers whose plan is below `min_plan`.
    pub prompt: String,
    pub description: String,
    pub category: String,
    pub style: String,
    pub min_plan: Plan,
    pub status: ItemStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
