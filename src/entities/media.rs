use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum MediaKind {
    #[sea_orm(string_value = "Filme")]
    Filme,
    #[sea_orm(string_value = "Série")]
    #[serde(rename = "Série")]
    Serie,
    #[sea_orm(string_value = "Documentário")]
    #[serde(rename = "Documentário")]
    Documentario,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum MediaCategory {
    #[sea_orm(string_value = "Corrida")]
    Corrida,
    #[sea_orm(string_value = "Motivacional")]
    Motivacional,
    #[sea_orm(string_value = "Disciplina")]
    Disciplina,
}

/// Moderation state of a suggestion. Only `Ativo` items are publicly listed.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    #[default]
    #[sea_orm(string_value = "pendente")]
    Pendente,
    #[sea_orm(string_value = "ativo")]
    Ativo,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "media")]
#[schema(as = Media)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub kind: MediaKind,
    pub category: MediaCategory,
    pub synopsis: String,
    pub platform: String,
    pub year: Option<i32>,
    pub image_url: String,
    pub external_link: Option<String>,
    pub submitted_by: String,
    pub status: MediaStatus,
    pub approved_by_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
