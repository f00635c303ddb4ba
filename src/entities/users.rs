use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Subscription tier. Declaration order is the unlock order: Starter < Pro < Elite.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, DeriveActiveEnum,
    Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Plan {
    #[default]
    #[sea_orm(string_value = "Starter")]
    Starter,
    #[sea_orm(string_value = "Pro")]
    Pro,
    #[sea_orm(string_value = "Elite")]
    Elite,
}

impl Plan {
    /// Whether a subscriber on this plan can open content that requires `required`.
    pub fn unlocks(self, required: Plan) -> bool {
        self >= required
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "users")]
#[schema(as = User)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub plan: Plan,
    pub role: Role,
    pub payment_status: String,
    /// Bearer credential. Only ever returned to its owner by the profile endpoint.
    #[sea_orm(unique)]
    #[serde(skip_serializing)]
    pub session_token: String,
    pub created_at: DateTime<Utc>,
}

impl Model {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::nutrition_logs::Entity")]
    NutritionLogs,
}

impl Related<super::nutrition_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NutritionLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fresh opaque session token.
pub fn new_session_token() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_unlock_their_own_tier_and_below() {
        assert!(Plan::Elite.unlocks(Plan::Elite));
        assert!(Plan::Elite.unlocks(Plan::Starter));
        assert!(Plan::Pro.unlocks(Plan::Starter));
        assert!(!Plan::Pro.unlocks(Plan::Elite));
        assert!(!Plan::Starter.unlocks(Plan::Pro));
    }

    #[test]
    fn plan_serializes_with_its_display_name() {
        assert_eq!(serde_json::to_string(&Plan::Elite).unwrap(), "\"Elite\"");
        assert!(serde_json::from_str::<Plan>("\"Gold\"").is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn session_tokens_are_unique() {
        assert_ne!(new_session_token(), new_session_token());
    }
}
