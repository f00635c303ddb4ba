use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ItemStatus {
    #[default]
    #[sea_orm(string_value = "Ativo")]
    Ativo,
    #[sea_orm(string_value = "Inativo")]
    Inativo,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "raffles")]
#[schema(as = Raffle)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product: String,
    pub description: String,
    /// Price of one ticket number.
    pub value_number: f64,
    pub total_numbers: i32,
    pub sold_numbers: i32,
    pub draw_date: Option<String>,
    pub status: ItemStatus,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// `sold` must stay within `0..=total`.
pub fn validate_sold_numbers(sold: i32, total: i32) -> Result<(), String> {
    if sold < 0 {
        return Err("sold_numbers cannot be negative".to_string());
    }
    if sold > total {
        return Err(format!(
            "sold_numbers ({}) cannot exceed total_numbers ({})",
            sold, total
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sold_numbers_within_total_are_accepted() {
        assert!(validate_sold_numbers(0, 100).is_ok());
        assert!(validate_sold_numbers(100, 100).is_ok());
    }

    #[test]
    fn sold_numbers_outside_range_are_rejected() {
        assert!(validate_sold_numbers(101, 100).is_err());
        assert!(validate_sold_numbers(-1, 100).is_err());
    }
}
