pub mod catalog;
pub mod media;
pub mod nutrition_logs;
pub mod professionals;
pub mod promotions;
pub mod raffles;
pub mod users;

pub use catalog::Entity as CatalogItem;
pub use media::Entity as Media;
pub use nutrition_logs::Entity as NutritionLog;
pub use professionals::Entity as Professional;
pub use promotions::Entity as Promotion;
pub use raffles::Entity as Raffle;
pub use users::Entity as User;

pub use media::{MediaCategory, MediaKind, MediaStatus};
pub use raffles::ItemStatus;
pub use users::{Plan, Role};
