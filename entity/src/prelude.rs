pub use super::review::Entity as Review;
