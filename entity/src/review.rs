use std::fmt::{self, Display};

use super::*;

/// Одна оценка, оставленная пользователем.
///
/// Диапазон `rating` проверяется только на входе HTTP-запроса,
/// у колонки ограничений нет.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rating: i32,
    /// заполняется базой при вставке (`CURRENT_TIMESTAMP`)
    pub created_at: ::chrono::NaiveDateTime,
}

impl Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, rating: {}, created_at: {}",
            self.id, self.rating, self.created_at
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::Model;

    #[test]
    fn display_lists_every_column() {
        let review = Model {
            id: 7,
            rating: 3,
            created_at: ::chrono::NaiveDate::from_ymd_opt(2024, 1, 13)
                .unwrap()
                .and_hms_opt(13, 40, 47)
                .unwrap(),
        };

        assert_eq!(
            review.to_string(),
            "id: 7, rating: 3, created_at: 2024-01-13 13:40:47"
        );
    }
}
