use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, SqlErr};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
};

/// Ranking written at creation, before the first real recompute.
const PLACEHOLDER_RANKING: i32 = 10;

/// Fields supplied when a picked candidate is first persisted. Rating,
/// ranking and review start from their placeholder defaults.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
}

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies, ascending by rating. This is the ordering the rank
    /// computation expects.
    pub async fn list_all(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().order_by_asc(movie::Column::Rating).all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound(id))
    }

    pub async fn insert(&self, new: NewMovie) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            title: Set(new.title.clone()),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(0.0),
            ranking: Set(PLACEHOLDER_RANKING),
            review: Set(" ".to_string()),
            img_url: Set(new.img_url),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(movie) => Ok(movie),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::DuplicateTitle(new.title))
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Applies an edit. A `None` rating keeps the stored value; the review
    /// is always overwritten.
    pub async fn update(
        &self,
        id: i32,
        rating: Option<f64>,
        review: String,
    ) -> AppResult<movie::Model> {
        let current = self.get(id).await?;
        let mut active: movie::ActiveModel = current.into();
        if let Some(rating) = rating {
            active.rating = Set(rating);
        }
        active.review = Set(review);
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }
}
