use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{NewMovie, RatingUpdate},
    ranking,
};

/// Owns the database pool. Every mutation runs in its own transaction, which
/// rolls back when dropped on an error path.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn close(&self) -> AppResult<()> {
        self.db.clone().close().await?;
        Ok(())
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn find_by_title(&self, title: &str) -> AppResult<Option<movie::Model>> {
        let found = movie::Entity::find()
            .filter(movie::Column::Title.eq(title))
            .one(&self.db)
            .await?;
        Ok(found)
    }

    /// All movies in insertion order.
    pub async fn all(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    /// Sorts every movie ascending by rating, assigns `rank = total - position`
    /// and writes back the rankings that changed.
    pub async fn rank_all(&self) -> AppResult<Vec<movie::Model>> {
        let txn = self.db.begin().await?;

        let mut movies =
            movie::Entity::find().order_by_asc(movie::Column::Id).all(&txn).await?;
        ranking::sort_by_rating(&mut movies, |m| m.rating);

        let total = movies.len();
        let mut written = 0usize;
        for (position, movie) in movies.iter_mut().enumerate() {
            let rank = ranking::rank_for(position, total);
            if movie.ranking == Some(rank) {
                continue;
            }
            let mut active = movie.clone().into_active_model();
            active.ranking = Set(Some(rank));
            *movie = active.update(&txn).await?;
            written += 1;
        }

        txn.commit().await?;
        tracing::debug!(total, written, "rankings recomputed");
        Ok(movies)
    }

    pub async fn update_review(&self, id: i32, update: RatingUpdate) -> AppResult<movie::Model> {
        let txn = self.db.begin().await?;

        let Some(existing) = movie::Entity::find_by_id(id).one(&txn).await? else {
            return Err(AppError::movie_not_found(id));
        };

        let mut active = existing.into_active_model();
        active.rating = Set(Some(update.rating));
        active.review = Set(Some(update.review));
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let result = movie::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::movie_not_found(id));
        }

        txn.commit().await?;
        Ok(())
    }

    /// Inserts a movie with rating, review and ranking unset. A title that is
    /// already stored yields [`AppError::DuplicateTitle`], whether caught by the
    /// lookup or by the unique index when two inserts race.
    pub async fn insert(&self, new: NewMovie) -> AppResult<movie::Model> {
        let txn = self.db.begin().await?;

        let existing = movie::Entity::find()
            .filter(movie::Column::Title.eq(new.title.as_str()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(AppError::DuplicateTitle(new.title));
        }

        let title = new.title.clone();
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(None),
            ranking: Set(None),
            review: Set(None),
            img_url: Set(new.img_url),
        };

        let inserted = model.insert(&txn).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::DuplicateTitle(title),
            _ => err.into(),
        })?;

        txn.commit().await?;
        Ok(inserted)
    }
}
