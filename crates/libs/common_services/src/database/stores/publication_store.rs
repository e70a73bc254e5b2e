use crate::database::DbError;
use crate::database::tables::publication::Publication;
use sqlx::{Executor, Postgres};

const PUBLICATION_COLUMNS: &str = "id, user_id, text, file, created_at";

pub struct PublicationStore;

impl PublicationStore {
    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        text: &str,
        file: Option<&str>,
    ) -> Result<Publication, DbError> {
        let query = format!(
            "INSERT INTO publication (user_id, text, file)
             VALUES ($1, $2, $3)
             RETURNING {PUBLICATION_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Publication>(&query)
            .bind(user_id)
            .bind(text)
            .bind(file)
            .fetch_one(executor)
            .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        publication_id: i32,
    ) -> Result<Option<Publication>, DbError> {
        let query = format!("SELECT {PUBLICATION_COLUMNS} FROM publication WHERE id = $1");
        Ok(sqlx::query_as::<_, Publication>(&query)
            .bind(publication_id)
            .fetch_optional(executor)
            .await?)
    }

    pub async fn delete(
        executor: impl Executor<'_, Database = Postgres>,
        publication_id: i32,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM publication WHERE id = $1")
            .bind(publication_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn count_by_user(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<i64, DbError> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM publication WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(executor)
                .await?,
        )
    }

    /// One page of a user's publications, newest first.
    pub async fn page_by_user(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Publication>, DbError> {
        let query = format!(
            "SELECT {PUBLICATION_COLUMNS} FROM publication
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        Ok(sqlx::query_as::<_, Publication>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(executor)
            .await?)
    }
}
