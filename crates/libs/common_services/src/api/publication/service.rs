use crate::api::pagination::Page;
use crate::api::publication::error::PublicationError;
use crate::api::publication::interfaces::CreatePublication;
use crate::database::PublicationStore;
use crate::database::publication::Publication;
use sqlx::PgPool;
use tracing::info;

/// Saves a publication for the caller.
///
/// # Errors
///
/// * `PublicationError::MissingText` when the text is absent or blank.
pub async fn create_publication(
    pool: &PgPool,
    caller_id: i32,
    payload: CreatePublication,
) -> Result<Publication, PublicationError> {
    let text = match payload.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(PublicationError::MissingText),
    };

    let publication =
        PublicationStore::create(pool, caller_id, &text, payload.file.as_deref()).await?;
    info!("User {caller_id} created publication {}", publication.id);
    Ok(publication)
}

pub async fn get_publication(
    pool: &PgPool,
    publication_id: i32,
) -> Result<Publication, PublicationError> {
    PublicationStore::find_by_id(pool, publication_id)
        .await?
        .ok_or(PublicationError::NotFound)
}

/// Deletes a publication; only its owner may do so.
///
/// # Errors
///
/// * `PublicationError::NotFound` when no such publication exists.
/// * `PublicationError::NotOwner` when the caller does not own it.
pub async fn delete_publication(
    pool: &PgPool,
    caller_id: i32,
    publication_id: i32,
) -> Result<(), PublicationError> {
    let publication = PublicationStore::find_by_id(pool, publication_id)
        .await?
        .ok_or(PublicationError::NotFound)?;
    if publication.user_id != caller_id {
        return Err(PublicationError::NotOwner);
    }

    PublicationStore::delete(pool, publication_id).await?;
    info!("User {caller_id} deleted publication {publication_id}");
    Ok(())
}

/// Page of a user's publications, newest first, with totals.
pub async fn user_publications(
    pool: &PgPool,
    user_id: i32,
    page: Page,
) -> Result<(Vec<Publication>, i64, i64), PublicationError> {
    let total_docs = PublicationStore::count_by_user(pool, user_id).await?;
    let publications =
        PublicationStore::page_by_user(pool, user_id, page.limit, page.offset()).await?;
    Ok((publications, total_docs, page.total_pages(total_docs)))
}
