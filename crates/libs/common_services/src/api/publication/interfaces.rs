use crate::database::publication::Publication;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// New publication payload. `text` is required; the service validates
/// presence so the contract's 400 applies.
#[derive(Deserialize, Debug, ToSchema)]
pub struct CreatePublication {
    pub text: Option<String>,
    pub file: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct PublicationResponse {
    pub status: String,
    pub publication: Publication,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct DeletePublicationResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct PublicationListResponse {
    pub status: String,
    pub publications: Vec<Publication>,
    pub total_docs: i64,
    pub total_pages: i64,
    pub current_page: i64,
}
