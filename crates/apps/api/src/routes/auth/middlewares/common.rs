use crate::api_state::ApiContext;
use axum::extract::{FromRequestParts, State};
use color_eyre::eyre::eyre;
use common_services::api::auth::error::AuthError;
use http::header;
use http::request::Parts;

pub async fn extract_context<S>(parts: &mut Parts, state: &S) -> Result<ApiContext, AuthError>
where
    S: Send + Sync,
    State<ApiContext>: FromRequestParts<S>,
{
    match State::<ApiContext>::from_request_parts(parts, state).await {
        Ok(State(context)) => Ok(context),
        Err(_e) => Err(AuthError::Internal(eyre!(
            "Server state is not configured correctly."
        ))),
    }
}

/// Get the bearer token from the Authorization header.
pub fn extract_token(parts: &Parts) -> Result<String, AuthError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(ToOwned::to_owned)
        .ok_or(AuthError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::extract_token;
    use axum::body::Body;
    use http::Request;

    fn parts_with_auth(value: Option<&str>) -> http::request::Parts {
        let mut builder = Request::builder().uri("/api/user/profile/1");
        if let Some(value) = value {
            builder = builder.header("Authorization", value);
        }
        let (parts, _) = builder.body(Body::empty()).expect("request").into_parts();
        parts
    }

    #[test]
    fn bearer_token_is_extracted() {
        let parts = parts_with_auth(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_token(&parts).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_header_is_rejected() {
        let parts = parts_with_auth(None);
        assert!(extract_token(&parts).is_err());
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let parts = parts_with_auth(Some("Basic dXNlcjpwdw=="));
        assert!(extract_token(&parts).is_err());
    }
}
