use crate::api::auth::error::AuthError;
use crate::api::auth::hashing::{hash_password, verify_password};
use crate::api::auth::interfaces::{AuthenticatedUser, LoginUser, RegisterUser, ValidRegistration};
use crate::api::auth::token::create_token;
use crate::database::app_user::User;
use crate::database::{DbError, UserStore};
use app_state::AppSettings;
use sqlx::PgPool;
use tracing::info;

/// Lower-case an identity field for case-insensitive matching and storage.
#[must_use]
pub fn case_fold(value: &str) -> String {
    value.trim().to_lowercase()
}

fn required(field: Option<String>) -> Result<String, AuthError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AuthError::MissingFields),
    }
}

/// Validates presence of every registration field and case-folds email/nick.
///
/// # Errors
///
/// * `AuthError::MissingFields` when any field is absent or blank.
pub fn validate_registration(payload: RegisterUser) -> Result<ValidRegistration, AuthError> {
    Ok(ValidRegistration {
        name: required(payload.name)?,
        last_name: required(payload.last_name)?,
        email: case_fold(&required(payload.email)?),
        password: required(payload.password)?,
        nick: case_fold(&required(payload.nick)?),
    })
}

/// A concurrent registration can slip past the exists check; the unique
/// constraint then fires on insert and must report the same conflict.
fn map_creation_error(e: DbError) -> AuthError {
    if e.is_unique_violation() {
        AuthError::UserAlreadyExists
    } else {
        AuthError::Internal(e.into())
    }
}

/// Registers a new user. Nothing is persisted when validation or the
/// uniqueness check fails, and the plaintext password is dropped right after
/// hashing.
///
/// # Errors
///
/// * `AuthError::MissingFields` when a required field is absent.
/// * `AuthError::UserAlreadyExists` when the case-folded email or nick is taken.
pub async fn register_user(
    pool: &PgPool,
    settings: &AppSettings,
    payload: RegisterUser,
) -> Result<User, AuthError> {
    let registration = validate_registration(payload)?;

    let taken =
        UserStore::exists_with_email_or_nick(pool, &registration.email, &registration.nick)
            .await?;
    if taken {
        return Err(AuthError::UserAlreadyExists);
    }

    let hashed = hash_password(&registration.password, settings.auth.bcrypt_cost)?;
    info!(
        "Creating user email={}, nick={}",
        registration.email, registration.nick
    );

    let user = UserStore::create(
        pool,
        &registration.name,
        &registration.last_name,
        &registration.email,
        &registration.nick,
        &hashed,
    )
    .await
    .map_err(map_creation_error)?;
    Ok(user)
}

/// Authenticates a user and issues a signed bearer token.
///
/// # Errors
///
/// * `AuthError::MissingFields` when email or password is absent.
/// * `AuthError::UserNotFound` when no user matches the case-folded email.
/// * `AuthError::InvalidPassword` when the password does not match.
pub async fn login_user(
    pool: &PgPool,
    settings: &AppSettings,
    payload: LoginUser,
) -> Result<(String, AuthenticatedUser), AuthError> {
    let email = case_fold(&required(payload.email)?);
    let password = required(payload.password)?;

    let user = UserStore::find_by_email_with_password(pool, &email)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    let valid = verify_password(&password, &user.password)?;
    if !valid {
        return Err(AuthError::InvalidPassword);
    }

    let token = create_token(
        &settings.secrets.jwt,
        settings.auth.token_expiry_days,
        user.id,
        user.role,
    )?;

    Ok((
        token,
        AuthenticatedUser {
            id: user.id,
            name: user.name,
            last_name: user.last_name,
            email: user.email,
            nick: user.nick,
            image: user.image,
            created_at: user.created_at,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::{case_fold, map_creation_error, validate_registration};
    use crate::api::auth::error::AuthError;
    use crate::api::auth::interfaces::RegisterUser;
    use crate::database::test_util::{foreign_key_violation, unique_violation};

    fn full_payload() -> RegisterUser {
        RegisterUser {
            name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            email: Some("Ada@Example.COM".into()),
            password: Some("secret".into()),
            nick: Some("AdaL".into()),
        }
    }

    #[test]
    fn case_fold_lowercases_and_trims() {
        assert_eq!(case_fold("  Ada@Example.COM "), "ada@example.com");
    }

    #[test]
    fn registration_case_folds_email_and_nick_only() {
        let valid = validate_registration(full_payload()).unwrap();
        assert_eq!(valid.email, "ada@example.com");
        assert_eq!(valid.nick, "adal");
        assert_eq!(valid.name, "Ada");
        assert_eq!(valid.password, "secret");
    }

    #[test]
    fn missing_field_fails_validation() {
        let mut payload = full_payload();
        payload.nick = None;
        assert!(matches!(
            validate_registration(payload),
            Err(AuthError::MissingFields)
        ));
    }

    #[test]
    fn blank_field_fails_validation() {
        let mut payload = full_payload();
        payload.password = Some("   ".into());
        assert!(matches!(
            validate_registration(payload),
            Err(AuthError::MissingFields)
        ));
    }

    #[test]
    fn racing_duplicate_insert_maps_to_conflict() {
        assert!(matches!(
            map_creation_error(unique_violation()),
            AuthError::UserAlreadyExists
        ));
        assert!(matches!(
            map_creation_error(foreign_key_violation()),
            AuthError::Internal(_)
        ));
    }
}
