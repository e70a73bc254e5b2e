use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    /// True when the underlying error is a unique-constraint violation,
    /// e.g. a duplicate follow edge or a taken email/nick.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        if let Self::Sqlx(sqlx::Error::Database(db_err)) = self {
            db_err.kind() == ErrorKind::UniqueViolation
        } else {
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::DbError;
    use sqlx::error::ErrorKind;
    use std::error::Error;
    use std::fmt;

    /// Stand-in for a driver error with a chosen constraint kind.
    #[derive(Debug)]
    pub(crate) struct FakeDatabaseError(pub ErrorKind);

    impl fmt::Display for FakeDatabaseError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "constraint violation")
        }
    }

    impl Error for FakeDatabaseError {}

    impl sqlx::error::DatabaseError for FakeDatabaseError {
        fn message(&self) -> &str {
            "constraint violation"
        }

        fn kind(&self) -> ErrorKind {
            // ErrorKind is non-Clone and #[non_exhaustive], so map by variant.
            match self.0 {
                ErrorKind::UniqueViolation => ErrorKind::UniqueViolation,
                ErrorKind::ForeignKeyViolation => ErrorKind::ForeignKeyViolation,
                ErrorKind::NotNullViolation => ErrorKind::NotNullViolation,
                ErrorKind::CheckViolation => ErrorKind::CheckViolation,
                _ => ErrorKind::Other,
            }
        }

        fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn Error + Send + Sync + 'static> {
            self
        }
    }

    pub(crate) fn unique_violation() -> DbError {
        DbError::Sqlx(sqlx::Error::Database(Box::new(FakeDatabaseError(
            ErrorKind::UniqueViolation,
        ))))
    }

    pub(crate) fn foreign_key_violation() -> DbError {
        DbError::Sqlx(sqlx::Error::Database(Box::new(FakeDatabaseError(
            ErrorKind::ForeignKeyViolation,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::DbError;
    use super::test_util::{foreign_key_violation, unique_violation};

    #[test]
    fn unique_violations_are_detected() {
        assert!(unique_violation().is_unique_violation());
    }

    #[test]
    fn other_errors_are_not_unique_violations() {
        assert!(!foreign_key_violation().is_unique_violation());
        assert!(!DbError::Sqlx(sqlx::Error::RowNotFound).is_unique_violation());
    }
}
