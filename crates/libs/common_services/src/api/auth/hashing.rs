use bcrypt::{hash, verify};

/// Hash a password with bcrypt; each call salts independently.
/// # Errors
///
/// * `bcrypt::hash` can return an error if the cost is out of range.
pub fn hash_password(password: &str, cost: u32) -> color_eyre::Result<String> {
    Ok(hash(password, cost)?)
}

/// Verify a password against a stored bcrypt hash.
/// # Errors
///
/// * `bcrypt::verify` can return an error if the hash string is invalid.
pub fn verify_password(password: &str, hashed: &str) -> color_eyre::Result<bool> {
    Ok(verify(password, hashed)?)
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    // bcrypt's minimum cost (4, private in the crate) keeps these fast;
    // production cost comes from settings.
    const COST: u32 = 4;

    #[test]
    fn hash_never_equals_plaintext() {
        let hashed = hash_password("hunter2", COST).unwrap();
        assert_ne!(hashed, "hunter2");
    }

    #[test]
    fn same_password_hashes_differently_but_both_verify() {
        let first = hash_password("correct horse", COST).unwrap();
        let second = hash_password("correct horse", COST).unwrap();
        assert_ne!(first, second);
        assert!(verify_password("correct horse", &first).unwrap());
        assert!(verify_password("correct horse", &second).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hashed = hash_password("right", COST).unwrap();
        assert!(!verify_password("wrong", &hashed).unwrap());
    }
}
