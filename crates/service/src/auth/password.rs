/// Fixed bcrypt work factor for stored hashes.
pub const HASH_COST: u32 = 12;

/// Hash a plaintext password with a random salt at the fixed cost.
/// Two calls with the same plaintext produce different hashes.
pub fn hash_password(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plaintext, HASH_COST)
}

/// Boolean predicate pairing `hash_password`: a malformed hash verifies as
/// false rather than surfacing an error.
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or(false)
}
