use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;

/// One-way transform applied to passwords before they reach the directory.
///
/// The identity acts as the salt: `hex(sha1(identity || password))`.
pub fn encrypt_password(identity: &str, password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(identity.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Byte comparison whose running time does not depend on where the inputs differ.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Check a presented password against the encrypted form stored by the directory.
pub fn password_matches(identity: &str, password: &str, stored_hash: &str) -> bool {
    let presented = encrypt_password(identity, password);
    constant_time_eq(presented.as_bytes(), stored_hash.as_bytes())
}
