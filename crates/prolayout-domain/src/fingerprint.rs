use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a layout finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - unit path (module-relative)
/// - offending segment or file name
pub fn fingerprint_for_violation(check_id: &str, code: &str, path: &str, segment: &str) -> String {
    let canonical = [check_id, code, path, segment].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_field_sensitive() {
        let a = fingerprint_for_violation("layout.files", "file_not_allowed", "a", "Root");
        let b = fingerprint_for_violation("layout.files", "file_not_allowed", "a", "Root");
        let c = fingerprint_for_violation("layout.files", "file_not_allowed", "a", "root");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
