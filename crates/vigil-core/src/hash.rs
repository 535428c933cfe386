use xxhash_rust::xxh64::xxh64;

/// Hash raw file content for change detection.
///
/// The convergence loop compares hashes between passes to detect a fixpoint.
pub fn content_hash(content: &str) -> u64 {
    xxh64(content.as_bytes(), 0)
}
