use rand::distributions::Alphanumeric;
use rand::Rng;

/// Default length of generated document ids.
pub const AUTO_ID_LENGTH: usize = 20;

/// Generates a random alphanumeric document id of the given length.
pub fn generate_auto_id(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
