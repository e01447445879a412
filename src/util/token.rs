//! One-time registration token generation.

use rand::Rng;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                         abcdefghijklmnopqrstuvwxyz\
                         0123456789";

/// Length of generated tokens; fits the 64 character `token` column.
pub const TOKEN_LENGTH: usize = 32;

/// Generates a random alphanumeric registration token.
///
/// Uses the thread-local cryptographically secure generator.
pub fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
