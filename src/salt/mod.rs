use thiserror::Error;

pub use self::{
    chars::{generate_salt, random_printable_char},
    keys::{wp_salts, SaltMap, DEFAULT_KEYS},
    random::{random_int, OsRandom, RandomSource},
};

mod chars;
mod keys;
mod random;

/// Largest number of bytes a single `RandomSource::fill` call may request.
pub const MAX_FILL_LEN: usize = 65536;

/// Ranges needing more bits than this lose precision as IEEE doubles, so they are refused.
pub const MAX_RANGE_BITS: u32 = 53;

/// Salts handed out by `wp_salts` are never shorter than this.
pub const MINIMUM_KEY_LENGTH: usize = 64;

/// Length `wp_salts` uses when the caller gives none.
pub const DEFAULT_SALT_LENGTH: usize = 64;

/// Upper bound on rejection rounds before giving up.
const MAX_ATTEMPTS: usize = 1000;

#[derive(Debug, Error)]
pub enum SaltError {
    #[error("range needs {bits} bits of entropy, more than the {} safe-integer bits", MAX_RANGE_BITS)]
    PrecisionExceeded { bits: u32 },

    #[error("requested {requested} random bytes in one call, limit is {limit}")]
    EntropyBufferTooLarge { requested: usize, limit: usize },

    #[error("no secure random source available: {0}")]
    NoSecureRandomSource(String),

    #[error("empty range [{min}, {max})")]
    EmptyRange { min: i64, max: i64 },

    #[error("gave up after {attempts} rejected draws")]
    RetriesExhausted { attempts: usize },
}
