use indexmap::IndexMap;
use log::{debug, warn};

use super::{generate_salt, RandomSource, SaltError, DEFAULT_SALT_LENGTH, MINIMUM_KEY_LENGTH};

/// Secret names WordPress reads from `wp-config.php`.
pub const DEFAULT_KEYS: [&str; 8] = [
    "AUTH_KEY",
    "SECURE_AUTH_KEY",
    "LOGGED_IN_KEY",
    "NONCE_KEY",
    "AUTH_SALT",
    "SECURE_AUTH_SALT",
    "LOGGED_IN_SALT",
    "NONCE_SALT",
];

/// Secret name to salt, in the order the names were given.
pub type SaltMap = IndexMap<String, String>;

/// Build a salt for every name in `keys`, or for `DEFAULT_KEYS` when `keys` is empty.
///
/// The length is `salt_length` (64 when absent), raised to `MINIMUM_KEY_LENGTH` if smaller.
/// Every salt comes from its own draws.
pub fn wp_salts<R, S>(
    source: &R,
    keys: &[S],
    salt_length: Option<usize>,
) -> Result<SaltMap, SaltError>
where
    R: RandomSource + ?Sized,
    S: AsRef<str>,
{
    let requested = salt_length.unwrap_or(DEFAULT_SALT_LENGTH);
    if requested < MINIMUM_KEY_LENGTH {
        warn!(
            "salt length {} is below the minimum, using {}",
            requested, MINIMUM_KEY_LENGTH
        );
    }
    let length = requested.max(MINIMUM_KEY_LENGTH);

    let names: Vec<&str> = if keys.is_empty() {
        DEFAULT_KEYS.to_vec()
    } else {
        keys.iter().map(AsRef::as_ref).collect()
    };

    let mut salts = SaltMap::with_capacity(names.len());
    for name in names {
        debug!("generating {}-character salt for {}", length, name);
        salts.insert(name.to_string(), generate_salt(source, length)?);
    }
    Ok(salts)
}
