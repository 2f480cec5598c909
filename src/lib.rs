//! Random secret keys for `wp-config.php` and friends.
//!
//! Bytes from a [`salt::RandomSource`] become unbiased bounded integers, then
//! quote-safe printable characters, then fixed-length salts keyed by name.

pub mod output;
pub mod salt;
