use log::trace;
use rand::{rngs::OsRng, RngCore};

use super::{SaltError, MAX_ATTEMPTS, MAX_FILL_LEN, MAX_RANGE_BITS};

/// A cryptographically secure byte source.
pub trait RandomSource {
    /// Fill `dest` without any size check. Implementors provide this; callers use `fill`.
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<(), SaltError>;

    /// Fill `dest` with secure random bytes, refusing requests over `MAX_FILL_LEN`.
    fn fill(&self, dest: &mut [u8]) -> Result<(), SaltError> {
        if dest.len() > MAX_FILL_LEN {
            Err(SaltError::EntropyBufferTooLarge {
                requested: dest.len(),
                limit: MAX_FILL_LEN,
            })?;
        }
        self.try_fill_bytes(dest)
    }
}

/// The operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<(), SaltError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| SaltError::NoSecureRandomSource(e.to_string()))
    }
}

/// Uniform integer in `[min, max)`, by masking and rejection rather than modulo.
pub fn random_int<R: RandomSource + ?Sized>(
    source: &R,
    min: i64,
    max: i64,
) -> Result<i64, SaltError> {
    if max <= min {
        Err(SaltError::EmptyRange { min, max })?;
    }
    let range = max
        .checked_sub(min)
        .ok_or(SaltError::PrecisionExceeded { bits: 64 })? as u64;

    // ceil(log2(range))
    let bits = u64::BITS - (range - 1).leading_zeros();
    if bits > MAX_RANGE_BITS {
        Err(SaltError::PrecisionExceeded { bits })?;
    }
    let bytes_needed = bits.div_ceil(8) as usize;
    let mask = (1u64 << bits) - 1;

    let mut buf = [0u8; 8];
    let buf = &mut buf[..bytes_needed];
    for _ in 0..MAX_ATTEMPTS {
        source.fill(buf)?;
        let value = buf.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64) & mask;
        if value < range {
            return Ok(min + value as i64);
        }
        trace!("rejected {} for range {}", value, range);
    }
    Err(SaltError::RetriesExhausted {
        attempts: MAX_ATTEMPTS,
    })
}
