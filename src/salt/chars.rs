use std::iter::repeat_with;

use log::trace;

use super::{random_int, RandomSource, SaltError, MAX_ATTEMPTS};

/// Visible ASCII, `'!'` through `'~'`.
const PRINTABLE_START: i64 = 33;
const PRINTABLE_END: i64 = 127;

/// Characters that would need escaping inside quoted shell, PHP or dotenv literals.
const UNSAFE_CHARS: [char; 3] = ['\'', '"', '\\'];

/// One visible ASCII character other than `'`, `"` or `\`, drawn uniformly.
pub fn random_printable_char<R: RandomSource + ?Sized>(source: &R) -> Result<char, SaltError> {
    for _ in 0..MAX_ATTEMPTS {
        let code = random_int(source, PRINTABLE_START, PRINTABLE_END)?;
        let c = char::from(code as u8);
        if !UNSAFE_CHARS.contains(&c) {
            return Ok(c);
        }
        trace!("rejected unsafe char {:?}", c);
    }
    Err(SaltError::RetriesExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// Concatenate `length` independent printable draws. No minimum is applied here.
pub fn generate_salt<R: RandomSource + ?Sized>(
    source: &R,
    length: usize,
) -> Result<String, SaltError> {
    repeat_with(|| random_printable_char(source))
        .take(length)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{generate_salt, random_printable_char, UNSAFE_CHARS};
    use crate::salt::{
        testing::{FailAfter, FailingSource, ScriptedSource, SeededSource},
        OsRandom, SaltError,
    };

    fn is_salt_char(c: char) -> bool {
        ('!'..='~').contains(&c) && !UNSAFE_CHARS.contains(&c)
    }

    #[test]
    fn skips_quotes_and_backslash() -> anyhow::Result<()> {
        // Offsets from 33: 6 -> '\'', 1 -> '"', 59 -> '\\', 100 is past the range, 0 -> '!'.
        let source = ScriptedSource::new(&[6, 1, 59, 100, 0]);
        assert_eq!(random_printable_char(&source)?, '!');
        assert_eq!(source.consumed(), 5);
        Ok(())
    }

    #[test]
    fn high_bit_is_masked() -> anyhow::Result<()> {
        let source = ScriptedSource::new(&[0x80 | 93]);
        assert_eq!(random_printable_char(&source)?, '~');
        Ok(())
    }

    #[test]
    fn only_quotes_gives_up() {
        let source = ScriptedSource::new(&[6, 1, 59]);
        assert!(matches!(
            random_printable_char(&source),
            Err(SaltError::RetriesExhausted { .. })
        ));
    }

    #[test]
    fn never_unsafe() -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for _ in 0..20_000 {
            let c = random_printable_char(&OsRandom)?;
            assert!(is_salt_char(c), "unexpected char {:?}", c);
            seen.insert(c);
        }
        // 94 visible characters minus the three excluded ones.
        assert_eq!(seen.len(), 91);
        Ok(())
    }

    #[test]
    fn exact_length() -> anyhow::Result<()> {
        let source = SeededSource::new(42);
        for n in [0, 1, 10, 64, 200] {
            let salt = generate_salt(&source, n)?;
            assert_eq!(salt.chars().count(), n);
            assert!(salt.chars().all(is_salt_char));
        }
        Ok(())
    }

    #[test]
    fn source_failure_is_not_a_short_salt() {
        assert!(matches!(
            generate_salt(&FailAfter::new(10), 64),
            Err(SaltError::NoSecureRandomSource(_))
        ));
        assert!(matches!(
            random_printable_char(&FailingSource),
            Err(SaltError::NoSecureRandomSource(_))
        ));
    }

    #[test]
    fn draw_order() -> anyhow::Result<()> {
        let source = ScriptedSource::new(&[32, 33, 34]);
        assert_eq!(generate_salt(&source, 3)?, "ABC");
        Ok(())
    }
}
