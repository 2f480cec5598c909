use std::fmt::{Display, Formatter};

use crate::salt::SaltMap;

const NAME_HEADER: &str = "Name";
const VALUE_HEADER: &str = "Value";

/// Boxed two-column console table of a salt map.
#[derive(Debug, Clone, Copy)]
pub struct SaltTable<'a>(pub &'a SaltMap);

impl SaltTable<'_> {
    fn widths(&self) -> (usize, usize) {
        self.0.iter().fold(
            (NAME_HEADER.len(), VALUE_HEADER.len()),
            |(name_w, value_w), (name, salt)| {
                (
                    name_w.max(name.chars().count()),
                    value_w.max(salt.chars().count()),
                )
            },
        )
    }
}

fn rule(
    f: &mut Formatter<'_>,
    (left, mid, right): (char, char, char),
    widths: (usize, usize),
) -> std::fmt::Result {
    writeln!(
        f,
        "{}{}{}{}{}",
        left,
        "─".repeat(widths.0 + 2),
        mid,
        "─".repeat(widths.1 + 2),
        right
    )
}

fn row(
    f: &mut Formatter<'_>,
    name: &str,
    value: &str,
    (name_w, value_w): (usize, usize),
) -> std::fmt::Result {
    writeln!(f, "│ {:<name_w$} │ {:<value_w$} │", name, value)
}

impl Display for SaltTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let widths = self.widths();
        rule(f, ('┌', '┬', '┐'), widths)?;
        row(f, NAME_HEADER, VALUE_HEADER, widths)?;
        rule(f, ('├', '┼', '┤'), widths)?;
        for (name, salt) in self.0 {
            row(f, name, salt, widths)?;
        }
        rule(f, ('└', '┴', '┘'), widths)
    }
}
