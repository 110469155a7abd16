//! Console rendering for query results.
//!
//! Everything writes to an `io::Write` so the demos can print to stdout and
//! tests can capture into a `Vec<u8>`. Iterating the query here is what
//! actually runs it.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;
use itertools::Itertools;

use crate::query::{Enumerable, Grouping};

/// Prints `"{title}: a b c"` on one line. Title defaults to `Array`.
pub fn show_collection<Q, W>(out: &mut W, query: &Q, title: Option<&str>) -> io::Result<()>
where
    Q: Enumerable,
    Q::Item: Display,
    W: Write,
{
    let title = title.unwrap_or("Array");
    writeln!(out, "{}: {}", title.bold(), query.iter().join(" "))
}

/// Prints each group key followed by its elements, one per tab-indented line.
pub fn show_groups<Q, K, T, W>(out: &mut W, groups: &Q, title: Option<&str>) -> io::Result<()>
where
    Q: Enumerable<Item = Grouping<K, T>>,
    K: Display,
    T: Display,
    W: Write,
{
    let title = title.unwrap_or("Groups");
    writeln!(out, "{}", format!("----- {title} -----").cyan())?;
    for group in groups.iter() {
        writeln!(out, "Group {}:", group.key())?;
        for item in &group {
            writeln!(out, "\t{item}")?;
        }
    }
    writeln!(out)
}

pub fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", format!("=== {title} ===").green().bold())
}

pub fn separator<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Source;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_show_collection() {
        let numbers = Source::from([1, -3, 12]);
        let text = render(|out| show_collection(out, &numbers, Some("Original")));
        assert_eq!(text, "Original: 1 -3 12\n");
    }

    #[test]
    fn test_show_collection_default_title_and_empty() {
        let empty: Source<i32> = Source::new(Vec::new());
        let text = render(|out| show_collection(out, &empty, None));
        assert_eq!(text, "Array: \n");
    }

    #[test]
    fn test_show_groups() {
        let words = Source::from(["red", "blue", "rose"]);
        let groups = words.query().group_by(|w| w.chars().next().unwrap_or(' '));

        let text = render(|out| show_groups(out, &groups, Some("By letter")));
        assert_eq!(
            text,
            "----- By letter -----\nGroup r:\n\tred\n\trose\nGroup b:\n\tblue\n\n"
        );
    }

    #[test]
    fn test_separator_width() {
        let text = render(|out| separator(out, 5));
        assert_eq!(text, "-----\n");
    }
}
