//! Pattern-matching demo operations: a validation loop that re-prompts until
//! the input matches, a match-testing loop, and capture-group substitution.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::display;
use crate::error::{Error, Result};

pub const SEPARATOR_WIDTH: usize = 50;

lazy_static! {
    static ref PHONE_DIGITS: Regex =
        Regex::new(r"(\d{2})(\d{2})(\d{2})(\d{3})").expect("phone pattern is valid");
    static ref NINE_DIGITS: Regex = Regex::new(r"\d{9}").expect("nine-digit pattern is valid");
}

//==============================================================================
// Validation
//==============================================================================

/// Unanchored pattern check: a match anywhere in the text is enough.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    regex: Regex,
}

impl PatternValidator {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn validate(&self, text: &str) -> Result<()> {
        if self.regex.is_match(text) {
            Ok(())
        } else {
            Err(Error::invalid_input(text, self.regex.as_str()))
        }
    }
}

/// Messages printed by [`prompt_until_valid`].
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    pub question: &'a str,
    pub accepted: &'a str,
    pub rejected: &'a str,
}

impl Prompt<'static> {
    pub const EMAIL: Prompt<'static> = Prompt {
        question: "Enter your email address: ",
        accepted: "Email is valid!",
        rejected: "Not valid!",
    };
}

/// Keeps asking until a line passes `validator` and returns that line.
///
/// Rejected lines are reported and retried; only running out of input ends
/// the loop with an error.
pub fn prompt_until_valid<R, W>(
    input: &mut R,
    out: &mut W,
    validator: &PatternValidator,
    prompt: Prompt<'_>,
) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    let mut attempts = 0usize;
    loop {
        write!(out, "{}", prompt.question)?;
        out.flush()?;

        let line = read_trimmed_line(input)?.ok_or(Error::InputClosed)?;
        attempts += 1;

        match validator.validate(&line) {
            Ok(()) => {
                writeln!(out, "{}", prompt.accepted)?;
                debug!(attempts, "input accepted");
                return Ok(line);
            }
            Err(err @ Error::InvalidInput { .. }) => {
                warn!(%err, attempts, "input rejected");
                writeln!(out, "{}", prompt.rejected)?;
            }
            Err(err) => return Err(err),
        }
    }
}

//==============================================================================
// Match-testing loop
//==============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub matched: usize,
    pub rejected: usize,
}

/// Reports whether each line matches `regex` until `exit_word` or end of input.
pub fn match_loop<R, W>(input: &mut R, out: &mut W, regex: &Regex, exit_word: &str) -> Result<MatchSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = MatchSummary::default();
    loop {
        writeln!(out, "Enter string: ")?;
        let Some(line) = read_trimmed_line(input)? else {
            break;
        };
        if line == exit_word {
            break;
        }

        if regex.is_match(&line) {
            summary.matched += 1;
            writeln!(out, "String \"{line}\" matched")?;
        } else {
            summary.rejected += 1;
            writeln!(out, "String \"{line}\" NOT matched")?;
        }
        display::separator(out, SEPARATOR_WIDTH)?;
    }
    debug!(?summary, "match loop finished");
    Ok(summary)
}

//==============================================================================
// Substitution
//==============================================================================

/// Rewrites each nine-digit run as `+38 (0XX)-XX-XX-XXX` using capture groups.
pub fn format_phone_numbers(text: &str) -> Cow<'_, str> {
    PHONE_DIGITS.replace_all(text, "+38 (0$1)-$2-$3-$4")
}

/// Same result as [`format_phone_numbers`], computed by a closure that parses
/// each nine-digit run as a number.
pub fn format_phone_numbers_with(text: &str) -> Cow<'_, str> {
    NINE_DIGITS.replace_all(text, |caps: &Captures<'_>| {
        match caps[0].parse::<u64>() {
            Ok(number) => format!(
                "+38 (0{:02})-{:02}-{:02}-{:03}",
                number / 10_000_000,
                number / 100_000 % 100,
                number / 1_000 % 100,
                number % 1_000
            ),
            Err(_) => caps[0].to_string(),
        }
    })
}

fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_EMAIL_PATTERN, DEFAULT_PHONE_TEXT, DEFAULT_WORD_PATTERN};
    use std::io::Cursor;

    fn email() -> PatternValidator {
        PatternValidator::new(DEFAULT_EMAIL_PATTERN).unwrap()
    }

    #[test]
    fn test_email_validation() {
        let validator = email();

        assert!(validator.validate("a12@b.com").is_ok());
        let err = validator.validate("not-an-email").unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref input, .. } if input == "not-an-email"));
    }

    #[test]
    fn test_email_needs_two_word_chars_before_at() {
        let validator = email();
        assert!(validator.validate("a@b.com").is_err());
        assert!(validator.validate("contact: ab@mail.org please").is_ok());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(PatternValidator::new("(unclosed"), Err(Error::Pattern(_))));
    }

    #[test]
    fn test_prompt_retries_until_valid() {
        let mut input = Cursor::new("not-an-email\nstill bad\na12@b.com\nignored\n");
        let mut out = Vec::new();

        let accepted = prompt_until_valid(&mut input, &mut out, &email(), Prompt::EMAIL).unwrap();
        assert_eq!(accepted, "a12@b.com");

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Enter your email address: ").count(), 3);
        assert_eq!(text.matches("Not valid!").count(), 2);
        assert!(text.ends_with("Email is valid!\n"));
    }

    #[test]
    fn test_prompt_handles_crlf() {
        let mut input = Cursor::new("a12@b.com\r\n");
        let mut out = Vec::new();

        let accepted = prompt_until_valid(&mut input, &mut out, &email(), Prompt::EMAIL).unwrap();
        assert_eq!(accepted, "a12@b.com");
    }

    #[test]
    fn test_prompt_input_closed() {
        let mut input = Cursor::new("nope\n");
        let mut out = Vec::new();

        let err = prompt_until_valid(&mut input, &mut out, &email(), Prompt::EMAIL).unwrap_err();
        assert!(matches!(err, Error::InputClosed));
    }

    #[test]
    fn test_match_loop_stops_at_exit() {
        let regex = Regex::new(DEFAULT_WORD_PATTERN).unwrap();
        let mut input = Cursor::new("Hello\nlowercase\nexit\nNever\n");
        let mut out = Vec::new();

        let summary = match_loop(&mut input, &mut out, &regex, "exit").unwrap();
        assert_eq!(summary, MatchSummary { matched: 1, rejected: 1 });

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("String \"Hello\" matched\n"));
        assert!(text.contains("String \"lowercase\" NOT matched\n"));
        assert!(!text.contains("Never"));
        assert_eq!(text.matches(&"-".repeat(SEPARATOR_WIDTH)).count(), 2);
    }

    #[test]
    fn test_match_loop_ends_at_eof() {
        let regex = Regex::new(DEFAULT_WORD_PATTERN).unwrap();
        let mut input = Cursor::new("mixed Case");
        let mut out = Vec::new();

        let summary = match_loop(&mut input, &mut out, &regex, "exit").unwrap();
        assert_eq!(summary, MatchSummary { matched: 1, rejected: 0 });
    }

    #[test]
    fn test_format_phone_numbers() {
        assert_eq!(
            format_phone_numbers(DEFAULT_PHONE_TEXT),
            "blalba +38 (084)-75-63-981 argg aeg aegha +38 (045)-45-45-451 ajerg ia +38 (098)-76-54-321 Bye!"
        );
    }

    #[test]
    fn test_closure_replacer_agrees() {
        assert_eq!(
            format_phone_numbers_with(DEFAULT_PHONE_TEXT),
            format_phone_numbers(DEFAULT_PHONE_TEXT)
        );
    }

    #[test]
    fn test_no_digits_borrows() {
        assert!(matches!(format_phone_numbers("no numbers here"), Cow::Borrowed(_)));
    }
}
