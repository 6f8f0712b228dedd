//! The split-specification mini-language.
//!
//! A tiny grammar consumed from command surfaces, case-insensitive on
//! keywords:
//!
//! ```text
//! spec := "h" DIGIT          heading level 1-6, e.g. "h2"
//!       | "length=" INT      word-count target, INT >= 1
//!       | "parts=" INT       part count, INT >= 1
//!       | "delimiter=" TEXT  literal text; backslash escapes decoded
//!       | "break" | "page" | "chapter" | "auto"
//! ```
//!
//! Parsing failures are a single [`SplitError::InvalidSpec`] naming the
//! rejected string; a spec is never partially accepted.

use crate::error::{Result, SplitError};
use crate::result::SplitResult;
use crate::splitter::{
    split_auto, split_by_break, split_by_delimiter, split_by_heading_level, split_by_parts,
    split_by_word_count,
};
use doctree_core::Document;

/// A parsed split specification.
///
/// [`SplitSpec::apply`] maps each variant onto a strategy; `page` boundaries
/// reach this core as thematic breaks, so `page` shares the break strategy,
/// and `chapter` is heading level 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitSpec {
    /// Split at headings of this level (1-6)
    Heading(u8),
    /// Split by word-count target
    Words(usize),
    /// Split into roughly this many parts
    Parts(usize),
    /// Split at a literal delimiter (escapes already decoded)
    Delimiter(String),
    /// Split at thematic breaks
    Break,
    /// Split at page boundaries (thematic breaks)
    Page,
    /// Split at chapters (heading level 1)
    Chapter,
    /// Pick a strategy from the document's shape
    Auto,
}

impl SplitSpec {
    /// Runs the strategy this specification selects.
    ///
    /// # Errors
    ///
    /// Propagates the selected strategy's validation error; a spec produced
    /// by [`parse_split_spec`] always carries valid parameters.
    pub fn apply(&self, doc: Document) -> Result<Vec<SplitResult>> {
        match self {
            Self::Heading(level) => split_by_heading_level(doc, usize::from(*level), true),
            Self::Chapter => split_by_heading_level(doc, 1, true),
            Self::Words(target) => split_by_word_count(doc, *target),
            Self::Parts(count) => split_by_parts(doc, *count),
            Self::Delimiter(delimiter) => split_by_delimiter(doc, delimiter),
            Self::Break | Self::Page => Ok(split_by_break(doc)),
            Self::Auto => Ok(split_auto(doc, None)),
        }
    }
}

/// Parses a split specification string.
///
/// # Errors
///
/// Returns [`SplitError::InvalidSpec`] for a bad heading digit, an
/// out-of-range level, a non-positive length or part count, an empty
/// delimiter, or an unrecognized keyword.
///
/// # Examples
///
/// ```rust
/// use doctree_split::{parse_split_spec, SplitSpec};
///
/// assert_eq!(parse_split_spec("h3").unwrap(), SplitSpec::Heading(3));
/// assert_eq!(parse_split_spec("length=500").unwrap(), SplitSpec::Words(500));
/// assert_eq!(parse_split_spec("AUTO").unwrap(), SplitSpec::Auto);
/// assert!(parse_split_spec("h9").is_err());
/// ```
pub fn parse_split_spec(input: &str) -> Result<SplitSpec> {
    let invalid = || SplitError::InvalidSpec(input.to_string());
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Some((key, value)) = trimmed.split_once('=') {
        return match key.trim().to_ascii_lowercase().as_str() {
            "length" => match value.trim().parse::<usize>() {
                Ok(target) if target >= 1 => Ok(SplitSpec::Words(target)),
                _ => Err(invalid()),
            },
            "parts" => match value.trim().parse::<usize>() {
                Ok(count) if count >= 1 => Ok(SplitSpec::Parts(count)),
                _ => Err(invalid()),
            },
            "delimiter" => {
                let decoded = decode_escapes(value);
                if decoded.is_empty() {
                    Err(invalid())
                } else {
                    Ok(SplitSpec::Delimiter(decoded))
                }
            }
            _ => Err(invalid()),
        };
    }

    let lower = trimmed.to_ascii_lowercase();
    match lower.as_str() {
        "break" => Ok(SplitSpec::Break),
        "page" => Ok(SplitSpec::Page),
        "chapter" => Ok(SplitSpec::Chapter),
        "auto" => Ok(SplitSpec::Auto),
        _ => {
            if let Some(digit) = lower.strip_prefix('h') {
                if digit.len() == 1 {
                    if let Ok(level) = digit.parse::<u8>() {
                        if (1..=6).contains(&level) {
                            return Ok(SplitSpec::Heading(level));
                        }
                    }
                }
            }
            Err(invalid())
        }
    }
}

/// Decodes backslash escapes in a delimiter value.
///
/// `\n`, `\t`, `\r`, `\0`, and `\\` decode to their characters; an unknown
/// escape is kept literally, backslash and all.
fn decode_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_specs() {
        assert_eq!(parse_split_spec("h1").unwrap(), SplitSpec::Heading(1));
        assert_eq!(parse_split_spec("h3").unwrap(), SplitSpec::Heading(3));
        assert_eq!(parse_split_spec("H6").unwrap(), SplitSpec::Heading(6));
    }

    #[test]
    fn test_value_specs() {
        assert_eq!(parse_split_spec("length=500").unwrap(), SplitSpec::Words(500));
        assert_eq!(parse_split_spec("parts=4").unwrap(), SplitSpec::Parts(4));
        assert_eq!(
            parse_split_spec("delimiter=-----").unwrap(),
            SplitSpec::Delimiter("-----".to_string())
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(parse_split_spec("break").unwrap(), SplitSpec::Break);
        assert_eq!(parse_split_spec("PAGE").unwrap(), SplitSpec::Page);
        assert_eq!(parse_split_spec("Chapter").unwrap(), SplitSpec::Chapter);
        assert_eq!(parse_split_spec("auto").unwrap(), SplitSpec::Auto);
        assert_eq!(parse_split_spec("LENGTH=10").unwrap(), SplitSpec::Words(10));
    }

    #[test]
    fn test_delimiter_preserves_case_and_decodes_escapes() {
        assert_eq!(
            parse_split_spec("delimiter=PageBreak").unwrap(),
            SplitSpec::Delimiter("PageBreak".to_string())
        );
        assert_eq!(
            parse_split_spec(r"delimiter=line\none").unwrap(),
            SplitSpec::Delimiter("line\none".to_string())
        );
        assert_eq!(
            parse_split_spec(r"delimiter=tab\there").unwrap(),
            SplitSpec::Delimiter("tab\there".to_string())
        );
        // Unknown escapes stay literal.
        assert_eq!(
            parse_split_spec(r"delimiter=a\qb").unwrap(),
            SplitSpec::Delimiter(r"a\qb".to_string())
        );
    }

    #[test]
    fn test_rejects_bad_specs() {
        for bad in [
            "", "   ", "h0", "h7", "h9", "h12", "hx", "length=0", "length=-5", "length=ten",
            "parts=0", "delimiter=", "chunk", "h", "size=10",
        ] {
            let err = parse_split_spec(bad).unwrap_err();
            match err {
                SplitError::InvalidSpec(spec) => assert_eq!(spec, bad),
                other => panic!("expected InvalidSpec for '{bad}', got {other:?}"),
            }
        }
    }

    #[test]
    fn test_apply_dispatch() {
        use doctree_core::{Document, Heading, Paragraph};

        let doc = Document::with_children(vec![
            Heading::with_text(1, "One").unwrap().into(),
            Paragraph::from_text("body").into(),
        ]);

        let splits = SplitSpec::Chapter.apply(doc.clone()).unwrap();
        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].title.as_deref(), Some("One"));

        let splits = SplitSpec::Auto.apply(doc).unwrap();
        assert!(!splits.is_empty());
    }

    #[test]
    fn test_decode_escapes_edge_cases() {
        assert_eq!(decode_escapes(r"plain"), "plain");
        assert_eq!(decode_escapes(r"a\\b"), r"a\b");
        // A trailing lone backslash survives.
        assert_eq!(decode_escapes("end\\"), "end\\");
        assert_eq!(decode_escapes(r"\0"), "\0");
    }
}
