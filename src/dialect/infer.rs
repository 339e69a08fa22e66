//! Dialect inference over a bounded byte sample
//!
//! The sample is truncated before any analysis, so worst-case cost is a
//! constant regardless of source size. Candidate delimiters are scored
//! by how consistently they split the sample's lines; ties fall to a
//! fixed preference order, making inference deterministic. Low-confidence
//! samples fall back to the documented default dialect, never an error.

use super::encoding::{decode, detect_encoding};
use super::errors::{ConfigurationError, DialectResult};
use super::options::{DialectOptions, DialectParameters};

/// Delimiter candidates in preference order: the earlier candidate wins
/// a tie because it is the less ambiguous choice in tabular sources.
const DELIMITER_CANDIDATES: &[char] = &[',', '\t', ';', '|'];

/// Quote candidates in preference order.
const QUOTE_CANDIDATES: &[char] = &['"', '\''];

/// A delimiter must split at least this fraction of sampled lines into
/// the same field count (and into more than one field) to be accepted.
const MIN_LINE_AGREEMENT_NUM: usize = 1;
const MIN_LINE_AGREEMENT_DEN: usize = 2;

/// Infers parsing parameters from the leading bytes of a source.
///
/// The input is truncated to `min(len, sample_bytes)` first. Returns the
/// default dialect when the sample is empty or no candidate scores above
/// the confidence threshold.
///
/// # Errors
///
/// - `ConfigurationError::NegativeSampleBytes` when `sample_bytes` is
///   present and negative.
/// - `ConfigurationError::Undecodable` when no supported encoding can
///   decode the sample.
pub fn infer_dialect(
    bytes: &[u8],
    options: &DialectOptions,
) -> DialectResult<DialectParameters> {
    let limit = options.effective_sample_bytes()?;
    let truncated = bytes.len() > limit;
    let sample = &bytes[..bytes.len().min(limit)];

    if sample.is_empty() {
        return Ok(DialectParameters::default_dialect());
    }

    let encoding = detect_encoding(sample, truncated).ok_or(ConfigurationError::Undecodable)?;
    let text = decode(sample, encoding);
    let lines = sample_lines(&text, truncated);

    if lines.is_empty() {
        return Ok(DialectParameters {
            encoding,
            ..DialectParameters::default_dialect()
        });
    }

    let quote = infer_quote(&lines);
    let delimiter = infer_delimiter(&lines, quote)
        .unwrap_or(DialectParameters::default_dialect().delimiter);
    let has_header = infer_header(&lines, delimiter, quote);

    Ok(DialectParameters {
        delimiter,
        quote,
        has_header,
        encoding,
    })
}

/// Splits the decoded sample into complete lines.
///
/// A truncated sample may end mid-line; that final fragment is dropped
/// so it cannot skew field counts.
fn sample_lines(text: &str, truncated: bool) -> Vec<&str> {
    let ends_on_boundary = text.ends_with('\n');
    let mut lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();

    if truncated && !ends_on_boundary {
        lines.pop();
    }
    lines
}

/// Picks the quote character that actually appears at field boundaries.
fn infer_quote(lines: &[&str]) -> char {
    for &candidate in QUOTE_CANDIDATES {
        if lines.iter().any(|line| quoted_field_present(line, candidate)) {
            return candidate;
        }
    }
    QUOTE_CANDIDATES[0]
}

/// True when the line holds a field that starts with the quote char.
fn quoted_field_present(line: &str, quote: char) -> bool {
    let mut at_field_start = true;
    for c in line.chars() {
        if at_field_start && c == quote {
            return true;
        }
        at_field_start = DELIMITER_CANDIDATES.contains(&c);
    }
    false
}

/// Scores each delimiter candidate by line agreement and returns the
/// winner, or `None` when nothing clears the confidence threshold.
fn infer_delimiter(lines: &[&str], quote: char) -> Option<char> {
    let mut best: Option<(char, usize, usize)> = None;

    for &candidate in DELIMITER_CANDIDATES {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| split_fields(line, candidate, quote).len())
            .collect();

        let Some((modal, agreeing)) = modal_count(&counts) else {
            continue;
        };
        if modal < 2 {
            continue;
        }
        if agreeing * MIN_LINE_AGREEMENT_DEN < lines.len() * MIN_LINE_AGREEMENT_NUM {
            continue;
        }

        // Strictly-greater keeps the earlier candidate on ties, which is
        // the fixed preference order.
        let better = match best {
            None => true,
            Some((_, best_agreeing, best_modal)) => {
                agreeing > best_agreeing || (agreeing == best_agreeing && modal > best_modal)
            }
        };
        if better {
            best = Some((candidate, agreeing, modal));
        }
    }

    best.map(|(candidate, _, _)| candidate)
}

/// Returns the most frequent field count and how many lines agree on it.
/// Ties prefer the higher count (the more specific split).
fn modal_count(counts: &[usize]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for &count in counts {
        let agreeing = counts.iter().filter(|&&c| c == count).count();
        let better = match best {
            None => true,
            Some((best_count, best_agreeing)) => {
                agreeing > best_agreeing || (agreeing == best_agreeing && count > best_count)
            }
        };
        if better {
            best = Some((count, agreeing));
        }
    }
    best
}

/// Splits one line into fields, honoring the quote character. Doubled
/// quotes inside a quoted field are an escape, not a terminator.
pub(crate) fn split_fields(line: &str, delimiter: char, quote: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == quote {
            if in_quotes && chars.peek() == Some(&quote) {
                current.push(quote);
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);
    fields
}

/// Decides header presence: a numeric cell in the first row marks it as
/// data; otherwise the first row is taken as a header. Ambiguous samples
/// default to header-present.
fn infer_header(lines: &[&str], delimiter: char, quote: char) -> bool {
    if lines.is_empty() {
        return true;
    }

    let first = split_fields(lines[0], delimiter, quote);
    !first.iter().any(|f| is_numeric(f))
}

fn is_numeric(field: &str) -> bool {
    let trimmed = field.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::encoding::Encoding;

    #[test]
    fn test_comma_delimited_sample() {
        let sample = b"id,name,score\n1,alice,9.5\n2,bob,7.25\n";
        let dialect = infer_dialect(sample, &DialectOptions::new()).unwrap();
        assert_eq!(dialect.delimiter, ',');
        assert!(dialect.has_header);
        assert_eq!(dialect.encoding, Encoding::Utf8);
    }

    #[test]
    fn test_semicolon_delimited_sample() {
        let sample = b"id;name;score\n1;alice;9,5\n2;bob;7,25\n";
        let dialect = infer_dialect(sample, &DialectOptions::new()).unwrap();
        assert_eq!(dialect.delimiter, ';');
    }

    #[test]
    fn test_tab_delimited_sample() {
        let sample = b"id\tname\n1\talice\n2\tbob\n";
        let dialect = infer_dialect(sample, &DialectOptions::new()).unwrap();
        assert_eq!(dialect.delimiter, '\t');
    }

    #[test]
    fn test_pipe_delimited_sample() {
        let sample = b"id|name\n1|alice\n2|bob\n";
        let dialect = infer_dialect(sample, &DialectOptions::new()).unwrap();
        assert_eq!(dialect.delimiter, '|');
    }

    #[test]
    fn test_delimiter_inside_quotes_ignored() {
        let sample = b"id,title\n1,\"comma, inside\"\n2,\"plain\"\n";
        let dialect = infer_dialect(sample, &DialectOptions::new()).unwrap();
        assert_eq!(dialect.delimiter, ',');
        assert_eq!(dialect.quote, '"');
    }

    #[test]
    fn test_numeric_first_row_means_no_header() {
        let sample = b"1,2,3\n4,5,6\n7,8,9\n";
        let dialect = infer_dialect(sample, &DialectOptions::new()).unwrap();
        assert!(!dialect.has_header);
    }

    #[test]
    fn test_ambiguous_sample_falls_back_to_default() {
        let sample = b"plain text without any structure\n";
        let dialect = infer_dialect(sample, &DialectOptions::new()).unwrap();
        assert_eq!(dialect.delimiter, ',');
        assert_eq!(dialect.quote, '"');
        assert!(dialect.has_header);
    }

    #[test]
    fn test_empty_input_returns_default() {
        let dialect = infer_dialect(b"", &DialectOptions::new()).unwrap();
        assert_eq!(dialect, DialectParameters::default_dialect());
    }

    #[test]
    fn test_zero_sample_bytes_returns_default() {
        let sample = b"id;name\n1;alice\n";
        let dialect = infer_dialect(sample, &DialectOptions::with_sample_bytes(0)).unwrap();
        assert_eq!(dialect, DialectParameters::default_dialect());
    }

    #[test]
    fn test_negative_sample_bytes_is_error() {
        let result = infer_dialect(b"a,b\n", &DialectOptions::with_sample_bytes(-10));
        assert_eq!(
            result,
            Err(ConfigurationError::NegativeSampleBytes { value: -10 })
        );
    }

    #[test]
    fn test_undecodable_sample_is_error() {
        let result = infer_dialect(&[0xFF, 0x00, 0x80, 0x80], &DialectOptions::new());
        assert_eq!(result, Err(ConfigurationError::Undecodable));
    }

    #[test]
    fn test_inference_is_deterministic() {
        let sample = b"a;b;c\n1;2;3\n4;5;6\n";
        let options = DialectOptions::new();
        let first = infer_dialect(sample, &options).unwrap();
        let second = infer_dialect(sample, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_truncation_drops_partial_last_line() {
        // 24-byte limit cuts the third row mid-field; the fragment must
        // not affect scoring.
        let sample = b"id,name\n1,alice\n2,bobby-long-tail";
        let options = DialectOptions::with_sample_bytes(24);
        let dialect = infer_dialect(sample, &options).unwrap();
        assert_eq!(dialect.delimiter, ',');
    }

    #[test]
    fn test_utf16_sample_decoded_via_bom() {
        let text = "id,name\n1,a\n2,b\n";
        let mut bytes = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let dialect = infer_dialect(&bytes, &DialectOptions::new()).unwrap();
        assert_eq!(dialect.encoding, Encoding::Utf16Le);
        assert_eq!(dialect.delimiter, ',');
    }

    #[test]
    fn test_split_fields_handles_escaped_quotes() {
        let fields = split_fields(r#"a,"say ""hi""",c"#, ',', '"');
        assert_eq!(fields, vec!["a", r#"say "hi""#, "c"]);
    }

    #[test]
    fn test_single_column_sample_not_confident() {
        // One field per line never clears the modal >= 2 bar.
        let sample = b"alpha\nbeta\ngamma\n";
        let dialect = infer_dialect(sample, &DialectOptions::new()).unwrap();
        assert_eq!(dialect.delimiter, ',');
    }
}
