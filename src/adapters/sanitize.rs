//! Identifier redaction for log output.
//!
//! Assessment logs only carry scores, tiers and factor labels, but intake
//! errors can echo user-supplied text. Every formatted log line passes
//! through [`redact`] before reaching its sink, replacing:
//! - UUIDs (record identifiers)
//! - SSN-like numbers
//! - Medical record numbers
//! - Email addresses and phone numbers
//! - Labelled dates of birth
//!
//! Input longer than `STROKESENSE_SANITIZE_MAX_BYTES` (default 16 KiB) is
//! truncated before scanning.

use std::io::Write;
use std::sync::OnceLock;

use regex::{Regex, RegexSet};
use tracing_subscriber::fmt::MakeWriter;

const DEFAULT_MAX_BYTES: usize = 16 * 1024;

const RULES: [(&str, &str); 6] = [
    (
        r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
        "[REDACTED-UUID]",
    ),
    (r"\b\d{3}-\d{2}-\d{4}\b", "[REDACTED-SSN]"),
    (r"(?i)\bMRN[:#\s]?\s*\d{6,10}\b", "[REDACTED-MRN]"),
    (
        r"(?i)\b[a-z0-9](?:[a-z0-9._%+-]{0,62}[a-z0-9])?@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}\b",
        "[REDACTED-EMAIL]",
    ),
    (
        r"\b(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b",
        "[REDACTED-PHONE]",
    ),
    (
        r"(?i)\b(?:dob|date of birth|birth ?date)\b\s*[:=]?\s*[0-9][0-9./-]{5,9}",
        "[REDACTED-DOB]",
    ),
];

struct Redactor {
    set: RegexSet,
    rules: Vec<(Regex, &'static str)>,
}

static REDACTOR: OnceLock<Redactor> = OnceLock::new();

fn redactor() -> &'static Redactor {
    REDACTOR.get_or_init(|| Redactor {
        set: RegexSet::new(RULES.iter().map(|(pattern, _)| *pattern)).expect("Valid regex set"),
        rules: RULES
            .iter()
            .map(|(pattern, replacement)| (Regex::new(pattern).expect("Valid regex"), *replacement))
            .collect(),
    })
}

fn max_bytes() -> usize {
    std::env::var("STROKESENSE_SANITIZE_MAX_BYTES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(DEFAULT_MAX_BYTES)
}

fn truncate_at_char_boundary(input: &str, limit: usize) -> (&str, bool) {
    if input.len() <= limit {
        return (input, false);
    }
    let mut end = limit;
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

/// Replace identifiers in `input` with redaction markers.
#[must_use]
pub fn redact(input: &str) -> String {
    redact_with_limit(input, max_bytes())
}

fn redact_with_limit(input: &str, limit: usize) -> String {
    let redactor = redactor();
    let (prefix, truncated) = truncate_at_char_boundary(input, limit);

    let mut out = prefix.to_string();
    for idx in redactor.set.matches(prefix).into_iter() {
        let (regex, replacement) = &redactor.rules[idx];
        out = regex.replace_all(&out, *replacement).into_owned();
    }

    if truncated {
        out.push_str(" [TRUNCATED]");
    }
    out
}

/// Redact one buffered log line, keeping its trailing newline even when the
/// body is truncated.
fn redact_line(line: &[u8], limit: usize) -> Vec<u8> {
    let (body, newline) = match line.split_last() {
        Some((b'\n', body)) => (body, true),
        _ => (line, false),
    };

    let text = String::from_utf8_lossy(body);
    let mut out = if text.len() <= limit && !contains_identifier(&text) {
        text.into_owned()
    } else {
        redact_with_limit(&text, limit)
    };
    if newline {
        out.push('\n');
    }
    out.into_bytes()
}

/// Whether `input` contains anything [`redact`] would replace.
#[must_use]
pub fn contains_identifier(input: &str) -> bool {
    let (prefix, _) = truncate_at_char_boundary(input, max_bytes());
    redactor().set.is_match(prefix)
}

/// `MakeWriter` wrapper that redacts each formatted log line before it is
/// written to the inner sink.
#[derive(Debug, Clone)]
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter {
            inner: self.inner.make_writer(),
            pending: Vec::new(),
        }
    }
}

/// Line-buffering writer produced by [`SanitizingMakeWriter`].
pub struct SanitizingWriter<W: std::io::Write> {
    inner: W,
    pending: Vec<u8>,
}

impl<W: std::io::Write> SanitizingWriter<W> {
    fn write_complete_lines(&mut self) -> std::io::Result<()> {
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            self.inner.write_all(&redact_line(&line, max_bytes()))?;
        }
        Ok(())
    }

    fn write_remainder(&mut self) -> std::io::Result<()> {
        if !self.pending.is_empty() {
            let rest = redact_line(&self.pending, max_bytes());
            self.pending.clear();
            self.inner.write_all(&rest)?;
        }
        Ok(())
    }
}

impl<W: std::io::Write> std::io::Write for SanitizingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.pending.extend_from_slice(buf);
        self.write_complete_lines()?;

        // A single line with no newline must not grow without bound.
        if self.pending.len() > max_bytes().saturating_mul(2) {
            self.write_remainder()?;
            self.inner.write_all(b"\n")?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.write_complete_lines()?;
        self.write_remainder()?;
        self.inner.flush()
    }
}

impl<W: std::io::Write> Drop for SanitizingWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
