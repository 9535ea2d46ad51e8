use crate::error::ScanError;
use anyhow::{Context, Result};
use std::{
    borrow::Cow,
    cmp::{max, min},
    fs,
    ops::{Range, RangeInclusive},
    path::Path,
};

/// Whole log held in memory, addressed by 1-based line numbers.
pub struct SourceText {
    text: String,
    lines: Vec<Range<usize>>,
}

impl SourceText {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScanError::LogNotFound { path: path.into() }.into());
        }

        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let source = Self::from_bytes(&bytes);
        tracing::debug!(
            path = %path.display(),
            bytes = bytes.len(),
            lines = source.len(),
            "log loaded"
        );

        Ok(source)
    }

    /// Decodes `bytes` as UTF-8, substituting U+FFFD for invalid sequences.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text = match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => text.to_owned(),
            Cow::Owned(text) => {
                tracing::warn!("log is not valid UTF-8, undecodable bytes were replaced");
                text
            }
        };

        Self::from(text)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> u64 {
        self.lines.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, line_number: u64) -> Option<&str> {
        let index = usize::try_from(line_number.checked_sub(1)?).ok()?;
        self.lines
            .get(index)
            .map(|range| &self.text[range.clone()])
    }

    /// Line numbers at most `radius` away from `line_number`, clamped to the
    /// file. `None` if `line_number` is not a line of this source.
    pub fn window(&self, line_number: u64, radius: u64) -> Option<RangeInclusive<u64>> {
        let total = self.len();
        if line_number == 0 || line_number > total {
            return None;
        }

        let start = max(1, line_number.saturating_sub(radius));
        let end = min(total, line_number.saturating_add(radius));
        Some(start..=end)
    }
}

/// Line boundaries recognized when splitting. `\r\n` counts as one.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

impl From<String> for SourceText {
    /// Lines are stored joined by `\n` alone so the searcher's line numbers
    /// index `lines` directly.
    fn from(raw: String) -> Self {
        let mut text = String::with_capacity(raw.len());
        let mut lines = Vec::new();
        let mut rest = raw.as_str();

        while !rest.is_empty() {
            let (line, tail) = match rest.find(LINE_BREAKS) {
                Some(at) => {
                    let terminator = &rest[at..];
                    let width = if terminator.starts_with("\r\n") {
                        2
                    } else {
                        terminator.chars().next().map_or(1, char::len_utf8)
                    };
                    (&rest[..at], &rest[at + width..])
                }
                None => (rest, ""),
            };

            if !lines.is_empty() {
                text.push('\n');
            }
            let start = text.len();
            text.push_str(line);
            lines.push(start..text.len());
            rest = tail;
        }

        Self { text, lines }
    }
}
