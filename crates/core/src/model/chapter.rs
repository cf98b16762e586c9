use thiserror::Error;

/// Chapter identifier, compared by its textual representation.
///
/// Spreadsheet readers often surface integer chapters as floats (`3.0`);
/// integral values are normalised so `3`, `3.0` and ` 3 ` are the same chapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chapter(String);

impl Chapter {
    /// Create a chapter from a raw cell value.
    ///
    /// # Errors
    ///
    /// Returns `ChapterError::Empty` if the cell is blank after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ChapterError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChapterError::Empty);
        }
        Ok(Self(normalize_integral(trimmed)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `3.0` and `3.` become `3`; anything else (`2.5`, `1.5e1`, `1.2.3`) is kept verbatim.
fn normalize_integral(value: &str) -> String {
    let Some((int_part, fraction)) = value.split_once('.') else {
        return value.to_string();
    };
    let digits = int_part.strip_prefix(['+', '-']).unwrap_or(int_part);
    let integral = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b == b'0');
    if integral {
        int_part.to_string()
    } else {
        value.to_string()
    }
}

impl std::fmt::Display for Chapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Chapter {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChapterError {
    #[error("chapter cannot be empty")]
    Empty,
}
