//! Sequence loading utilities
//!
//! Sequences arrive either as CLI argument tokens or as files with one value
//! per line. Malformed tokens are rejected rather than skipped: silently
//! dropping a value would silently change the extremes.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for sequence acquisition
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Parse { position: usize, token: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read sequence: {err}"),
            Self::Parse { position, token } => {
                write!(f, "Invalid number {token:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Parse a sequence from CLI argument tokens
///
/// # Errors
/// Returns `LoadError::Parse` with the 1-based token position on the first
/// token that is not an integer.
///
/// # Examples
/// ```
/// use maxmin_select::input::parse_values;
///
/// let tokens = vec!["5".to_string(), "-3".to_string(), "10".to_string()];
/// assert_eq!(parse_values(&tokens).unwrap(), vec![5, -3, 10]);
///
/// assert!(parse_values(&["abc".to_string()]).is_err());
/// ```
pub fn parse_values(tokens: &[String]) -> Result<Vec<i64>, LoadError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token.trim().parse().map_err(|_| LoadError::Parse {
                position: index + 1,
                token: token.clone(),
            })
        })
        .collect()
}

/// Load a sequence from a file, one value per line
///
/// Blank lines are skipped; anything else must parse as an integer.
///
/// # Errors
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Parse`
/// with the 1-based line number on the first malformed line.
///
/// # Examples
/// ```no_run
/// use maxmin_select::input::load_from_file;
///
/// let values = load_from_file("data/sequence.txt").unwrap();
/// println!("Loaded {} values", values.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<i64>, LoadError> {
    let content = fs::read_to_string(path)?;

    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.parse().map_err(|_| LoadError::Parse {
                    position: index + 1,
                    token: trimmed.to_string(),
                }))
            }
        })
        .collect()
}
