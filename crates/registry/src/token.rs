//! crates/registry/src/token.rs
//! Level-token parsing for the runtime control interface.
//!
//! Operator consoles hand the registry compact tokens like `Core5` or
//! `Physics` instead of separate name/level arguments. A trailing digit run
//! is the requested threshold; a bare name means level 1.

use thiserror::Error;

use super::registry::MessageRegistry;

/// Errors produced when a level token cannot be parsed.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LevelTokenError {
    /// The token was empty.
    #[error("empty level token")]
    Empty,
    /// The token was all digits, leaving no type name.
    #[error("level token `{token}` has no type name")]
    MissingName {
        /// The offending token.
        token: String,
    },
    /// The digit run did not fit the level range.
    #[error("invalid level in token `{token}`")]
    InvalidLevel {
        /// The offending token.
        token: String,
    },
}

impl MessageRegistry {
    /// Parses a token like `Core5` and applies it via
    /// [`set_level`](MessageRegistry::set_level).
    ///
    /// A token without a digit suffix sets level 1. The same creation
    /// semantics as `set_level` apply to unregistered names.
    ///
    /// # Examples
    ///
    /// ```
    /// use registry::MessageRegistry;
    ///
    /// let mut registry = MessageRegistry::new();
    /// registry.apply_level_token("Core5")?;
    /// assert_eq!(registry.level("Core"), Some(5));
    ///
    /// registry.apply_level_token("Warning")?;
    /// assert_eq!(registry.level("Warning"), Some(1));
    /// # Ok::<(), registry::LevelTokenError>(())
    /// ```
    pub fn apply_level_token(&mut self, token: &str) -> Result<(), LevelTokenError> {
        let (name, level) = parse_level_token(token)?;
        self.set_level(name, level);
        Ok(())
    }
}

/// Splits `Core5` into `("Core", 5)`; a bare `Core` becomes `("Core", 1)`.
fn parse_level_token(token: &str) -> Result<(&str, u8), LevelTokenError> {
    if token.is_empty() {
        return Err(LevelTokenError::Empty);
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(0) => Err(LevelTokenError::MissingName {
            token: token.to_owned(),
        }),
        Some(pos) => {
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| LevelTokenError::InvalidLevel {
                    token: token.to_owned(),
                })?;
            Ok((&token[..pos], level))
        }
        None => Ok((token, 1)),
    }
}
