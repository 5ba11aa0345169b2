use crate::error::RewriteError;
use serde::{Deserialize, Serialize};

/// Rewrite policy, fixed at engine construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RewriteOptions {
    /// Only rewrite queries that carry an explicit `SETTING_KEY = true`
    /// setting.
    pub require_setting: bool,
    /// Only rewrite fields whose schema annotation is `LikeTag::Enabled`.
    pub require_tag: bool,
    /// Alternate character users may embed instead of `%`, for data where
    /// a literal `%` is legitimate. Substituted for `%` before the LIKE
    /// condition is built. `None` disables placeholder handling.
    pub placeholder: Option<char>,
}

impl RewriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: require the per-query opt-in setting.
    pub fn require_setting(mut self, required: bool) -> Self {
        self.require_setting = required;
        self
    }

    /// Builder: require the per-field opt-in annotation.
    pub fn require_tag(mut self, required: bool) -> Self {
        self.require_tag = required;
        self
    }

    /// Builder: set the wildcard placeholder character.
    pub fn placeholder(mut self, ch: char) -> Self {
        self.placeholder = Some(ch);
        self
    }

    /// Validate the option set. `%` and `_` already carry meaning inside
    /// LIKE patterns and cannot double as placeholders.
    pub(crate) fn validate(&self) -> Result<(), RewriteError> {
        if let Some(ch) = self.placeholder {
            if ch == '%' || ch == '_' {
                return Err(RewriteError::ReservedPlaceholder(ch));
            }
        }
        Ok(())
    }

    /// Whether a string value asks for pattern matching: it contains the
    /// raw wildcard, or a placeholder is configured and present.
    pub(crate) fn needs_rewriting(&self, value: &str) -> bool {
        value.contains('%') || self.placeholder.is_some_and(|ch| value.contains(ch))
    }

    /// Substitute the placeholder for the raw wildcard.
    pub(crate) fn substitute(&self, value: &str) -> String {
        match self.placeholder {
            Some(ch) => value.replace(ch, "%"),
            None => value.to_string(),
        }
    }
}
