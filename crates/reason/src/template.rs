use std::fmt;
use std::str::FromStr;

use crate::ReasonError;

/// Slot marker substituted by [`Template::fill`].
pub const SLOT: &str = "{}";

/// A response string with exactly one [`SLOT`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Template(String);

impl Template {
    /// Validate `text` and wrap it.
    pub fn new(text: impl Into<String>) -> Result<Self, ReasonError> {
        let text = text.into();
        match text.matches(SLOT).count() {
            1 => Ok(Self(text)),
            n => Err(ReasonError::InvalidConfiguration(format!(
                "template {text:?} has {n} slots, expected exactly one"
            ))),
        }
    }

    /// Template text including the slot marker.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Put `entity` in the slot.
    pub fn fill(&self, entity: &str) -> String {
        self.0.replacen(SLOT, entity, 1)
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Template {
    type Err = ReasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Template {
    type Error = ReasonError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
