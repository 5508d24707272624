//! Representation names.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The canonical name of a vector space an entity can be expressed in,
/// such as `full` or `pca`.
///
/// Names are canonicalized on construction: surrounding and internal
/// whitespace is removed and the result is lowercased. Two representations
/// built from equivalent raw names are equal and hash identically, so they
/// are interchangeable as map keys.
///
/// # Example
///
/// ```
/// use latentlens_core::Representation;
///
/// let a = Representation::of("  Full ")?;
/// let b = Representation::of("full")?;
/// assert_eq!(a, b);
/// assert_eq!(a.name(), "full");
/// # Ok::<(), latentlens_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Representation(Arc<str>);

impl Representation {
    /// Canonicalizes `raw` into a representation.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidName`] if `raw` is empty or only whitespace.
    pub fn of(raw: &str) -> Result<Self, CoreError> {
        let canonical = canonical_name(raw);
        if canonical.is_empty() {
            return Err(CoreError::InvalidName(format!(
                "representation name must be non-blank, got {raw:?}"
            )));
        }
        Ok(Self(canonical.into()))
    }

    /// The canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Removes all whitespace and lowercases.
///
/// This is the folding [`Representation::of`] applies; other name-keyed
/// registries use it so lookups agree on what counts as the same name.
#[must_use]
pub fn canonical_name(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Representation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Representation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl TryFrom<String> for Representation {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(&value)
    }
}

impl From<Representation> for String {
    fn from(rep: Representation) -> Self {
        rep.0.to_string()
    }
}
