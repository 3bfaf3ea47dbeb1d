use crate::errors::{EnvDiffError, Result};
use serde::{Deserialize, Serialize};

/// Prefix marking a segment as a back-reference to a variable's previous value
pub const BACK_REFERENCE_PREFIX: char = '$';

/// A single environment variable
///
/// `value` is tri-state:
/// - `None`: the variable does not exist (in an edit script: unset it)
/// - `Some(vec![])`: the variable exists with zero segments
/// - `Some(segments)`: the variable exists with exactly these segments
///
/// The name is never empty. Deserialization goes through the same check as
/// [`Var::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVar")]
pub struct Var {
    name: String,
    value: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct RawVar {
    name: String,
    #[serde(default)]
    value: Option<Vec<String>>,
}

impl TryFrom<RawVar> for Var {
    type Error = EnvDiffError;

    fn try_from(raw: RawVar) -> Result<Self> {
        Var::new(raw.name, raw.value)
    }
}

impl Var {
    /// Create a variable record
    ///
    /// # Errors
    ///
    /// Returns [`EnvDiffError::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>, value: Option<Vec<String>>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(EnvDiffError::EmptyName);
        }
        Ok(Self { name, value })
    }

    /// Create a variable that exists with the given segments
    ///
    /// # Errors
    ///
    /// Returns [`EnvDiffError::EmptyName`] if `name` is empty.
    pub fn set<I, S>(name: impl Into<String>, segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, Some(segments.into_iter().map(Into::into).collect()))
    }

    /// Create a variable record meaning "this variable does not exist"
    ///
    /// # Errors
    ///
    /// Returns [`EnvDiffError::EmptyName`] if `name` is empty.
    pub fn unset(name: impl Into<String>) -> Result<Self> {
        Self::new(name, None)
    }

    /// Build a record whose name is already known to be non-empty.
    pub(crate) fn from_parts(name: String, value: Option<Vec<String>>) -> Self {
        debug_assert!(!name.is_empty(), "variable names are never empty");
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The segments, or `None` when the variable is absent
    pub fn value(&self) -> Option<&[String]> {
        self.value.as_deref()
    }

    /// True when the value is absent (not merely empty)
    pub fn is_unset(&self) -> bool {
        self.value.is_none()
    }

    pub fn into_parts(self) -> (String, Option<Vec<String>>) {
        (self.name, self.value)
    }

    /// The back-reference segment standing for this variable's previous value
    pub fn back_reference(&self) -> String {
        back_reference(&self.name)
    }

    /// True if `segment` is a back-reference to this variable
    pub fn is_back_reference(&self, segment: &str) -> bool {
        is_back_reference(segment, &self.name)
    }
}

/// Build the back-reference segment for `name`, e.g. `$PATH`
pub fn back_reference(name: &str) -> String {
    let mut segment = String::with_capacity(name.len() + 1);
    segment.push(BACK_REFERENCE_PREFIX);
    segment.push_str(name);
    segment
}

/// True if `segment` is exactly the back-reference for `name`
pub fn is_back_reference(segment: &str, name: &str) -> bool {
    segment
        .strip_prefix(BACK_REFERENCE_PREFIX)
        .is_some_and(|rest| rest == name)
}
