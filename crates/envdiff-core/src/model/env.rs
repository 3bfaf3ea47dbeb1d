use crate::model::var::Var;
use serde::{Deserialize, Serialize};

/// An ordered environment snapshot
///
/// Records keep the order they appeared in the source text. Duplicate names
/// are allowed; lookups by name resolve to the last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Env {
    vars: Vec<Var>,
}

/// An ordered list of edits turning one [`Env`] into another
///
/// Absent values mean "unset"; present values mean "set to exactly this",
/// where a `$<name>` segment refers to the variable's previous value.
pub type EditScript = Env;

impl Env {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vars(vars: Vec<Var>) -> Self {
        Self { vars }
    }

    pub(crate) fn push(&mut self, var: Var) {
        self.vars.push(var);
    }

    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    pub fn into_vars(self) -> Vec<Var> {
        self.vars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Var> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Look up a variable by name (last occurrence wins)
    pub fn get(&self, name: &str) -> Option<&Var> {
        self.vars.iter().rev().find(|v| v.name() == name)
    }

    /// True if any record carries `name`
    pub fn contains(&self, name: &str) -> bool {
        self.vars.iter().any(|v| v.name() == name)
    }
}

impl From<Vec<Var>> for Env {
    fn from(vars: Vec<Var>) -> Self {
        Self::from_vars(vars)
    }
}

impl FromIterator<Var> for Env {
    fn from_iter<I: IntoIterator<Item = Var>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Env {
    type Item = Var;
    type IntoIter = std::vec::IntoIter<Var>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl<'a> IntoIterator for &'a Env {
    type Item = &'a Var;
    type IntoIter = std::slice::Iter<'a, Var>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
