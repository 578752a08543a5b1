use regex::Regex;
use std::sync::Arc;

/// A per-parameter regex constraint. The raw text is kept verbatim as it
/// appeared in the route file; the compiled form is anchored so the whole
/// segment must match.
#[derive(Debug, Clone)]
pub struct ParamConstraint {
    raw: Box<str>,
    compiled: Arc<Regex>,
}

impl ParamConstraint {
    pub(crate) fn compile(raw: &str) -> Result<Self, regex::Error> {
        let compiled = Arc::new(Regex::new(&format!("^(?:{raw})$"))?);
        Ok(Self {
            raw: raw.into(),
            compiled,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.compiled.is_match(candidate)
    }
}

impl PartialEq for ParamConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ParamConstraint {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Static(String),
    Param {
        name: String,
        /// `None` means the default constraint: one or more characters
        /// excluding the path separator.
        constraint: Option<ParamConstraint>,
    },
}

impl PathSegment {
    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param { .. })
    }

    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Param { name, .. } => Some(name),
            Self::Static(_) => None,
        }
    }
}
