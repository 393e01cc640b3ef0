//! EnvVar type.
//!
//! An environment variable derived from a store parameter: the parameter's
//! last path segment becomes the variable name.

use tracing::trace;

use crate::core::constants::PATH_SEPARATOR;
use crate::core::store::Parameter;
use crate::error::NameError;

/// A single environment variable ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    name: String,
    value: String,
}

impl EnvVar {
    /// Create a variable from an already-normalized name and its value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a variable from a fetched parameter, normalizing its name.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] if the parameter name has no `/` or ends in one.
    pub fn from_parameter(param: Parameter) -> Result<Self, NameError> {
        let name = parse_name(&param.name)?.to_string();
        trace!(key = %param.name, name = %name, "normalized parameter name");
        Ok(Self {
            name,
            value: param.value,
        })
    }

    /// Variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variable value, verbatim
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Return the segment after the last `/` of a parameter key.
///
/// `/app/env/DATABASE_URL` becomes `DATABASE_URL`. A key without any `/`
/// is rejected rather than passed through, as is a key whose last segment
/// is empty.
pub fn parse_name(key: &str) -> Result<&str, NameError> {
    let (_, name) = key
        .rsplit_once(PATH_SEPARATOR)
        .ok_or_else(|| NameError::MissingSeparator(key.to_string()))?;

    if name.is_empty() {
        return Err(NameError::Empty(key.to_string()));
    }

    Ok(name)
}

/// Normalize every parameter, preserving order.
///
/// Stops at the first bad key so callers never render a partial set.
pub fn normalize_all(params: Vec<Parameter>) -> Result<Vec<EnvVar>, NameError> {
    params.into_iter().map(EnvVar::from_parameter).collect()
}
