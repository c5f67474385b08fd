// Copyright 2025 Cowboy AI, LLC.

//! Options applied uniformly to raw-object composition inputs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CooperateError, CooperateResult};

/// Options for a composition
///
/// `hide` names are removed from every raw-object input, as if each had been
/// wrapped with `map_members(obj).hide(name)`. Inputs that already carry
/// their own [`MemberMaps`](crate::MemberMaps) are left alone.
///
/// Options can be read from JSON:
///
/// ```
/// use cim_cooperate::ComposeOptions;
///
/// let options = ComposeOptions::from_json(r#"{ "hide": ["debug", "reset"] }"#)?;
/// assert_eq!(options.hide, vec!["debug", "reset"]);
/// # Ok::<(), cim_cooperate::CooperateError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeOptions {
    /// Member names hidden on every raw-object input
    #[serde(default)]
    pub hide: Vec<String>,
}

impl ComposeOptions {
    /// Options with nothing hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide a member name on every raw-object input
    pub fn hide(mut self, name: impl Into<String>) -> Self {
        self.hide.push(name.into());
        self
    }

    /// Parse options from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the document does not have the options shape
    pub fn from_json(json: &str) -> CooperateResult<Self> {
        let options: Self = serde_json::from_str(json).map_err(Self::shape_error)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse options from a JSON value
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the value does not have the options shape
    pub fn from_value(value: Value) -> CooperateResult<Self> {
        let options: Self = serde_json::from_value(value).map_err(Self::shape_error)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every hidden name is usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty name
    pub fn validate(&self) -> CooperateResult<()> {
        if let Some(index) = self.hide.iter().position(String::is_empty) {
            return Err(CooperateError::invalid_argument(
                format!("options.hide[{}]", index),
                "hidden member names must be non-empty strings",
            ));
        }
        Ok(())
    }

    fn shape_error(err: serde_json::Error) -> CooperateError {
        CooperateError::invalid_argument("options", err.to_string())
    }
}
