use crate::Error;

/// Options for configuring the output of [crate::print()] and friends.
///
/// Deserializes from `{ "commentDescriptions": true }`. Unknown keys are rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct PrintOptions {
    /// Render descriptions as `#` comments instead of `"""` block strings.
    pub comment_descriptions: bool,
}

impl PrintOptions {
    pub fn with_comment_descriptions(mut self, comment_descriptions: bool) -> Self {
        self.comment_descriptions = comment_descriptions;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::InvalidOptions)
    }
}
