use serde::Deserialize;

/// A named set of free-text preferences used to steer description rewrites.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Persona {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Preferences", alias = "preferences")]
    pub preferences: String,
}
