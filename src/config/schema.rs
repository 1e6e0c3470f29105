use serde::{Deserialize, Serialize};

use crate::scoring::WeightConfig;

/// User configuration. Both fields are optional: `weights` carries a
/// fully custom vector and wins over `template` when both are present.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of a built-in weight template (e.g. "equilibrado")
    #[serde(default)]
    pub template: Option<String>,

    /// Custom weight vector
    #[serde(default)]
    pub weights: Option<WeightConfig>,
}
