use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPlan {
    pub working_directory: String, // expanded, not checked for existence
    pub argv: Vec<String>,         // e.g. ["-theme","default","-pluginpath","/opt/plugins"]
}
