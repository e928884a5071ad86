use serde::{Deserialize, Serialize};

/// On-disk shape of the recent directories document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(default)]
    pub recent_dirs: Vec<String>,
}
