use serde::{Deserialize, Serialize};

/// One entry in the server inventory.
/// Field order here fixes the JSON field order on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub name: String,
    pub environment: String,
    pub tags: Vec<String>,
}
