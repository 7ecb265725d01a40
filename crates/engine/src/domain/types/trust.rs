use serde::{Deserialize, Serialize};

/// Trust policy for server-trust evaluation. The pinned anchors either
/// augment the platform trust store (the default) or replace it entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustPolicyConfig {
    /// When true, only chains terminating in a pinned anchor are trusted;
    /// the platform trust store takes no part in root selection.
    #[serde(default)]
    pub anchors_only: bool,
}
