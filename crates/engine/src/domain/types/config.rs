use serde::{Deserialize, Serialize};

use super::source::CertSource;
use super::trust::TrustPolicyConfig;
use crate::domain::error::EngineResult;

/// Centralized defaults for the PinView engine.
/// All opinionated defaults should be defined here for consistency.
pub struct EngineDefaults;

impl EngineDefaults {
    // Security defaults
    pub const ANCHORS_ONLY: bool = false; // Pinned anchors augment platform trust
    pub const ANCHOR_SOURCES: Vec<CertSource> = Vec::new(); // Bring-your-own-anchors

    // Session defaults
    pub const HAS_INITIAL_URL: Option<String> = None; // Host decides what to load

    // Limits
    pub const MAX_SOURCE_FILE_SIZE: u64 = 1024 * 1024; // 1 MB per certificate file
}

/// Session setup arguments as delivered by the host shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Certificate resources to pin. Unreadable or malformed entries are
    /// skipped during loading, never reported as setup failures.
    pub anchor_sources: Vec<CertSource>,
    pub trust_policy: TrustPolicyConfig,
    /// Page to load once the view is up. Empty or unparsable values are
    /// ignored.
    pub initial_url: Option<String>,
}

impl SessionConfig {
    /// Opinionated defaults; callers add anchors and policy as needed.
    pub fn secure_default() -> Self {
        Self {
            anchor_sources: EngineDefaults::ANCHOR_SOURCES,
            trust_policy: TrustPolicyConfig {
                anchors_only: EngineDefaults::ANCHORS_ONLY,
            },
            initial_url: EngineDefaults::HAS_INITIAL_URL,
        }
    }

    /// Decodes setup arguments from the serialized map hosts deliver over
    /// their channel. Absent fields fall back to defaults, matching how the
    /// shells treat missing arguments.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
