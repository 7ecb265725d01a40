use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A reference to certificate material: a filesystem path the host already
/// resolved, or the raw bytes themselves.
///
/// Hosts that bundle certificates as packaged assets resolve them to paths
/// before session setup; hosts that ship certificate bytes over their channel
/// pass them directly. Either way the engine treats the content as opaque
/// until it parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}
