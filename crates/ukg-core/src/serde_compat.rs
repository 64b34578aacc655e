//! JSON serde for the dashboard wire format.
//!
//! The wire format is a versioned envelope around one kernel, with
//! camelCase field names throughout (the domain types carry the renames).
//! This is in-memory string conversion for display layers, not persistence.

use serde::{Deserialize, Serialize};

use crate::generator::GeneratedKernel;

pub const CURRENT_VERSION: &str = "0.3.2";

/// Envelope around a generated kernel.
#[derive(Serialize, Deserialize, Debug)]
pub struct WireExport {
    pub version: String,
    pub kernel: GeneratedKernel,
}

impl WireExport {
    pub fn from_kernel(kernel: &GeneratedKernel) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            kernel: kernel.clone(),
        }
    }
}

/// Serialize a kernel to the versioned JSON wire format.
pub fn export_json(kernel: &GeneratedKernel) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&WireExport::from_kernel(kernel))
}

/// Deserialize a wire-format JSON export back into a kernel.
pub fn import_json(json: &str) -> Result<GeneratedKernel, serde_json::Error> {
    let wire: WireExport = serde_json::from_str(json)?;
    Ok(wire.kernel)
}
