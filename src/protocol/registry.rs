use crate::config::types::{JudgeError, Result};
use crate::protocol::adapter::ProtocolAdapter;
use crate::protocol::variants::{cms::CmsAdapter, opendata::OpendataAdapter};

/// Normalize protocol aliases to the canonical name, or `None` if unknown.
pub fn canonical_name(protocol: &str) -> Option<&'static str> {
    match protocol {
        "opendata" | "opendata-v1" | "kasiopea" => Some("opendata-v1"),
        "cms" | "cms-batch" => Some("cms-batch"),
        _ => None,
    }
}

pub fn adapter_for(protocol: &str) -> Result<Box<dyn ProtocolAdapter>> {
    match canonical_name(protocol) {
        Some("opendata-v1") => Ok(Box::new(OpendataAdapter)),
        Some("cms-batch") => Ok(Box::new(CmsAdapter)),
        _ => Err(JudgeError::Config(format!(
            "unsupported judge protocol: {protocol}"
        ))),
    }
}
