pub mod types;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

pub use types::{RawNode, RawValue};

/// Parse a hierarchy document from a JSON string.
pub fn parse_str(json: &str) -> Result<RawNode> {
    let root: RawNode = serde_json::from_str(json).context("dataset is not a valid hierarchy document")?;
    tracing::debug!(
        "Parsed dataset '{}' with {} top-level groups",
        root.name,
        root.children.len()
    );
    Ok(root)
}

/// Load a hierarchy document from a file, or from stdin when `path` is `-`.
pub fn load(path: &Path) -> Result<RawNode> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read dataset from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?
    };

    tracing::info!("Loaded {} bytes of dataset from {}", json.len(), path.display());
    parse_str(&json).with_context(|| format!("while parsing {}", path.display()))
}
