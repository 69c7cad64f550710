//! Loading of the serialized model bundle.
//!
//! The artifact is produced by the training pipeline and treated here as an
//! opaque load-once resource: a single JSON file holding the trained weights
//! together with the fitted encoder vocabularies. It is read once at process
//! start and never reloaded.

mod bundle;
pub mod error;

pub use bundle::{Artifact, FURNISHING, LOCALITY, TENNANTS};
pub use error::{ArtifactErr, Result};

use std::path::Path;

/// Loads the model artifact from `path`.
///
/// # Errors
/// Returns an `ArtifactErr` if the file is missing, unreadable, or not a
/// well-formed bundle.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Artifact> {
    let content = std::fs::read_to_string(path)?;
    Artifact::from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_fails_the_load() {
        let err = load("no-such-artifact.json").unwrap_err();
        assert!(matches!(err, ArtifactErr::Io(_)));
    }
}
