use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

use model::{EncoderSet, LabelEncoder, LinearModel};

use crate::{ArtifactErr, Result};

/// Field-name keys of the encoder map, exactly as the training pipeline
/// writes them.
pub const FURNISHING: &str = "Furnishing";
pub const TENNANTS: &str = "Tennants";
pub const LOCALITY: &str = "Locality";

/// The on-disk shape of the bundle.
#[derive(Debug, Deserialize)]
struct BundleFile {
    model: ModelEntry,
    encoders: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    weights: Vec<f32>,
    intercept: f32,
}

/// The deserialized pair the service holds, read-only, for its whole
/// lifetime.
#[derive(Debug)]
pub struct Artifact {
    pub model: LinearModel,
    pub encoders: EncoderSet,
}

impl Artifact {
    /// Parses and validates a bundle from its JSON text.
    ///
    /// # Errors
    /// Returns an `ArtifactErr` for malformed JSON, a missing encoder, an
    /// empty or duplicated vocabulary, or a model with the wrong weight
    /// arity.
    pub fn from_json(content: &str) -> Result<Self> {
        let mut file: BundleFile = serde_json::from_str(content)?;

        let model = LinearModel::new(file.model.weights, file.model.intercept)?;
        let encoders = EncoderSet {
            furnishing: take_encoder(&mut file.encoders, FURNISHING)?,
            tennants: take_encoder(&mut file.encoders, TENNANTS)?,
            locality: take_encoder(&mut file.encoders, LOCALITY)?,
        };

        Ok(Self { model, encoders })
    }
}

fn take_encoder(
    encoders: &mut BTreeMap<String, Vec<String>>,
    field: &'static str,
) -> Result<LabelEncoder> {
    let labels = encoders
        .remove(field)
        .ok_or(ArtifactErr::MissingEncoder { field })?;

    if labels.is_empty() {
        return Err(ArtifactErr::EmptyVocabulary { field });
    }

    let mut seen = HashSet::new();
    for label in &labels {
        if !seen.insert(label.as_str()) {
            return Err(ArtifactErr::DuplicateLabel {
                field,
                label: label.clone(),
            });
        }
    }

    Ok(LabelEncoder::new(field, labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    use model::{FeatureVector, Predictor};

    const BUNDLE: &str = r#"{
        "model": { "weights": [120.0, 80.0, -40.0, 25.0, 9.5, 60.0], "intercept": 1500.0 },
        "encoders": {
            "Furnishing": ["Furnished", "Semi-Furnished", "Unfurnished"],
            "Tennants": ["Anyone", "Bachelors", "Family"],
            "Locality": ["Gachibowli", "Kondapur", "Madhapur"]
        }
    }"#;

    #[test]
    fn well_formed_bundle_loads() {
        let artifact = Artifact::from_json(BUNDLE).unwrap();

        assert_eq!(artifact.model.size(), 6);
        assert_eq!(artifact.encoders.furnishing.encode("Furnished").unwrap(), 0);
        assert_eq!(artifact.encoders.tennants.encode("Family").unwrap(), 2);
        assert_eq!(artifact.encoders.locality.len(), 3);

        let features = FeatureVector::assemble(2.0, 2.0, 0.0, 2.0, 1200.0, 0.0);
        let rent = artifact.model.predict(&features).unwrap();
        assert!(rent > 0.0);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = Artifact::from_json("not even json").unwrap_err();
        assert!(matches!(err, ArtifactErr::Parse(_)));
    }

    #[test]
    fn missing_encoder_is_rejected() {
        let content = BUNDLE.replace("\"Tennants\"", "\"Renters\"");
        let err = Artifact::from_json(&content).unwrap_err();

        assert!(matches!(
            err,
            ArtifactErr::MissingEncoder { field: TENNANTS }
        ));
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let content = BUNDLE.replace(
            r#"["Gachibowli", "Kondapur", "Madhapur"]"#,
            "[]",
        );
        let err = Artifact::from_json(&content).unwrap_err();

        assert!(matches!(
            err,
            ArtifactErr::EmptyVocabulary { field: LOCALITY }
        ));
    }

    #[test]
    fn duplicated_label_is_rejected() {
        let content = BUNDLE.replace("\"Kondapur\"", "\"Gachibowli\"");
        let err = Artifact::from_json(&content).unwrap_err();

        match err {
            ArtifactErr::DuplicateLabel { field, label } => {
                assert_eq!(field, LOCALITY);
                assert_eq!(label, "Gachibowli");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_weight_arity_is_rejected() {
        let content = BUNDLE.replace("[120.0, 80.0, -40.0, 25.0, 9.5, 60.0]", "[120.0, 80.0]");
        let err = Artifact::from_json(&content).unwrap_err();

        assert!(matches!(err, ArtifactErr::Model(_)));
    }
}
