use std::collections::HashMap;

use crate::{ModelErr, Result};

/// A closed-vocabulary mapping from category labels to the integer codes the
/// model was trained against.
///
/// The code of a label is its position in the ordered vocabulary, which is
/// exactly how the training pipeline fit it. Lookups never invent a code: an
/// unknown label is a typed error, not a default.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    field: &'static str,
    labels: Vec<String>,
    codes: HashMap<String, usize>,
}

impl LabelEncoder {
    /// Creates a new `LabelEncoder`.
    ///
    /// # Arguments
    /// * `field` - The name of the categorical field this encoder covers.
    /// * `labels` - The ordered vocabulary fitted at training time.
    pub fn new<I, S>(field: &'static str, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let codes = labels
            .iter()
            .enumerate()
            .map(|(code, label)| (label.clone(), code))
            .collect();

        Self {
            field,
            labels,
            codes,
        }
    }

    /// The name of the categorical field this encoder covers.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The ordered vocabulary, in code order.
    pub fn classes(&self) -> &[String] {
        &self.labels
    }

    /// The number of labels in the vocabulary.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Looks up the trained integer code for `label`.
    ///
    /// # Errors
    /// Returns `ModelErr::UnknownCategory` if the label is not part of the
    /// vocabulary.
    pub fn encode(&self, label: &str) -> Result<usize> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| ModelErr::UnknownCategory {
                field: self.field,
                label: label.to_string(),
            })
    }
}

/// The three fitted encoders the rent model was trained with.
#[derive(Debug, Clone)]
pub struct EncoderSet {
    pub furnishing: LabelEncoder,
    pub tennants: LabelEncoder,
    pub locality: LabelEncoder,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn furnishing() -> LabelEncoder {
        LabelEncoder::new(
            "Furnishing",
            ["Furnished", "Semi-Furnished", "Unfurnished"],
        )
    }

    #[test]
    fn codes_follow_vocabulary_order() {
        let enc = furnishing();

        assert_eq!(enc.encode("Furnished").unwrap(), 0);
        assert_eq!(enc.encode("Semi-Furnished").unwrap(), 1);
        assert_eq!(enc.encode("Unfurnished").unwrap(), 2);
    }

    #[test]
    fn classes_preserve_insertion_order() {
        let enc = furnishing();
        assert_eq!(
            enc.classes(),
            &["Furnished", "Semi-Furnished", "Unfurnished"]
        );
        assert_eq!(enc.len(), 3);
    }

    #[test]
    fn unknown_label_is_a_typed_error() {
        let enc = furnishing();

        let err = enc.encode("Penthouse").unwrap_err();
        match err {
            ModelErr::UnknownCategory { field, label } => {
                assert_eq!(field, "Furnishing");
                assert_eq!(label, "Penthouse");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lookup_is_exact_not_fuzzy() {
        let enc = furnishing();
        assert!(enc.encode("furnished").is_err());
        assert!(enc.encode(" Furnished").is_err());
    }
}
