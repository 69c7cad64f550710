use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use model::ModelErr;

/// The result type used in the entire artifact module.
pub type Result<T> = std::result::Result<T, ArtifactErr>;

/// Everything that can make the one-time artifact load fail.
///
/// Every variant is fatal at startup: the service must not begin accepting
/// requests over a half-loaded bundle.
#[derive(Debug)]
pub enum ArtifactErr {
    Io(io::Error),
    Parse(serde_json::Error),
    MissingEncoder { field: &'static str },
    EmptyVocabulary { field: &'static str },
    DuplicateLabel { field: &'static str, label: String },
    Model(ModelErr),
}

impl Display for ArtifactErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactErr::Io(e) => write!(f, "cannot read artifact: {e}"),
            ArtifactErr::Parse(e) => write!(f, "artifact is not a valid bundle: {e}"),
            ArtifactErr::MissingEncoder { field } => {
                write!(f, "the bundle has no encoder for {field}")
            }
            ArtifactErr::EmptyVocabulary { field } => {
                write!(f, "the {field} encoder has an empty vocabulary")
            }
            ArtifactErr::DuplicateLabel { field, label } => {
                write!(f, "the {field} vocabulary repeats the label '{label}'")
            }
            ArtifactErr::Model(e) => write!(f, "the bundled model is invalid: {e}"),
        }
    }
}

impl Error for ArtifactErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArtifactErr::Io(e) => Some(e),
            ArtifactErr::Parse(e) => Some(e),
            ArtifactErr::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ArtifactErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ArtifactErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<ModelErr> for ArtifactErr {
    fn from(value: ModelErr) -> Self {
        Self::Model(value)
    }
}
