use std::path::PathBuf;

use snafu::Snafu;

use crate::modules::traits::entity::EntityKind;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{kind} `{id}` not found"))]
    NotFound { kind: EntityKind, id: String },

    #[snafu(display("could not read dataset {}: {source}", path.display()))]
    ReadDataset {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("dataset is not valid json: {source}"))]
    ParseDataset { source: serde_json::Error },

    #[snafu(display("{kind} id `{id}` is used more than once"))]
    DuplicateId { kind: EntityKind, id: String },

    #[snafu(display("results of race `{race}` are not in ascending order at position {position}"))]
    ResultOrder { race: String, position: u32 },

    #[snafu(display("dataset has {count} loose references and STRICT_REFERENCES is set"))]
    LooseReferences { count: usize },

    #[snafu(display("failed to set up logging: {source}"))]
    Logging { source: fern::InitError },
}

pub type CustomResult<T> = Result<T, Error>;

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
