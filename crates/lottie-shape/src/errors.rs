use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("'{parent}' has no '{role}' child")]
    MissingChild { parent: String, role: &'static str },
    #[error("Expected {expected} node, found '{found}'")]
    UnexpectedNode { expected: &'static str, found: String },
    #[error("Insert index {index} out of range for {len} blocks")]
    InsertOutOfRange { index: isize, len: usize },
    #[error("Channel '{0}' has no waypoints")]
    EmptyChannel(&'static str),
    #[error("Invalid settings: {0}")]
    Settings(String),
    #[error(transparent)]
    Data(#[from] synfig_data::DataError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
