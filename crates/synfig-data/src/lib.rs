// synfig-data: typed Synfig parameters as handed over by the document parser
pub mod model;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DataError {
    #[error("Node '{0}' has no children to replace")]
    NotComposite(String),
}
