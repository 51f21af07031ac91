//! vf-results: report formatting and storage.

pub mod format;
pub mod report;
pub mod stamp;
pub mod store;

pub use format::fmt_g;
pub use report::{parameter_lines, render_report};
pub use stamp::ReportStamp;
pub use store::ReportStore;

use std::path::PathBuf;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write report {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
