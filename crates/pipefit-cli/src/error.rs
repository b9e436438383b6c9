use std::{io, path::PathBuf};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum AppError {
    #[display("cannot open script {}: {source}", path.display())]
    #[from(ignore)]
    OpenScript { path: PathBuf, source: io::Error },
    #[display("I/O error: {_0}")]
    Io(#[from] io::Error),
}
