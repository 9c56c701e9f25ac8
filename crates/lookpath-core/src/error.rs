use thiserror::Error;

/// Core error type for lookpath operations.
///
/// A command that cannot be found is not an error (the resolver returns
/// `Ok(None)`); the only failure the search propagates is a stat that was
/// denied access, since swallowing it could return a wrong result while
/// masking a real access problem.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Permission denied while probing {path}: {source}")]
    PermissionDenied {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
