use std::fmt;
use std::io;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Ways reading input files or producing the image can fail.
#[derive(Debug)]
pub enum Error {
    /// Underlying file could not be read or written.
    Io(io::Error),
    /// An input line did not match the expected format.
    Parse { line: usize, message: String },
    /// The solution visits an identifier the instance never declared.
    UnknownNode { id: u32 },
    /// PNG encoding failed.
    Png(image::ImageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Parse { line, message } => write!(f, "line {line}: {message}"),
            Error::UnknownNode { id } => write!(f, "node {id} is not part of the instance"),
            Error::Png(err) => write!(f, "PNG encoding failed: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Png(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Error {
        Error::Png(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_number() {
        let err = Error::Parse {
            line: 3,
            message: String::from("invalid number 'oops'"),
        };
        assert_eq!(err.to_string(), "line 3: invalid number 'oops'");
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
