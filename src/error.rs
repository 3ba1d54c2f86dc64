use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Startup and I/O failures of the driver. Lexical problems never appear
/// here; the scanner reports those as `Kind::Error` tokens.
#[derive(Debug)]
pub enum DriverError {
    InputNotFound(PathBuf, std::io::Error),
    IO(std::io::Error),
}

impl Error for DriverError {}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DriverError::InputNotFound(path, err) => {
                write!(f, "cannot open input file {}: {}", path.display(), err)
            }
            DriverError::IO(err) => write!(f, "IOError: {}", err),
        }
    }
}

impl From<std::io::Error> for DriverError {
    fn from(err: std::io::Error) -> Self {
        DriverError::IO(err)
    }
}
