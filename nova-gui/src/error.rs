use std::{error, fmt};

use druid::Data;

#[derive(Clone, Debug, Data)]
pub enum Error {
    FetchError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FetchError(err) => f.write_str(err),
        }
    }
}

impl From<nova_core::error::Error> for Error {
    fn from(err: nova_core::error::Error) -> Self {
        Self::FetchError(err.to_string())
    }
}
