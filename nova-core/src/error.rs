use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    InvalidCatalogUrl(url::ParseError),
    UnexpectedResponse,
    TransportError(Box<dyn error::Error + Send>),
    JsonError(Box<dyn error::Error + Send>),
    IoError(io::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCatalogUrl(err) => write!(f, "Invalid catalog URL: {err}"),
            Self::UnexpectedResponse => write!(f, "Unknown server response"),
            Self::TransportError(err) | Self::JsonError(err) => err.fmt(f),
            Self::IoError(err) => err.fmt(f),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::InvalidCatalogUrl(err)
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Error {
        Error::TransportError(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(Box::new(err))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_source_of_wrapped_errors() {
        let err = Error::from(io::Error::new(io::ErrorKind::TimedOut, "timed out"));
        assert_eq!(err.to_string(), "timed out");

        let err = Error::from(serde_json::from_str::<Vec<u8>>("{").unwrap_err());
        assert!(err.to_string().contains("EOF"));
    }

    #[test]
    fn displays_invalid_url() {
        let err = Error::from(url::Url::parse("::not-a-url").unwrap_err());
        assert!(err.to_string().starts_with("Invalid catalog URL"));
    }
}
