//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from library
//! error types to the unified Error type.

use super::types::Error;

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_maps_to_xml() {
        let err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        assert!(matches!(Error::from(err), Error::Xml(_)));
    }
}
