use alloc::string::String;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
///Possible errors when reading addresses, prefixes and ranges
pub enum Error {
    ///Text is not a valid address, prefix or range
    #[error("invalid address: '{0}'")]
    InvalidAddress(String),
}

impl Error {
    #[inline]
    pub(crate) fn invalid_address(text: &str) -> Self {
        Self::InvalidAddress(String::from(text))
    }
}
