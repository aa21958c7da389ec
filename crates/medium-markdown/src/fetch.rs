use crate::ConvertError;

/// Blocking byte fetcher used to download images.
///
/// Implementations report transport failures and non-success statuses alike as
/// [`ConvertError::Network`].
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ConvertError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ConvertError> {
        (**self).fetch(url)
    }
}

/// A fetcher for callers without network access. Every request fails, so
/// enabling image downloads with it records a warning per image.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl Fetch for Offline {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ConvertError> {
        Err(ConvertError::network(url, "no HTTP client configured"))
    }
}
