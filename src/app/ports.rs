use crate::error::Result;

/// Source of the sheet export. The pipeline only needs the body text of a
/// single GET; transport, status and decode failures all surface as errors.
pub trait HttpClientPort {
    fn get_text(&self, url: &str) -> Result<String>;
}
