use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinksError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} returned by {url}")]
    Status { url: String, status: u16 },

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("No usable data: {0}")]
    EmptyContent(String),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LinksError {
    /// Pipeline stage the error belongs to, for reporting.
    pub fn stage(&self) -> &'static str {
        match self {
            LinksError::Http(_) | LinksError::Status { .. } => "fetch",
            LinksError::Csv(_) | LinksError::EmptyContent(_) => "parse",
            LinksError::Render(_) => "render",
            LinksError::Write { .. } => "write",
            LinksError::Toml(_) | LinksError::Config(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, LinksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_classification() {
        let status = LinksError::Status {
            url: "https://example.com".into(),
            status: 404,
        };
        assert_eq!(status.stage(), "fetch");
        assert_eq!(status.to_string(), "HTTP 404 returned by https://example.com");

        assert_eq!(LinksError::EmptyContent("empty".into()).stage(), "parse");

        let write = LinksError::Write {
            path: PathBuf::from("out/links.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing dir"),
        };
        assert_eq!(write.stage(), "write");
        assert!(write.to_string().contains("out/links.html"));
    }
}
