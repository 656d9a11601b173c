#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("could not fetch {url}: {reason}")]
    Network { url: String, reason: String },
    #[error("could not load {url}: http {status}")]
    Status { url: String, status: u16 },
    #[error("invalid body in {url}: {reason}")]
    Body { url: String, reason: String },
}
