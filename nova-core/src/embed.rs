//! The embedding boundary. Third-party game pages are opaque, untrusted
//! resources; the host grants them a fixed capability allow-list and
//! receives nothing back except a load-complete signal.

use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Capability {
    Autoplay,
    Fullscreen,
    PointerLock,
}

impl Capability {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Autoplay => "autoplay",
            Self::Fullscreen => "fullscreen",
            Self::PointerLock => "pointer-lock",
        }
    }
}

/// Every embedded page gets exactly these capabilities, nothing else.
pub const ALLOWED_CAPABILITIES: [Capability; 3] = [
    Capability::Autoplay,
    Capability::Fullscreen,
    Capability::PointerLock,
];

/// A request to load a game page on the embedding surface.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EmbedRequest {
    pub url: Arc<str>,
}

impl EmbedRequest {
    pub fn new(url: Arc<str>) -> Self {
        Self { url }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        &ALLOWED_CAPABILITIES
    }

    /// The allow-list in the form the embedding surface expects.
    pub fn allow_attribute(&self) -> String {
        self.capabilities()
            .iter()
            .map(Capability::token)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_is_fixed() {
        let request = EmbedRequest::new("https://play.example/1".into());
        assert_eq!(request.capabilities().len(), 3);
        assert_eq!(
            request.allow_attribute(),
            "autoplay; fullscreen; pointer-lock",
        );
    }
}
