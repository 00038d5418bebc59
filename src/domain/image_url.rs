use crate::domain::ports::MediaConfigProvider;

/// Scheme emitted by the legacy catalog. It is not `https`; deployments that
/// want real HTTPS links set the scheme explicitly.
pub const LEGACY_MEDIA_SCHEME: &str = "htts";
pub const DEFAULT_MEDIA_HOST: &str = "localhost";
pub const MEDIA_PATH_SEGMENT: &str = "media";

/// Turns stored image references into absolute delivery URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    scheme: String,
    host: String,
}

impl ImageUrlBuilder {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    pub fn with_host(host: impl Into<String>) -> Self {
        Self::new(LEGACY_MEDIA_SCHEME, host)
    }

    pub fn from_config<C: MediaConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.media_scheme(), config.media_host())
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `<scheme>://<host>/media/<image>`. The reference is appended verbatim.
    pub fn build(&self, image: &str) -> String {
        format!(
            "{}://{}/{}/{}",
            self.scheme, self.host, MEDIA_PATH_SEGMENT, image
        )
    }
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::with_host(DEFAULT_MEDIA_HOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubConfig;

    impl MediaConfigProvider for StubConfig {
        fn media_host(&self) -> &str {
            "cdn.example.com"
        }

        fn media_scheme(&self) -> &str {
            "https"
        }
    }

    #[test]
    fn test_default_builder_keeps_legacy_scheme() {
        let builder = ImageUrlBuilder::default();
        assert_eq!(
            builder.build("image_1.jpg"),
            "htts://localhost/media/image_1.jpg"
        );
    }

    #[test]
    fn test_builder_from_config() {
        let builder = ImageUrlBuilder::from_config(&StubConfig);
        assert_eq!(builder.scheme(), "https");
        assert_eq!(builder.host(), "cdn.example.com");
        assert_eq!(
            builder.build("shoes/red.png"),
            "https://cdn.example.com/media/shoes/red.png"
        );
    }

    #[test]
    fn test_distinct_references_do_not_collide() {
        let builder = ImageUrlBuilder::with_host("localhost");
        let references = ["a.jpg", "b.jpg", "a.jpeg", "dir/a.jpg", "A.jpg"];
        let urls: std::collections::HashSet<String> =
            references.iter().map(|r| builder.build(r)).collect();
        assert_eq!(urls.len(), references.len());
    }
}
