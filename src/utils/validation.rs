use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;
use std::hash::Hash;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks RFC 3986 scheme syntax only; unknown schemes such as `htts` pass.
pub fn validate_scheme(field_name: &str, scheme: &str) -> Result<()> {
    let mut chars = scheme.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_is_valid = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if !starts_with_letter || !rest_is_valid {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: scheme.to_string(),
            reason: "Scheme must start with a letter followed by letters, digits, '+', '-' or '.'"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_media_host(field_name: &str, scheme: &str, host: &str) -> Result<()> {
    validate_non_empty_string(field_name, host)?;

    if host.contains(['/', '?', '#', '@']) || host.chars().any(char::is_whitespace) {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Host must not contain '/', '?', '#', '@' or whitespace".to_string(),
        });
    }

    // The built URL must keep `/media/...` as its path.
    match Url::parse(&format!("{}://{}/", scheme, host)) {
        Ok(url)
            if url.host_str().is_some()
                && url.username().is_empty()
                && url.password().is_none()
                && url.query().is_none()
                && url.fragment().is_none()
                && url.path() == "/" =>
        {
            Ok(())
        }
        Ok(_) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Host must be a bare host with an optional port".to_string(),
        }),
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: format!("Invalid host: {}", e),
        }),
    }
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_unique_ids<I, T>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + std::fmt::Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        let label = id.to_string();
        if !seen.insert(id) {
            return Err(CatalogError::ConfigValidationError {
                field: field_name.to_string(),
                message: format!("Duplicate id {}", label),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_scheme() {
        assert!(validate_scheme("media.scheme", "https").is_ok());
        assert!(validate_scheme("media.scheme", "htts").is_ok());
        assert!(validate_scheme("media.scheme", "svn+ssh").is_ok());
        assert!(validate_scheme("media.scheme", "").is_err());
        assert!(validate_scheme("media.scheme", "1http").is_err());
        assert!(validate_scheme("media.scheme", "ht tp").is_err());
    }

    #[test]
    fn test_validate_media_host() {
        assert!(validate_media_host("media.host", "htts", "localhost").is_ok());
        assert!(validate_media_host("media.host", "https", "cdn.example.com:8443").is_ok());
        assert!(validate_media_host("media.host", "https", "").is_err());
        assert!(validate_media_host("media.host", "https", "example.com/media").is_err());
        assert!(validate_media_host("media.host", "https", "bad host").is_err());
    }

    #[test]
    fn test_media_host_rejects_query_fragment_and_userinfo() {
        for host in ["cdn?x=1", "cdn#frag", "user@cdn.example.com", "user:pw@cdn"] {
            assert!(
                validate_media_host("media.host", "https", host).is_err(),
                "{} should be rejected",
                host
            );
        }

        let builder =
            crate::domain::image_url::ImageUrlBuilder::new("https", "cdn.example.com:8443");
        assert!(validate_media_host("media.host", "https", builder.host()).is_ok());
        let url = Url::parse(&builder.build("a.jpg")).unwrap();
        assert_eq!(url.path(), "/media/a.jpg");
        assert!(url.query().is_none());
        assert!(url.username().is_empty());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("config", "catalog.toml", &["toml"]).is_ok());
        assert!(validate_file_extension("config", "catalog.json", &["toml"]).is_err());
        assert!(validate_file_extension("config", "catalog", &["toml"]).is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("categories", [1, 2, 3]).is_ok());
        let err = validate_unique_ids("categories", [1, 2, 1]).unwrap_err();
        assert!(err.to_string().contains("Duplicate id 1"));
    }
}
