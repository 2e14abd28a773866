//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Supports:
/// - `${VAR}` - expands to the value of VAR, errors if unset
/// - `${VAR:-default}` - expands to VAR if set, otherwise uses default
///
/// Values without `${` are returned unchanged.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("BINDOC_TEST_TAGFILE", "/data/opencv.tag");
        }
        let result = expand_env("${BINDOC_TEST_TAGFILE}", "namespaces.Cv.tagfile").unwrap();
        assert_eq!(result, "/data/opencv.tag");
        unsafe {
            std::env::remove_var("BINDOC_TEST_TAGFILE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("BINDOC_TEST_UNSET_ROOT");
        }
        let result = expand_env(
            "${BINDOC_TEST_UNSET_ROOT:-https://docs.opencv.org/4.x}",
            "namespaces.Cv.root",
        )
        .unwrap();
        assert_eq!(result, "https://docs.opencv.org/4.x");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("BINDOC_TEST_HOST", "docs.example.com");
        }
        let result = expand_env("https://${BINDOC_TEST_HOST}/4.x", "namespaces.Cv.root").unwrap();
        assert_eq!(result, "https://docs.example.com/4.x");
        unsafe {
            std::env::remove_var("BINDOC_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("BINDOC_TEST_MISSING");
        }
        let err = expand_env("${BINDOC_TEST_MISSING}", "namespaces.Cv.tagfile").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("BINDOC_TEST_MISSING"));
        assert!(err.to_string().contains("namespaces.Cv.tagfile"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("https://docs.opencv.org/4.x", "namespaces.Cv.root").unwrap();
        assert_eq!(result, "https://docs.opencv.org/4.x");
    }
}
