//! Per-token normalization of captured parameter names.

/// Marker conventionally wrapped around a parameter name to avoid a
/// collision with an outer binding, e.g. `_config_`.
pub const DEFAULT_MARKER: char = '_';

/// Normalize one raw parameter token.
///
/// Returns `None` for tokens that do not contribute a name: empty segments,
/// rest parameters (`...args`) and default-valued parameters (`n = 1`).
/// These are dropped silently so the resulting list only holds statically
/// extractable names.
pub fn normalize_parameter(raw: &str, marker: char) -> Option<String> {
    let token = raw.trim();
    if token.is_empty() || is_rest(token) || is_defaulted(token) {
        return None;
    }
    Some(unwrap_marker(token, marker).to_string())
}

/// Strip one leading and one trailing `marker` when both are present and
/// something non-blank remains between them.
pub fn unwrap_marker(token: &str, marker: char) -> &str {
    match token
        .strip_prefix(marker)
        .and_then(|rest| rest.strip_suffix(marker))
    {
        Some(inner) if !inner.is_empty() && !inner.contains(char::is_whitespace) => inner,
        _ => token,
    }
}

fn is_rest(token: &str) -> bool {
    token.starts_with("...")
}

fn is_defaulted(token: &str) -> bool {
    token.contains('=')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_name_is_trimmed() {
        assert_eq!(normalize_parameter("  config \n", '_'), Some("config".into()));
    }

    #[test]
    fn test_wrapped_name_is_unwrapped() {
        assert_eq!(normalize_parameter("_logger_", '_'), Some("logger".into()));
    }

    #[test]
    fn test_single_sided_marker_is_kept() {
        assert_eq!(normalize_parameter("_private", '_'), Some("_private".into()));
        assert_eq!(normalize_parameter("trailing_", '_'), Some("trailing_".into()));
    }

    #[test]
    fn test_markers_only() {
        assert_eq!(unwrap_marker("_", '_'), "_");
        assert_eq!(unwrap_marker("__", '_'), "__");
        assert_eq!(unwrap_marker("___", '_'), "_");
    }

    #[test]
    fn test_only_one_marker_pair_is_removed() {
        assert_eq!(unwrap_marker("__db__", '_'), "_db_");
    }

    #[test]
    fn test_custom_marker() {
        assert_eq!(normalize_parameter("$http$", '$'), Some("http".into()));
        assert_eq!(normalize_parameter("_http_", '$'), Some("_http_".into()));
    }

    #[test]
    fn test_rest_and_default_are_dropped() {
        assert_eq!(normalize_parameter("...rest", '_'), None);
        assert_eq!(normalize_parameter("retries = 3", '_'), None);
        assert_eq!(normalize_parameter("   ", '_'), None);
    }

    proptest! {
        #[test]
        fn identifiers_survive_unchanged(name in "[a-zA-Z$][a-zA-Z0-9$]{0,12}") {
            prop_assert_eq!(normalize_parameter(&name, '_'), Some(name.clone()));
        }

        #[test]
        fn wrapping_is_undone(name in "[a-zA-Z][a-zA-Z0-9]{0,12}") {
            let wrapped = format!(" _{}_ ", name);
            prop_assert_eq!(normalize_parameter(&wrapped, '_'), Some(name));
        }
    }
}
