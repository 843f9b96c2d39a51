//! Case conventions for option names.
//!
//! A canonical option name like `garden-cluster-identity` is translated into:
//!
//! | Convention | Result | Used for |
//! |------------|--------|----------|
//! | lower camel | `gardenClusterIdentity` | config file / store lookup key |
//! | screaming snake | `GARDEN_CLUSTER_IDENTITY` | explicit env binding suffix |
//!
//! Word boundaries are `-`, `_`, `.`, whitespace, and lower→upper case
//! transitions, so `clientID`, `client_id` and `client-id` split the same way.

/// Split an identifier into its words.
fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c == '-' || c == '_' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if let Some(p) = prev
            && c.is_uppercase()
            && (p.is_lowercase() || p.is_ascii_digit())
            && !current.is_empty()
        {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `client-id` → `clientId`.
pub fn to_lower_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in split_words(name).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// `client-id` → `CLIENT_ID`.
pub fn to_screaming_snake(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// The key an option is looked up by in the config store.
pub fn lookup_key(flag_name: &str) -> String {
    to_lower_camel(flag_name)
}

/// Whether a canonical option name has an internal word separator and so
/// qualifies for an explicit environment binding.
pub fn is_multi_word(flag_name: &str) -> bool {
    flag_name.trim_matches('-').contains('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_camel_from_kebab() {
        assert_eq!(to_lower_camel("client-id"), "clientId");
        assert_eq!(
            to_lower_camel("garden-cluster-identity"),
            "gardenClusterIdentity"
        );
    }

    #[test]
    fn lower_camel_single_word_unchanged() {
        assert_eq!(to_lower_camel("token"), "token");
    }

    #[test]
    fn lower_camel_normalizes_case() {
        assert_eq!(to_lower_camel("Client-ID"), "clientId");
        assert_eq!(to_lower_camel("client_id"), "clientId");
    }

    #[test]
    fn screaming_snake_from_kebab() {
        assert_eq!(to_screaming_snake("client-id"), "CLIENT_ID");
        assert_eq!(
            to_screaming_snake("insecure-skip-tls-verify"),
            "INSECURE_SKIP_TLS_VERIFY"
        );
    }

    #[test]
    fn screaming_snake_from_camel() {
        assert_eq!(to_screaming_snake("clientId"), "CLIENT_ID");
        assert_eq!(to_screaming_snake("expiration2Seconds"), "EXPIRATION2_SECONDS");
    }

    #[test]
    fn camel_and_snake_agree_on_words() {
        let name = "garden-cluster-identity";
        assert_eq!(
            to_screaming_snake(&to_lower_camel(name)),
            to_screaming_snake(name)
        );
    }

    #[test]
    fn lookup_key_is_lower_camel() {
        assert_eq!(lookup_key("expiration-seconds"), "expirationSeconds");
    }

    #[test]
    fn multi_word_detection() {
        assert!(is_multi_word("client-id"));
        assert!(!is_multi_word("token"));
        assert!(!is_multi_word("-token-"));
    }
}
