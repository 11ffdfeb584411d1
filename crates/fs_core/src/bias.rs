use url::Url;

use crate::types::Bias;

pub const LEFT_DOMAINS: &[&str] = &[
    "cnn.com",
    "msnbc.com",
    "huffpost.com",
    "vox.com",
    "theguardian.com",
    "nytimes.com",
];

pub const RIGHT_DOMAINS: &[&str] = &[
    "foxnews.com",
    "breitbart.com",
    "dailywire.com",
    "newsmax.com",
    "washingtonexaminer.com",
    "theblaze.com",
];

/// Classifies a URL by checking its host against the static domain lists.
///
/// The left list is checked first. Anything without a recognizable host,
/// including strings that are not URLs at all, is `Center`.
pub fn classify_bias(url: &str) -> Bias {
    let domain = Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .unwrap_or_default();

    if domain.is_empty() {
        return Bias::Center;
    }

    if LEFT_DOMAINS.iter().any(|d| domain.contains(d)) {
        Bias::Left
    } else if RIGHT_DOMAINS.iter().any(|d| domain.contains(d)) {
        Bias::Right
    } else {
        Bias::Center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_domains() {
        for domain in LEFT_DOMAINS {
            let url = format!("https://www.{}/politics/some-article", domain);
            assert_eq!(classify_bias(&url), Bias::Left, "{}", url);
        }
    }

    #[test]
    fn test_right_domains() {
        for domain in RIGHT_DOMAINS {
            let url = format!("https://{}/news/story", domain);
            assert_eq!(classify_bias(&url), Bias::Right, "{}", url);
        }
    }

    #[test]
    fn test_center_fallback() {
        assert_eq!(classify_bias("https://www.reuters.com/world/"), Bias::Center);
        assert_eq!(classify_bias("https://apnews.com/article/x"), Bias::Center);
        assert_eq!(classify_bias("not a url"), Bias::Center);
        assert_eq!(classify_bias("cnn.com/no-scheme"), Bias::Center);
        assert_eq!(classify_bias(""), Bias::Center);
    }

    #[test]
    fn test_domain_is_case_insensitive() {
        assert_eq!(classify_bias("https://EDITION.CNN.COM/2024/01/01/x"), Bias::Left);
        assert_eq!(classify_bias("HTTPS://WWW.FOXNEWS.COM/politics"), Bias::Right);
    }

    #[test]
    fn test_only_domain_is_inspected() {
        assert_eq!(
            classify_bias("https://example.com/cnn.com/foxnews.com"),
            Bias::Center
        );
        assert_eq!(
            classify_bias("https://www.foxnews.com/?ref=cnn.com"),
            Bias::Right
        );
    }
}
