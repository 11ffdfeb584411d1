use fs_core::Bias;

pub const LEFT_SOURCES: &[&str] = &["cnn", "msnbc", "huffpost", "vox"];
pub const RIGHT_SOURCES: &[&str] = &["fox", "breitbart", "daily wire", "newsmax"];
pub const CENTER_SOURCES: &[&str] = &["reuters", "ap", "bloomberg", "wsj"];

pub fn keywords(bias: Bias) -> &'static [&'static str] {
    match bias {
        Bias::Left => LEFT_SOURCES,
        Bias::Right => RIGHT_SOURCES,
        Bias::Center => CENTER_SOURCES,
    }
}

/// True when the source name contains one of the keywords for `bias`.
pub fn matches_bias(source_name: &str, bias: Bias) -> bool {
    let source_name = source_name.to_lowercase();
    keywords(bias).iter().any(|name| source_name.contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_bias() {
        assert!(matches_bias("CNN", Bias::Left));
        assert!(matches_bias("HuffPost", Bias::Left));
        assert!(matches_bias("Fox News", Bias::Right));
        assert!(matches_bias("The Daily Wire", Bias::Right));
        assert!(matches_bias("Reuters", Bias::Center));
        assert!(matches_bias("AP News", Bias::Center));
        assert!(matches_bias("The Wall Street Journal (WSJ)", Bias::Center));

        assert!(!matches_bias("Fox News", Bias::Left));
        assert!(!matches_bias("CNN", Bias::Right));
        assert!(!matches_bias("BBC News", Bias::Right));
        assert!(!matches_bias("", Bias::Left));
    }
}
