/// Broadcasters carrying live flood coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveChannel {
    Sirasa,
    Derana,
    Hiru,
}

impl LiveChannel {
    pub const ALL: [LiveChannel; 3] = [Self::Sirasa, Self::Derana, Self::Hiru];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Sirasa => "sirasa",
            Self::Derana => "derana",
            Self::Hiru => "hiru",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Sirasa => "Sirasa",
            Self::Derana => "Derana",
            Self::Hiru => "HiruNews",
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            Self::Sirasa => "https://www.sirasa.lk",
            Self::Derana => "https://www.derana.lk",
            Self::Hiru => "https://www.hirunews.lk",
        }
    }
}

/// Official site for a channel slug, `"#"` when unknown.
pub fn channel_url(slug: &str) -> &'static str {
    LiveChannel::from_slug(slug).map_or("#", LiveChannel::url)
}

/// Display name for a channel slug; unknown slugs echo back.
pub fn channel_display_name(slug: &str) -> &str {
    LiveChannel::from_slug(slug).map_or(slug, |c| c.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_channels_resolve() {
        assert_eq!(channel_url("sirasa"), "https://www.sirasa.lk");
        assert_eq!(channel_url("derana"), "https://www.derana.lk");
        assert_eq!(channel_url("hiru"), "https://www.hirunews.lk");
        assert_eq!(channel_display_name("hiru"), "HiruNews");
    }

    #[test]
    fn unknown_channels_fall_back() {
        assert_eq!(channel_url("itn"), "#");
        assert_eq!(channel_display_name("itn"), "itn");
        assert_eq!(channel_url("Sirasa"), "#");
    }
}
