//! Social platform profile URLs.

use crate::profile::{SocialHandles, present};

/// A supported social platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Instagram,
    Snapchat,
    YouTube,
    Twitter,
    Facebook,
    LinkedIn,
    GitHub,
    Telegram,
    WhatsApp,
}

impl SocialPlatform {
    /// All platforms, in the order their links are listed.
    pub const ALL: [Self; 9] = [
        Self::Instagram,
        Self::Snapchat,
        Self::YouTube,
        Self::Twitter,
        Self::Facebook,
        Self::LinkedIn,
        Self::GitHub,
        Self::Telegram,
        Self::WhatsApp,
    ];

    /// URL prefix the bare handle is appended to.
    pub const fn url_prefix(self) -> &'static str {
        match self {
            Self::Instagram => "https://www.instagram.com/",
            Self::Snapchat => "https://www.snapchat.com/add/",
            Self::YouTube => "https://www.youtube.com/",
            Self::Twitter => "https://twitter.com/",
            Self::Facebook => "https://facebook.com/",
            Self::LinkedIn => "https://linkedin.com/in/",
            Self::GitHub => "https://github.com/",
            Self::Telegram => "https://t.me/",
            Self::WhatsApp => "https://wa.me/",
        }
    }

    /// The stored handle for this platform, if present.
    pub fn handle(self, handles: &SocialHandles) -> Option<&str> {
        let value = match self {
            Self::Instagram => &handles.instagram,
            Self::Snapchat => &handles.snapchat,
            Self::YouTube => &handles.youtube_channel,
            Self::Twitter => &handles.twitter,
            Self::Facebook => &handles.facebook,
            Self::LinkedIn => &handles.linkedin,
            Self::GitHub => &handles.github,
            Self::Telegram => &handles.telegram,
            Self::WhatsApp => &handles.whatsapp,
        };
        present(value.as_ref())
    }

    /// Profile URL for `handle` on this platform.
    pub fn profile_url(self, handle: &str) -> String {
        format!("{}{handle}", self.url_prefix())
    }
}

/// Profile URLs for every platform that has a handle, in platform order.
pub fn social_urls(handles: &SocialHandles) -> Vec<String> {
    SocialPlatform::ALL
        .iter()
        .filter_map(|platform| platform.handle(handles).map(|h| platform.profile_url(h)))
        .collect()
}
