//! Hardcoded site content. Every table is immutable and rendered in order.

use crate::visibility::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeColor {
    Orange,
    Green,
}

impl BadgeColor {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeColor::Orange => "badge-orange",
            BadgeColor::Green => "badge-green",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: BadgeColor,
}

/// A project, company or media entry shown as a card.
///
/// `link` is `None` for entries that are announced but not live yet; their
/// cards render without a click target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub status: Option<StatusBadge>,
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    pub title: &'static str,
    pub info: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialIcon {
    pub src: &'static str,
    pub alt: &'static str,
    pub class: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

const IN_DEVELOPMENT: StatusBadge = StatusBadge {
    label: "IN DEVELOPMENT",
    color: BadgeColor::Orange,
};

const BETA_PROGRAMME: StatusBadge = StatusBadge {
    label: "BETA PROGRAMME",
    color: BadgeColor::Green,
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Projects", target: SectionId::PROJECTS },
    NavItem { label: "Companies", target: SectionId::SUBSIDIARIES },
];

pub const PROJECTS: &[ContentItem] = &[
    ContentItem {
        title: "AeroMix",
        description: "Portable in-flight entertainment.",
        image: Some("/assets/aeromix.png"),
        status: Some(IN_DEVELOPMENT),
        link: Some("https://aeromix.pages.dev"),
    },
    ContentItem {
        title: "Duneb",
        description: "The most private browser. Ever.",
        image: Some("/assets/duneb.png"),
        status: Some(IN_DEVELOPMENT),
        link: Some("https://duneb.netlify.app"),
    },
    ContentItem {
        title: "JetCast",
        description: "An aviation podcast and talk show",
        image: Some("/assets/jetcast.png"),
        status: None,
        link: Some("https://jetcastpodcast.pages.dev"),
    },
    ContentItem {
        title: "Pixl",
        description: "Desktop and mobile wallpapers.",
        image: Some("/assets/pixl.png"),
        status: None,
        link: Some("https://gopixl.pages.dev"),
    },
    ContentItem {
        title: "SB Photos",
        description: "Aviation and wildlife photography.",
        image: Some("/assets/sbphotos.png"),
        status: None,
        link: Some("https://sbphotos.pages.dev"),
    },
    ContentItem {
        title: "ThrustByte",
        description: "An aviation and tech blog.",
        image: Some("/assets/thrustbyte.png"),
        status: None,
        link: Some("https://thrustbyte.pages.dev"),
    },
    ContentItem {
        title: "Trackle",
        description: "The UK railway station game.",
        image: Some("/assets/trackle.png"),
        status: Some(BETA_PROGRAMME),
        link: Some("https://trackle.pages.dev"),
    },
];

pub const SUBSIDIARIES: &[ContentItem] = &[
    ContentItem {
        title: "Point 2 Point",
        description: "Joint venture with TurquoiseTNT.",
        image: Some("/assets/point2point.png"),
        status: None,
        link: Some("https://point2point.pages.dev"),
    },
    ContentItem {
        title: "Duneb Browser",
        description: "A private browser subsidiary, wholly owned by SB Designs.",
        image: Some("/assets/duneb.png"),
        status: None,
        link: Some("https://duneb.netlify.app"),
    },
    ContentItem {
        title: "JetCast",
        description: "Joint venture with Sean FH and TurquoiseTNT.",
        image: Some("/assets/jetcast.png"),
        status: None,
        link: Some("https://jetcastpodcast.pages.dev"),
    },
    ContentItem {
        title: "HeadQR",
        description: "Developer for HeadQR. COMING SOON",
        image: Some("/assets/headqr.png"),
        status: None,
        link: None,
    },
    ContentItem {
        title: "Zenity",
        description: "Developer for Zenity. COMING SOON",
        image: Some("/assets/zenity.png"),
        status: None,
        link: None,
    },
];

pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        title: "Email",
        info: "hello@sbdesigns.is-a.dev",
        link: "mailto:hello@sbdesigns.is-a.dev",
    },
    ContactEntry {
        title: "Feedback Hub",
        info: "Send us your feedback and suggestions.",
        link: "https://sbdesigns.userjot.com",
    },
    ContactEntry {
        title: "Status",
        info: "See which services are up (or sadly down).",
        link: "https://status.sbdesigns.is-a.dev",
    },
    ContactEntry {
        title: "Media",
        info: "Explore brand media made by us, for your use.",
        link: "https://sbdesigns.is-a.dev/media",
    },
];

pub const HOME_SOCIALS: &[SocialIcon] = &[
    SocialIcon {
        src: "/assets/dev.png",
        alt: "DEV",
        class: "social-icon",
        link: "https://dev.to/sbdesigns",
    },
    SocialIcon {
        src: "/assets/github.png",
        alt: "GitHub",
        class: "social-icon",
        link: "https://github.com/sb-designs",
    },
];

pub const MEDIA_ITEMS: &[ContentItem] = &[ContentItem {
    title: "Wallpapers",
    description: "Explore the SB Designs wallpaper collection.",
    image: None,
    status: None,
    link: Some("https://sbdev.zone.id/wallpapers"),
}];

pub const MEDIA_SOCIALS: &[SocialIcon] = &[
    SocialIcon {
        src: "/assets/dc.png",
        alt: "Discord",
        class: "social-icon",
        link: "https://discord.gg/dPGjJt4p",
    },
    SocialIcon {
        src: "/assets/github.png",
        alt: "GitHub",
        class: "social-icon",
        link: "https://github.com/sb-designs",
    },
    SocialIcon {
        src: "/assets/instagram.png",
        alt: "Instagram",
        class: "social-icon cover",
        link: "https://instagram.com/sbdesigns.dev",
    },
    SocialIcon {
        src: "/assets/yt.png",
        alt: "YouTube",
        class: "social-icon cover",
        link: "https://youtube.com/@sbdesignsdev",
    },
];
