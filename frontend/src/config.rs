use log::Level;

pub const STUDIO_NAME: &str = "SB Designs";

pub const HEADER_LOGO_SRC: &str = "/assets/icon.png";
pub const FOOTER_LOGO_SRC: &str = "/assets/icon2.png";

/// Fraction of a section that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const NAV_STAGGER_MS: u32 = 100;
pub const PROJECT_STAGGER_MS: u32 = 100;
pub const SUBSIDIARY_STAGGER_MS: u32 = 150;
pub const CONTACT_STAGGER_MS: u32 = 200;
pub const SOCIAL_STAGGER_MS: u32 = 100;
pub const SOCIAL_DELAY_OFFSET_MS: u32 = 600;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose tracker output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
