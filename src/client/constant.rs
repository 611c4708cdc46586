pub const SITE_NAME: &str = "Herald";

/// Info and success banners disappear after this delay.
pub const STATUS_HIDE_DELAY_MS: u32 = 5_000;
