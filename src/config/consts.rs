// src/config/consts.rs

// Net config: the intel service normally runs alongside us
pub const HOST: &str = "127.0.0.1";
pub const PORT: u16 = 5000;
pub const INTEL_PATH: &str = "/api/proptech-intel";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const FEED_FILE: &str = "feed.json";

// Display
pub const NO_SUMMARY: &str = "No summary available.";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "sections";
