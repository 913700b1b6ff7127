// src/config/consts.rs

// Net config
pub const DEFAULT_ORIGIN: &str = "https://www.nitrotype.com";
pub const ENDPOINTS: &[&str] = &[
    "/api/v2/bootstrap",
    "/api/bootstrap",
    "/api/v2/",
    "/api/",
];
pub const USER_AGENT: &str = "nt_shop/0.3";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Auto-refresh
pub const REFRESH_INTERVAL_SECS: u64 = 5 * 60;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const CONFIG_FILE: &str = "nt_shop.cfg";

// Normalizer: wrapper keys, checked in this order
pub const WRAPPER_KEYS: &[&str] = &["BOOTSTRAP", "bootstrap", "SHOP", "shop", "data", "payload"];

// Finder: an array whose elements expose one of these keys looks like items
pub const ITEM_MARKER_KEYS: &[&str] = &["name", "title", "type"];
// ...or whose lowercased path mentions one of these
pub const SHOP_PATH_HINTS: &[&str] = &["shop", "daily", "featured", "upcoming"];

// Classifier: lowercased path fragments that mean "tomorrow's shop"
pub const UPCOMING_PATH_HINTS: &[&str] = &["next", "upcoming"];

// Item fields, first present wins
pub const NAME_KEYS: &[&str] = &["name", "title", "id"];
pub const IMAGE_KEYS: &[&str] = &["image", "img", "icon", "imageURL"];
pub const KIND_KEYS: &[&str] = &["type", "category"];
pub const PRICE_KEYS: &[&str] = &["price", "cash"];

// Status lines
pub const MSG_FETCHING: &str = "Fetching bootstrap...";
pub const MSG_UNAVAILABLE: &str =
    "Could not fetch NitroType bootstrap data. Make sure you are logged in.";
pub const MSG_NO_ITEMS: &str = "No items found.";
