//! Application-wide constants

pub const DEFAULT_ROOT_ORDER_STRIDE: i32 = 10;
pub const DEFAULT_EVENT_CAPACITY: usize = 64;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 15;
pub const BOX_ID_PREFIX: &str = "box-";
pub const ENV_PREFIX: &str = "MENU_ACCESS";
