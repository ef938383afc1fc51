/// Prefix for every log line emitted by the service.
pub const API_NAME: &str = "[hotel-api]";

pub const HOTEL_ID_PREFIX: &str = "hid-";

pub const DEFAULT_PAGE_MAX_SIZE: u32 = 50;
