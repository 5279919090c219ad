//! Application-wide constants

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Brazilian phone numbers carry 10 digits (landline) or 11 (mobile),
/// area code included.
pub const PHONE_DIGITS_LANDLINE: usize = 10;
pub const PHONE_DIGITS_MOBILE: usize = 11;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 30;
pub const MAX_NAME_TOKENS: usize = 4;
