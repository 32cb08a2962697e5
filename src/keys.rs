//! Message keys shared by every locale
//!
//! Type-safe constants so render code does not spell keys by hand.

// Login screen
pub const LANGUAGE: &str = "language";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const YOUR_USERNAME: &str = "your_username";
pub const YOUR_PASSWORD: &str = "your_password";
pub const SIGN_IN: &str = "sign_in";
pub const USER_NAME_AND_PASSWORD_MUST_NOT_BE_EMPTY: &str =
    "user_name_and_password_must_not_be_empty";
pub const USER_NAME_OR_PASSWORD_IS_INVALID: &str = "user_name_or_password_is_invalid";
pub const UNEXPECTED_ERROR: &str = "unexpected_error";
pub const OPEN_DESKTOP_VERSION: &str = "open_desktop_version";

// Sidebar
pub const DEVICES: &str = "devices";
pub const LOGOUT: &str = "logout";

// Device details
pub const SELECT_ON_MAP: &str = "select_on_map";
pub const NO_DATA_AVAILABLE: &str = "no_data_available";
pub const TIME: &str = "time";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const ALTITUDE: &str = "altitude";
pub const SPEED: &str = "speed";
pub const COURSE: &str = "course";
pub const ADDRESS: &str = "address";
pub const FOLLOW: &str = "follow";
pub const STOP_FOLLOWING: &str = "stop_following";
pub const GEO_FENCE: &str = "geo_fence";

/// Every key of the default locale, in screen order
pub const ALL: &[&str] = &[
    LANGUAGE,
    USERNAME,
    PASSWORD,
    YOUR_USERNAME,
    YOUR_PASSWORD,
    SIGN_IN,
    USER_NAME_AND_PASSWORD_MUST_NOT_BE_EMPTY,
    USER_NAME_OR_PASSWORD_IS_INVALID,
    UNEXPECTED_ERROR,
    OPEN_DESKTOP_VERSION,
    DEVICES,
    LOGOUT,
    SELECT_ON_MAP,
    NO_DATA_AVAILABLE,
    TIME,
    LATITUDE,
    LONGITUDE,
    ALTITUDE,
    SPEED,
    COURSE,
    ADDRESS,
    FOLLOW,
    STOP_FOLLOWING,
    GEO_FENCE,
];
