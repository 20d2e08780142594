/// Scale between a decimal fraction and a percentage
pub const PERCENT_SCALE: f64 = 100.0;

/// Cents in one dollar
pub const CENTS_PER_DOLLAR: f64 = 100.0;

/// Largest cent amount an `f64` still counts exactly (2^53)
pub const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

/// Inches in one yard
pub const INCHES_PER_YARD: f64 = 36.0;

/// Digit count of a US number with a leading country code (1 800 555 5555)
pub const PHONE_DIGITS_WITH_COUNTRY: usize = 11;
/// Digit count of a US number without country code (555 555 5555)
pub const PHONE_DIGITS_LOCAL: usize = 10;

/// Separator between the tokens of a prefixed key (`billing_city`)
pub const KEY_TOKEN_SEPARATOR: char = '_';

/// Last ISO weekday number counted as a working day (Friday)
pub const LAST_WEEKDAY: u32 = 5;

/// Default output format for `format_date` (strftime syntax)
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";
/// Default output format for `format_time` (strftime syntax)
pub const DEFAULT_TIME_FORMAT: &str = "%I:%M %p";

/// Layouts accepted when parsing a full date-time string
pub(crate) const DATE_TIME_LAYOUTS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
/// Layouts accepted when parsing a bare date string
pub(crate) const DATE_LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
/// Layouts accepted when parsing a bare time string
pub(crate) const TIME_LAYOUTS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p"];

/// Label of the empty entry placed ahead of the state list in a select box
pub const STATE_PLACEHOLDER_LABEL: &str = "Select...";

/// Number of months offered for a card expiry select box
pub const MONTHS_IN_YEAR: u8 = 12;

/// English month names, January first
pub const MONTH_NAMES: [&str; MONTHS_IN_YEAR as usize] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Default number of years after the current one offered for a card expiry
pub const DEFAULT_EXP_YEARS_AHEAD: u16 = 10;

/// Characters a generated password is drawn from
pub const PASSWORD_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Default generated password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

/// Default API version segment used by `api_prefix`
pub const DEFAULT_API_VERSION: &str = "v1";
/// Root path under which versioned API routes live
pub const API_ROOT: &str = "/api";

/// Server variable carrying the client address
pub const REMOTE_ADDR_KEY: &str = "REMOTE_ADDR";
