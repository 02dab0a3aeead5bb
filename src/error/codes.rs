/// Error code registry for dictmap
///
/// Error codes are organized by category:
/// - 1000-1999: Parse errors
/// - 2000-2999: Serialization errors
/// - 3000-3999: Validation errors
/// - 4000-4999: Configuration errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Parse errors (1000-1999)
    pub const PARSE_GENERIC: u16 = 1000;
    pub const PARSE_INVALID_JSON: u16 = 1001;
    pub const PARSE_INVALID_SHAPE: u16 = 1002;
    pub const PARSE_DUPLICATE_KEY: u16 = 1003;

    // Serialization errors (2000-2999)
    pub const SERIALIZE_GENERIC: u16 = 2000;
    pub const SERIALIZE_VALUE_FAILED: u16 = 2001;

    // Validation errors (3000-3999)
    pub const VALIDATION_GENERIC: u16 = 3000;
    pub const VALIDATION_DUPLICATE_KEY: u16 = 3001;

    // Configuration errors (4000-4999)
    pub const CONFIG_GENERIC: u16 = 4000;
    pub const CONFIG_INVALID_VERBOSITY: u16 = 4001;
    pub const CONFIG_LOGGING_ALREADY_SET: u16 = 4002;
    pub const CONFIG_INVALID_FILTER: u16 = 4003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Parse errors
        1000 => "Generic parse error",
        1001 => "Invalid JSON syntax",
        1002 => "JSON input is not an object of the expected value type",
        1003 => "Duplicate key in JSON object",

        // Serialization errors
        2000 => "Generic serialization error",
        2001 => "Value could not be serialized",

        // Validation errors
        3000 => "Generic validation error",
        3001 => "Duplicate key in entries",

        // Configuration errors
        4000 => "Generic configuration error",
        4001 => "Verbosity must be an integer between 0 and 255",
        4002 => "A global tracing subscriber is already installed",
        4003 => "Invalid log filter directive",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_ranges() {
        assert!(ErrorCode::PARSE_GENERIC >= 1000 && ErrorCode::PARSE_GENERIC < 2000);
        assert!(ErrorCode::SERIALIZE_GENERIC >= 2000 && ErrorCode::SERIALIZE_GENERIC < 3000);
        assert!(ErrorCode::VALIDATION_GENERIC >= 3000 && ErrorCode::VALIDATION_GENERIC < 4000);
        assert!(ErrorCode::CONFIG_GENERIC >= 4000 && ErrorCode::CONFIG_GENERIC < 5000);
    }

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(describe_error_code(1003), "Duplicate key in JSON object");
        assert_eq!(describe_error_code(3001), "Duplicate key in entries");
        assert_eq!(describe_error_code(65535), "Unknown error code");
    }
}
