pub const PROGRAM_NAME: &str = "lsl";

/// Environment variable controlling the stderr log level.
pub const PROGRAM_LOG_LEVEL: &str = "LSL_LOG_LEVEL";
