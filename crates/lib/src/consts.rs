/// Application name, used for directory names.
pub const APP_NAME: &str = "systrig";

/// Argument token replaced by each glob match during fan-out.
pub const WILDCARD_TOKEN: &str = "***";

/// Maximum length of a task label, keeps console output aligned.
pub const MAX_TASK_LEN: usize = 42;

/// Environment variable overriding the trigger search path (colon-separated).
pub const SEARCH_PATH_ENV: &str = "SYSTRIG_PATH";

/// File extension of trigger definitions.
pub const TRIGGER_EXTENSION: &str = "toml";

/// Marker present when the system was booted from a live medium.
pub const LIVE_MARKER: &str = "/run/livedev";
