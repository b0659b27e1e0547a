//! Size limits for the recorder.
//!
//! The request history is a fixed-size window in process memory; these
//! bounds keep a busy service's recorder at a predictable working set.

/// Default number of completed requests retained in memory.
///
/// At ~1KB per record this keeps the history under ~2MB.
pub const DEFAULT_REQUEST_WINDOW: usize = 2000;

/// Upper bound for the configurable request window (~50MB at 1KB/record).
pub const MAX_REQUEST_WINDOW: usize = 50_000;

/// Target description strings are truncated to this many characters.
///
/// Route paths and handler names are short; anything longer is a caller
/// passing a payload where a label belongs.
pub const MAX_TARGET_LEN: usize = 512;

/// Maximum number of records a single viewer query may request.
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Records returned when a viewer query gives no limit.
pub const DEFAULT_QUERY_LIMIT: usize = 100;
