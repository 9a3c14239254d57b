pub mod models;
pub mod table;

/// The hard ceiling, in bytes, on the memory a predictor may retain.
/// Predictors over this budget are ineligible; the limit is enforced
/// with a compile-time assertion on the memory struct.
pub const ROBO_MEMORY_LIMIT: usize = 65536;
