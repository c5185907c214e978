/// Crate-wide `Result` with `anyhow::Error` so adapters and the use case
/// can attach context while propagating with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
