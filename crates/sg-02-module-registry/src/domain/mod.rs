pub mod allowlist;
pub mod directory;
