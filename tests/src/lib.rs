//! # Social Graph Hub Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Bootstrapped hub, keys, module installation
//! ├── integration/      # End-to-end flows across components
//! └── adversarial/      # Replay, forgery and atomicity attacks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sg-tests
//! cargo test -p sg-tests integration::
//! cargo test -p sg-tests adversarial::
//! ```

pub mod adversarial;
pub mod fixtures;
pub mod integration;
