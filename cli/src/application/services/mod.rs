//! Application services — use-case orchestration.
//!
//! Each service composes domain logic with port trait calls. Services
//! import only from `crate::domain` and `crate::application::ports` —
//! never from `crate::infra`, `crate::commands`, or `crate::output`.

pub mod lifecycle;
