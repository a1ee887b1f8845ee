//! End-to-end tests for LogFlow live under `tests/`; this crate has no API.
