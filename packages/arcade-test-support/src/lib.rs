//! Test support shared by the arcade integration tests.

pub mod test_logging;
