pub mod error;
pub mod models;
pub mod store;
pub mod validation;


// Test utilities - publicly exposed with test feature
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
