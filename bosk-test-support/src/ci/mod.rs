//! Continuous-integration support: shared policy surfaces for test effort.

pub mod property_test_profile;
