//! Unit tests for the task pipeline

mod service_tests;
