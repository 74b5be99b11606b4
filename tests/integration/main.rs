//! Integration tests for prop-ev

mod common;
mod config_test;
mod ev_test;
mod middle_test;
mod snapshot_test;
