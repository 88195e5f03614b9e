// glbind/src/tests/mod.rs
//
//! Tests against a fake driver.
//!
//! The fake driver's state is global, so every test that loads or calls through it is
//! `#[serial]`.

mod fake_driver;

mod aggregate;
mod loading;
mod marshalling;
mod platform;
mod wrappers;
