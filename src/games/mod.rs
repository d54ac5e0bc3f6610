//! Games built on the table.
//!
//! Each game is a `GameDriver` written purely against `EngineOperations`.

pub mod go_fish;
pub mod war;
