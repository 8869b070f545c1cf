//! dense-grid-cli: command-line front end for the `dense-grid` self-check.
pub mod cli;
pub mod selfcheck;
