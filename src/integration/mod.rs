//! Integration tests that drive the full router against on-disk stores

mod e2e;
mod fixtures;
