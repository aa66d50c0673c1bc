//! Integration tests
//!
//! - `session_test`: end-to-end scrubbing scenarios through `ScrubSession`
//! - `cli_test`: the `framescrub` binary

mod cli_test;
mod helpers;
mod session_test;
