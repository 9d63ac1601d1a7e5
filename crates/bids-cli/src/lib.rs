//! Library components of the BIDS raw dataset inventory CLI.

pub mod logging;
pub mod pipeline;
