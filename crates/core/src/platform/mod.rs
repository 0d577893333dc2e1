//! Chat platform boundary

pub mod ports;
