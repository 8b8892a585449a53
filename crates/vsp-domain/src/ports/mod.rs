//! Domain ports
//!
//! Capability contracts that concrete providers implement. Discovery and
//! construction of implementations live in `vsp-application`.

pub mod providers;
