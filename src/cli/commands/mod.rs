//! CLI subcommands

pub mod advise;
pub mod algorithms;
pub mod compare;
