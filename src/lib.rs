//! Scan a directory tree for git repositories and draw yearly commit heatmaps.

pub mod cli;
pub mod error;
pub mod export;
pub mod git;
pub mod heat;
pub mod model;
