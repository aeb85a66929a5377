//! Configuration parsing for the groups file

pub mod groups;

pub use groups::{parse_groups_config, GroupConfig, GroupsFileConfig};
