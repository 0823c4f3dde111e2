pub mod auth_cmd;
pub mod auto_sync;
pub mod check;
pub mod common;
pub mod completions;
pub mod notion;
pub mod pages;
pub mod sync;
