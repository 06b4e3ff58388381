pub mod config;
pub mod logging;

pub mod batch;
pub mod composer;
pub mod error;
pub mod naming;
pub mod prompt;
pub mod record;
pub mod storage;
pub mod team;
pub mod template;
