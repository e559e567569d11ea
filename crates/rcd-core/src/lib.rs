pub mod config;
pub mod logging;

pub mod batch;
pub mod candidate;
pub mod classify;
pub mod control;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod listing;
pub mod naming;
pub mod storage;
