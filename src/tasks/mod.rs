//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Cache reap: removes expired cache entries every reap interval

mod reaper;

pub use reaper::{spawn_reap_task, ReapTask};
