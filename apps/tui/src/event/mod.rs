mod loop_handler;

pub use loop_handler::{build_headless_export, run, run_headless};
