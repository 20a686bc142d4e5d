mod compare;
mod serve;

// Compare commands
pub use compare::{run_compare, summary_lines};

// Serve commands
pub use serve::run_serve;
