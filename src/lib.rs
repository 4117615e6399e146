#[macro_use]
extern crate tracing;

mod app;
pub mod args;
pub mod logging;

pub use app::App;
pub use args::Args;
pub use logging::{
    init_errors,
    init_logging,
};
