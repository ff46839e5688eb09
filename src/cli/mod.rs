mod check_config;
mod server;

pub use check_config::check_config;
pub use server::{build_intake, serve};
