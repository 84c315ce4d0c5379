pub mod config;
mod context;
pub mod init;
pub mod pre_commit;
pub mod pre_receive;

pub use config::run_config;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use pre_commit::run_pre_commit;
pub use pre_receive::{PushUpdate, parse_push_lines, run_pre_receive};
