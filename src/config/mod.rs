mod filesystem;
mod model;
mod parser;
mod resolver;

pub use filesystem::{FileSystem, RealFileSystem};
pub use model::{ConfigKey, Configuration, DEFAULT_CONFIG_NAME, ExplicitOptions};
pub use parser::{KeyValueFile, is_enabled, parse_key_values};
pub use resolver::{ConfigResolver, ResolveResult, merge_flag};
