#![deny(missing_docs)]
#![doc = "YAML search configurations and the command lines they translate to."]

pub mod command;
pub mod config;

pub use command::command_line;
pub use config::{
    LatticeSearch, LatticeType, NetConstruction, NetSearch, Search, SearchConfig,
    DEFAULT_EXECUTABLE, DEFAULT_SIDE_FILE,
};
