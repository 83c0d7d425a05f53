pub mod compilation_db;
pub mod config;
pub mod error;
pub mod frontend;
pub mod matcher;
pub mod options;
pub mod signature;
pub mod tool;

pub use compilation_db::{CompilationDatabase, CompileCommand};
pub use config::Settings;
pub use error::{CompilationDatabaseError, ConfigError, FrontendError, ScanError};
pub use matcher::{FunctionKind, FunctionMatch, MatchCallback, find_function_definitions};
pub use options::ScanOptions;
pub use signature::{FileFilter, FunctionDefinition, SignatureCollector};
pub use tool::{SignatureTool, ToolStatus, scan};
