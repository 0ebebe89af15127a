//!
//! The smart-contract toolchain configuration library.
//!

pub(crate) mod compiler;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod network;

pub use self::compiler::settings::optimizer::Optimizer as CompilerOptimizer;
pub use self::compiler::settings::Settings as CompilerSettings;
pub use self::compiler::CompilerProfile;
pub use self::config::format::Format as ConfigFormat;
pub use self::config::Config;
pub use self::error::Error;
pub use self::error::ProfileKind;
pub use self::network::id::Id as NetworkId;
pub use self::network::NetworkProfile;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
