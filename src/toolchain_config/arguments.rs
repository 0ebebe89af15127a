//!
//! The toolchain configuration inspector arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

///
/// The toolchain configuration inspector arguments.
///
#[derive(Debug, StructOpt)]
#[structopt(
    name = "toolchain-config",
    about = "The smart-contract toolchain configuration inspector"
)]
pub struct Arguments {
    /// The JSON or TOML declaration file.
    /// If not specified, the built-in development record is used.
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// The network profile to print.
    #[structopt(short = "n", long = "network")]
    pub network: Option<String>,

    /// The compiler profile to print.
    #[structopt(long = "compiler")]
    pub compiler: Option<String>,

    /// Print the validated record as JSON.
    #[structopt(long = "json")]
    pub json: bool,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }

    ///
    /// Validates the arguments.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.json && (self.network.is_some() || self.compiler.is_some()) {
            anyhow::bail!("The JSON output cannot be combined with a profile selection");
        }

        if let Some(name) = self.network.as_deref() {
            if name.is_empty() {
                anyhow::bail!("The network profile name is empty");
            }
        }
        if let Some(name) = self.compiler.as_deref() {
            if name.is_empty() {
                anyhow::bail!("The compiler profile name is empty");
            }
        }

        Ok(())
    }
}
