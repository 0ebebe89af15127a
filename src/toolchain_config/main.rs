//!
//! The toolchain configuration inspector binary.
//!

pub mod arguments;

use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    std::process::exit(match main_inner() {
        Ok(()) => toolchain_config::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{}", error.to_string().red());
            toolchain_config::EXIT_CODE_FAILURE
        }
    })
}

///
/// The auxiliary `main` function to facilitate the `?` error conversion operator.
///
fn main_inner() -> anyhow::Result<()> {
    let arguments = Arguments::new();
    arguments.validate()?;

    let config = match arguments.config.as_deref() {
        Some(path) => {
            let config = toolchain_config::Config::try_from_path(path)?;
            eprintln!("Configuration {:?} loaded.", path);
            config
        }
        None => toolchain_config::Config::default(),
    };
    let config = config.initialize_global()?;

    if arguments.json {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    if arguments.network.is_none() && arguments.compiler.is_none() {
        for (name, profile) in config.networks() {
            print_network(name, profile);
        }
        for (name, profile) in config.compilers() {
            print_compiler(name, profile);
        }
        return Ok(());
    }

    if let Some(name) = arguments.network.as_deref() {
        print_network(name, config.get_network(name)?);
    }
    if let Some(name) = arguments.compiler.as_deref() {
        print_compiler(name, config.get_compiler(name)?);
    }

    Ok(())
}

///
/// Prints the network profile summary.
///
fn print_network(name: &str, profile: &toolchain_config::NetworkProfile) {
    println!(
        "Network `{}`: {} (network id `{}`)",
        name.bold(),
        profile.endpoint(),
        profile.network_id,
    );
}

///
/// Prints the compiler profile summary.
///
fn print_compiler(name: &str, profile: &toolchain_config::CompilerProfile) {
    let optimizer = profile.optimizer();
    let optimizer = if optimizer.enabled {
        format!("enabled, {} runs", optimizer.runs).green()
    } else {
        "disabled".yellow()
    };
    print!("Compiler `{}`: v{}, optimizer {}", name.bold(), profile.version, optimizer);
    if let Some(evm_version) = profile.settings.evm_version.as_deref() {
        print!(", EVM version `{}`", evm_version);
    }
    println!();
}
