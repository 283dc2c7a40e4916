use crate::args::{FeaturesArgs, OutputFormat};
use anyhow::{Context, Result};
use uni::define::get_features;
use uni::domain::options::ProjectOptions;
use uni::kernel::config::load_config;

/// Resolves the project's features and prints their defines to stdout.
///
/// Options are layered: config file, then `UNI__*` environment, then flags.
///
/// # Errors
/// Returns an error if the options cannot be loaded or feature resolution fails.
pub fn print_features(args: &FeaturesArgs) -> Result<()> {
    let mut options: ProjectOptions =
        load_config(args.config.as_deref()).context("Failed to load project options")?;

    if let Some(input_dir) = &args.input_dir {
        options.input_dir.clone_from(input_dir);
    }
    if let Some(platform) = args.platform {
        options.platform = platform;
    }

    let defines = get_features(&options, args.build_command)
        .with_context(|| format!("Failed to resolve features of {}", options.input_dir.display()))?
        .defines();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&defines)?),
        OutputFormat::Define => {
            for (name, value) in defines.iter() {
                println!("{name}={value}");
            }
        },
    }

    Ok(())
}
