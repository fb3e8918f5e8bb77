use clap::Parser;
use std::path::PathBuf;

/// Arguments for the supply command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Stage packages during a build:\n    aptpack supply /app /cache /deps 0\n\n\
                   Use a custom sources template:\n    \
                   aptpack supply /app /cache /deps 0 --sources-template ./sources.list\n\n\
                   Templates can also come from the environment:\n    \
                   APTPACK_KEYRING_TEMPLATE=/tmp/trusted.gpg aptpack supply /app /cache /deps 0")]
pub struct SupplyArgs {
    /// Application directory containing apt.yml
    pub build_dir: PathBuf,

    /// Cache directory persisted between builds
    pub cache_dir: PathBuf,

    /// Root directory for staged dependencies
    pub deps_dir: PathBuf,

    /// Index assigned to this stage under the deps directory
    pub deps_idx: String,

    /// Sources list copied into the private apt environment
    #[arg(
        long,
        value_name = "FILE",
        env = "APTPACK_SOURCES_TEMPLATE",
        default_value = "/etc/apt/sources.list"
    )]
    pub sources_template: PathBuf,

    /// Trusted keyring copied into the private apt environment
    #[arg(
        long,
        value_name = "FILE",
        env = "APTPACK_KEYRING_TEMPLATE",
        default_value = "/etc/apt/trusted.gpg"
    )]
    pub keyring_template: PathBuf,
}
