use clap::{Arg, Command, ValueHint};
use std::path::PathBuf;

/// Command-line definition for the `dense-grid` binary.
pub fn build_cli() -> Command {
    Command::new("dense-grid")
        .version(clap::crate_version!())
        .about("Self-check and inspection tool for the dense-grid container")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Run the grid construction, access, copy and move self-check")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON self-check configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("rows")
                        .short('r')
                        .long("rows")
                        .help("Row count. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .short('c')
                        .long("cols")
                        .help("Column count. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("initial")
                        .long("initial")
                        .help("Value every cell is constructed with.")
                        .value_parser(clap::value_parser!(f32))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("fill")
                        .long("fill")
                        .help("Value written through row views and read back.")
                        .value_parser(clap::value_parser!(f32))
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("repeat")
                        .long("repeat")
                        .help("Number of times to repeat the check.")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print a grid of the given shape")
                .arg(
                    Arg::new("rows")
                        .short('r')
                        .long("rows")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .short('c')
                        .long("cols")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("value")
                        .long("value")
                        .help("Value every cell is filled with")
                        .default_value("0")
                        .value_parser(clap::value_parser!(f32))
                        .allow_negative_numbers(true),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
