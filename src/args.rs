use clap::Parser;

/// Kconfig annotations helper for Ubuntu kernel packaging
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the annotations file, autodetected relative to the kernel
    /// source tree when omitted
    #[arg(long = "file")]
    pub file: Option<String>,

    /// Config option to act on (e.g. CONFIG_DEBUG_INFO)
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Architecture to filter annotations by
    #[arg(long = "arch")]
    pub arch: Option<String>,

    /// Kernel flavour to filter annotations by, requires --arch
    #[arg(long = "flavour")]
    pub flavour: Option<String>,

    /// New value to record for the config option selected with --config
    #[arg(long = "write")]
    pub write: Option<String>,

    /// Enable debug output
    #[arg(long = "verbose", default_value_t = false)]
    pub verbose: bool,
}

/// Usage-printing capability expected by [`crate::utils::arg_fail`] from
/// the argument parser.
pub trait Usage {
    fn print_usage(&mut self);
}

impl Usage for clap::Command {
    fn print_usage(&mut self) {
        println!("{}", self.render_usage());
    }
}
