use std::process::exit;

use crate::args::Usage;

/// Conventional location of the annotations file, relative to the root of
/// the kernel source tree.
pub const DEFAULT_ANNOTATIONS: &str = "debian/config/annotations";

pub fn autodetect_annotations() -> &'static str {
    DEFAULT_ANNOTATIONS
}

/// Report a fatal command-line usage error: print `message` to stdout,
/// optionally followed by the parser's usage banner, then exit with
/// status 1. Never returns.
pub fn arg_fail(parser: &mut dyn Usage, message: &str, show_usage: bool) -> ! {
    println!("{message}");
    if show_usage {
        parser.print_usage();
    }
    exit(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autodetect_annotations_returns_default_path() {
        assert_eq!(autodetect_annotations(), "debian/config/annotations");
        assert_eq!(autodetect_annotations(), DEFAULT_ANNOTATIONS);
    }
}
