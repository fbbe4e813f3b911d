pub mod config_ops;
pub mod convert_ops;

use std::process;

/// Unwrap `$result` or print the error with `$fmt` and exit with status 1.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub(crate) use die;

/// Exit with status 1 when any conversion failed.
pub(crate) fn exit_if_failed(failed: usize) {
    if failed > 0 {
        process::exit(1);
    }
}
