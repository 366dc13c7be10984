use crate::cli::commands::{LONG_FLAGS, VALUE_FLAGS};
use std::ffi::OsString;

/// Rewrites single dash long flags (`-bucket=b`, `-list-buckets`) into their
/// double dash form so both spellings parse the same. The first item is the
/// program name and is kept as is; nothing after a bare `--` is touched, and
/// neither is the value following a flag such as `-key`.
#[must_use]
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;
    let mut value_next = false;

    args.into_iter()
        .map(Into::<OsString>::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || terminated {
                return arg;
            }

            if value_next {
                value_next = false;
                return arg;
            }

            let rewrite = match arg.to_str() {
                Some("--") => {
                    terminated = true;
                    false
                }
                Some(text) => {
                    // `--key` as well as `-key`
                    let flag = text.strip_prefix("--").or_else(|| text.strip_prefix('-'));
                    value_next = flag.is_some_and(|flag| VALUE_FLAGS.contains(&flag));

                    text.strip_prefix('-')
                        .filter(|flag| !flag.starts_with('-'))
                        .map(|flag| flag.split_once('=').map_or(flag, |(name, _)| name))
                        .is_some_and(|name| LONG_FLAGS.contains(&name))
                }
                None => false,
            };

            if rewrite {
                let mut long = OsString::from("-");
                long.push(&arg);
                long
            } else {
                arg
            }
        })
        .collect()
}
