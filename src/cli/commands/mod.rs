use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Long flags, all of which may also be written with a single dash.
pub const LONG_FLAGS: &[&str] = &[
    "filepath",
    "bucket",
    "key",
    "lambda",
    "prefix",
    "region",
    "list-buckets",
    "list-functions",
    "keys",
    "verbose",
    "help",
    "version",
];

/// Long flags that take a value; written without `=` the value is the next
/// argument, whatever it looks like.
pub const VALUE_FLAGS: &[&str] = &["filepath", "bucket", "key", "lambda", "prefix", "region"];

fn switch(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .num_args(0..=1)
        .require_equals(true)
        .default_value("false")
        .default_missing_value("true")
        .value_parser(clap::value_parser!(bool))
}

fn string(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .num_args(1)
        .allow_hyphen_values(true)
        .default_value("")
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("s3notify")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            string("filepath", "Path to the file to upload")
                .value_name("path"),
        )
        .arg(
            string("bucket", "Name of the S3 bucket to upload to or list")
                .value_name("bucket"),
        )
        .arg(
            string("key", "Object key to upload the file to, defaults to the file name")
                .value_name("key"),
        )
        .arg(
            string("lambda", "Name of the Lambda function to notify")
                .value_name("function"),
        )
        .arg(
            Arg::new("prefix")
            .long("prefix")
            .help("Only list keys that begin with this prefix")
            .value_name("prefix")
            .num_args(1)
            .allow_hyphen_values(true)
        )
        .arg(
            Arg::new("region")
            .long("region")
            .help("AWS region, overrides the ambient configuration")
            .value_name("region")
            .num_args(1)
            .allow_hyphen_values(true)
        )
        .arg(switch("list-buckets", "List the S3 buckets"))
        .arg(switch("list-functions", "List the Lambda functions"))
        .arg(switch("keys", "List the keys of the bucket given with -bucket"))
        .arg(
            Arg::new("verbose")
            .help("Verbosity level")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
        )
}
