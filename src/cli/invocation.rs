use clap::ArgMatches;

/// The parsed flags. String flags that were not given are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub filepath: String,
    pub bucket: String,
    pub key: String,
    pub lambda: String,
    pub prefix: Option<String>,
    pub region: Option<String>,
    pub list_buckets: bool,
    pub list_functions: bool,
    pub list_keys: bool,
}

impl Invocation {
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let string = |name: &str| {
            matches
                .get_one::<String>(name)
                .map_or_else(String::new, ToString::to_string)
        };

        let switch = |name: &str| matches.get_one::<bool>(name).copied().unwrap_or(false);

        Self {
            filepath: string("filepath"),
            bucket: string("bucket"),
            key: string("key"),
            lambda: string("lambda"),
            prefix: matches.get_one::<String>("prefix").cloned(),
            region: matches.get_one::<String>("region").cloned(),
            list_buckets: switch("list-buckets"),
            list_functions: switch("list-functions"),
            list_keys: switch("keys"),
        }
    }
}
