use colored::Colorize;
use s3notify::cli::{self, actions};
use std::{io, process::exit, sync::Arc};

#[tokio::main]
async fn main() {
    let (provider, requested) = match cli::start() {
        Ok(started) => started,
        Err(e) => e.exit(),
    };

    let provider = Arc::new(provider);
    let mut stdout = io::stdout();

    if let Err(e) = actions::run(&provider, requested, &mut stdout).await {
        println!("{}", format!("{e:#}").red());
        exit(1);
    }
}
