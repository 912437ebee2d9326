mod app;
mod ingest;
mod model;
mod ui;
mod util;

use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // voltwatch [FEED.json] [all|high|medium|resolved]
    let mut args = std::env::args().skip(1);
    let feed = args.next().map(PathBuf::from);
    let filter = args.next().map(|s| app::AlertFilter::parse(&s));

    app::run(feed, filter)
}
