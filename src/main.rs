use clap::Parser;
use staticmap::cli::Cli;
use staticmap::logging::init_logging;
use staticmap::utils::summary::{FetchSummary, print_fetch_summary};
use staticmap::{GoogleStaticMaps, MapProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let config = cli.fetcher_config();
    let fetcher = GoogleStaticMaps::with_config(cli.key.as_str(), config)?;
    let image = fetcher.download_image(cli.lat, cli.lon, cli.zoom).await?;

    image.save(&cli.output)?;
    tracing::info!(path = %cli.output.display(), "saved static map");

    let summary = FetchSummary::new(
        &image,
        cli.lat,
        cli.lon,
        cli.zoom,
        cli.size,
        cli.map_type,
        cli.scale,
        Some(cli.output.clone()),
    );
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_fetch_summary(&summary);
    }

    Ok(())
}
