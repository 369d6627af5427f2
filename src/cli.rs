use crate::config::{
    DEFAULT_BASE_URL, FetcherConfig, ImageSize, MAX_SCALE, MIN_SCALE, MapType,
};
use crate::logging::Verbosity;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Fetch one static map image and save it to disk.
#[derive(Debug, Parser)]
#[command(name = "staticmap", version, about)]
pub struct Cli {
    /// Provider API key
    #[arg(long, env = "STATICMAP_API_KEY", hide_env_values = true)]
    pub key: String,

    /// Centre latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Centre longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Zoom level (0 = whole world)
    #[arg(long, short, default_value_t = 16)]
    pub zoom: u8,

    /// Image size as WIDTHxHEIGHT
    #[arg(long, default_value_t = ImageSize::default())]
    pub size: ImageSize,

    #[arg(long, value_enum, default_value_t = MapType::default())]
    pub map_type: MapType,

    /// Pixel density multiplier
    #[arg(
        long,
        default_value_t = MIN_SCALE,
        value_parser = clap::value_parser!(u8).range(MIN_SCALE as i64..=MAX_SCALE as i64)
    )]
    pub scale: u8,

    /// Where to write the image; format follows the extension
    #[arg(long, short, default_value = "map.png")]
    pub output: PathBuf,

    /// Endpoint to request
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            base_url: self.base_url.clone(),
            size: self.size,
            map_type: self.map_type,
            scale: self.scale,
            timeout: Duration::from_secs(self.timeout),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal_arguments() {
        let cli = Cli::try_parse_from([
            "staticmap", "--key", "k", "--lat", "38.44", "--lon", "-105.23",
        ])
        .unwrap();
        assert_eq!(cli.lon, -105.23);
        assert_eq!(cli.zoom, 16);
        assert_eq!(cli.output, PathBuf::from("map.png"));

        let config = cli.fetcher_config();
        assert_eq!(config.size, ImageSize::new(400, 400));
        assert_eq!(config.map_type, MapType::Satellite);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(cli.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_parse_full_arguments() {
        let cli = Cli::try_parse_from([
            "staticmap", "--key", "k", "--lat", "-33.9", "--lon", "18.4", "-z", "12",
            "--size", "640x480", "--map-type", "hybrid", "--scale", "2", "-o", "cape.jpg",
            "--json", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.lat, -33.9);
        assert_eq!(cli.size, ImageSize::new(640, 480));
        assert_eq!(cli.map_type, MapType::Hybrid);
        assert_eq!(cli.scale, 2);
        assert!(cli.json);
        assert_eq!(cli.verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_rejects_zero_scale() {
        let result = Cli::try_parse_from([
            "staticmap", "--key", "k", "--lat", "0", "--lon", "0", "--scale", "0",
        ]);
        assert!(result.is_err());
    }
}
