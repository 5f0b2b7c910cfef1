use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use weather_work_suggestions::config::DEFAULT_OPENWEATHER_BASE_URL;
use weather_work_suggestions::location::{
    ControllerError, ControllerState, DisambiguationController, GadgetConfigStore,
    OpenWeatherGeocoder,
};

#[derive(Parser)]
#[command(name = "configure-location")]
#[command(about = "Pick the location the weather gadget reports on", long_about = None)]
struct Cli {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY")]
    api_key: String,

    /// Provider base URL
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = DEFAULT_OPENWEATHER_BASE_URL)]
    base_url: String,

    /// Where the chosen location is written
    #[arg(long, env = "GADGET_CONFIG_PATH", default_value = "gadget_config.json")]
    config_path: String,

    /// Maximum number of candidates to ask the geocoder for
    #[arg(long, env = "GEOCODING_RESULT_LIMIT", default_value = "5")]
    limit: u32,

    /// City to look up first (prompted for when omitted)
    #[arg(long)]
    city: Option<String>,

    /// Country to look up first (prompted for when omitted)
    #[arg(long)]
    country: Option<String>,
}

type Input = Lines<BufReader<Stdin>>;

async fn prompt(input: &mut Input, label: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("{label}: ").as_bytes()).await?;
    stdout.flush().await?;

    match input.next_line().await? {
        Some(line) => Ok(line.trim().to_string()),
        None => Err("input closed before location setup finished".into()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let geocoder = OpenWeatherGeocoder::new(cli.base_url, cli.api_key, cli.limit);
    let store = GadgetConfigStore::new(&cli.config_path);
    let mut controller = DisambiguationController::new(geocoder, store);
    let mut input: Input = BufReader::new(tokio::io::stdin()).lines();

    let mut city = cli.city.unwrap_or_default();
    let mut country = cli.country.unwrap_or_default();

    loop {
        match controller.state() {
            ControllerState::Idle | ControllerState::NoMatch | ControllerState::Querying(_) => {
                if city.is_empty() {
                    city = prompt(&mut input, "City").await?;
                }
                if country.is_empty() {
                    country = prompt(&mut input, "Country").await?;
                }

                match controller.on_input_changed(&city, &country).await {
                    Ok(()) if *controller.state() == ControllerState::NoMatch => {
                        println!("No locations found for {city}, {country}. Try again.");
                        city.clear();
                        country.clear();
                        controller.on_input_changed(&city, &country).await?;
                    }
                    Ok(()) if *controller.state() == ControllerState::Idle => {
                        println!("Already searched for {city}, {country}. Enter a different location.");
                        city.clear();
                        country.clear();
                    }
                    Ok(()) => {}
                    Err(ControllerError::Provider(e)) => {
                        error!("Location lookup failed: {}", e);
                        println!("Location lookup unavailable ({e}). Try again.");
                        city.clear();
                        country.clear();
                        controller.on_input_changed(&city, &country).await?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            ControllerState::Choosing { .. } => {
                println!("Select your location:");
                for option in controller.options() {
                    println!("  [{}] {}", option.index + 1, option.label);
                }

                let answer = prompt(&mut input, "Location number").await?;
                // Options are shown 1-based; anything unparseable leaves the selection empty
                if let Some(index) = answer.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                    if let Err(e) = controller.select(index) {
                        println!("{e}");
                        continue;
                    }
                }

                match controller.submit().await {
                    Ok(candidate) => {
                        info!("Configured {}", candidate.label());
                        println!(
                            "Saved {} ({:.4}, {:.4}) to {}",
                            candidate.label(),
                            candidate.latitude,
                            candidate.longitude,
                            cli.config_path
                        );
                    }
                    Err(ControllerError::Validation { message, .. }) => {
                        println!("{message}");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            ControllerState::Finalized(_) => return Ok(()),
        }
    }
}
