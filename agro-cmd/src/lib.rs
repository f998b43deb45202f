//! Command implementations for the crop advisory CLI.
//!
//! Provides subcommands for submitting a leaf image for advice and for
//! inspecting the remembered city.

use clap::Subcommand;
use std::path::PathBuf;

pub mod render;
pub mod store;
pub mod submit;

#[derive(Subcommand)]
pub enum Command {
    /// Submit a leaf image and city, and print weather, diagnosis and advice
    Submit {
        /// Path to the leaf image (jpg, png, gif, webp, bmp, tiff)
        #[arg(short = 'i', long)]
        image: PathBuf,

        /// City to fetch weather for (defaults to the last submitted city)
        #[arg(short = 'c', long)]
        city: Option<String>,

        /// Backend root URL
        #[arg(short = 'e', long, env = "AGRO_ENDPOINT", default_value = agro_advice::config::DEFAULT_BASE_URL)]
        endpoint: String,

        /// Directory holding the remembered city
        #[arg(long, env = "AGRO_STATE_DIR")]
        state_dir: Option<PathBuf>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 60)]
        timeout: u64,

        /// Append the returned weather reading to this CSV file
        #[arg(long)]
        weather_log: Option<PathBuf>,
    },

    /// Print the remembered city
    City {
        /// Directory holding the remembered city
        #[arg(long, env = "AGRO_STATE_DIR")]
        state_dir: Option<PathBuf>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Submit {
            image,
            city,
            endpoint,
            state_dir,
            timeout,
            weather_log,
        } => {
            let options = submit::SubmitOptions {
                image,
                city,
                endpoint,
                state_dir: store::resolve_state_dir(state_dir)?,
                timeout: std::time::Duration::from_secs(timeout),
                weather_log,
            };
            submit::run_submit(options).await
        }
        Command::City { state_dir } => {
            use agro_advice::CityStore;

            let store = store::FileCityStore::in_dir(store::resolve_state_dir(state_dir)?);
            if let Some(city) = store.load() {
                println!("{}", city);
            }
            Ok(())
        }
    }
}
