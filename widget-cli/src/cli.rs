use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use widget_core::{
    Config, SearchFormController, View, WeatherProvider, provider_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather for a city")]
pub struct Cli {
    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key in the config file.
    Configure,

    /// Show the current weather for a location once.
    Show {
        /// City or place name.
        location: String,
    },

    /// Prompt for locations until Esc or Ctrl-C.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { location } => {
                let provider = load_provider()?;
                let mut controller = SearchFormController::default();
                controller.set_input(location);
                search_and_print(&mut controller, &provider).await;
                Ok(())
            }
            Command::Interactive => {
                let provider = load_provider()?;
                let mut controller = SearchFormController::default();
                interactive(&mut controller, &provider).await
            }
        }
    }
}

fn load_provider() -> anyhow::Result<impl WeatherProvider> {
    let config = Config::load()?;
    Ok(provider_from_config(&config))
}

fn configure() -> anyhow::Result<()> {
    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    let mut config = Config::load()?;
    config.set_api_key(api_key);
    let path = config.save()?;

    println!("Saved API key to {}", path.display());
    Ok(())
}

async fn interactive<P>(controller: &mut SearchFormController, provider: &P) -> anyhow::Result<()>
where
    P: WeatherProvider + ?Sized,
{
    loop {
        let input = Text::new("Enter a city name")
            .with_initial_value(&controller.state().input_text)
            .prompt();

        match input {
            Ok(text) => {
                controller.set_input(text);
                search_and_print(controller, provider).await;
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read location"),
        }
    }
}

async fn search_and_print<P>(controller: &mut SearchFormController, provider: &P)
where
    P: WeatherProvider + ?Sized,
{
    if let Some(pending) = controller.submit() {
        eprintln!("{}", View::render(controller.state()).button_label);
        let completion = pending.run(provider).await;
        controller.complete(completion);
    }

    for line in View::render(controller.state()).lines {
        println!("{line}");
    }
}
