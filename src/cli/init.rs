//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::{AmadeusClient, AuthApi, Credentials};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the API key and secret, verifies them against the token
/// endpoint, then saves them. Other settings already in the config file are
/// kept.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to farescout!".bold().green());
    println!("Let's set up your flight-search API credentials.\n");

    let mut config = Config::load_or_default(opts.config_ref())?;
    let theme = ColorfulTheme::default();

    let mut client_id_prompt =
        Input::<String>::with_theme(&theme).with_prompt("API key (client ID)");
    if let Some(existing) = config.client_id.clone() {
        client_id_prompt = client_id_prompt.default(existing);
    }
    let client_id = client_id_prompt.interact_text()?;

    let client_secret: String = Password::with_theme(&theme)
        .with_prompt("API secret (client secret)")
        .interact()?;

    println!("\n{}", "Authenticating...".cyan());
    let base_url = opts
        .api_host_ref()
        .map(String::from)
        .or_else(|| config.base_url.clone());
    let client = AmadeusClient::with_base_url(
        Credentials::new(client_id.clone(), client_secret.clone()),
        base_url,
    )?;
    let token = client.authenticate().await?;
    println!(
        "{} Authentication successful (token valid until {})",
        "✓".green(),
        token.expires_at.format("%H:%M UTC")
    );

    config.client_id = Some(client_id);
    config.client_secret = Some(client_secret);
    if opts.api_host.is_some() {
        config.base_url = opts.api_host.clone();
    }
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "farescout status".cyan());
    println!("  {} - Find the top 3 flights", "farescout search".cyan());

    Ok(())
}
