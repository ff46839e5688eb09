use anyhow::Result;

use crate::config::Config;

/// Print the effective configuration with the provider key masked.
pub fn check_config(config: &Config) -> Result<()> {
    let intake = super::build_intake(config)?;
    let addresses = intake.addresses();

    println!("server:        {}:{}", config.server.host, config.server.port);
    println!("smtp:          {}:{}", config.email.smtp_host, config.email.smtp_port);
    println!("from:          {}", addresses.from);
    println!("to:            {}", addresses.to);
    match &addresses.contact_to {
        Some(contact_to) => println!("contact to:    {contact_to}"),
        None => println!("contact to:    {} (default)", addresses.to),
    }
    println!(
        "api key:       {}",
        if config.email.is_configured() {
            "set"
        } else {
            "not set"
        }
    );
    println!("dry run:       {}", config.email.dry_run);
    println!("log level:     {}", config.observability.log_level);

    if !intake.is_configured() {
        tracing::warn!("Email API key is not set, submissions will not be delivered");
    }

    Ok(())
}
