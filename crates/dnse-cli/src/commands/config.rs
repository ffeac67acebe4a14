/*
[INPUT]:  Config subcommand arguments and interactive prompts
[OUTPUT]: Persisted credentials and masked config views on stdout
[POS]:    Command layer - configuration group
[UPDATE]: When adding configuration options
*/

use anyhow::Result;
use clap::Subcommand;
use dialoguer::{Input, Password};

use crate::config::{self, CliConfig};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set API credentials (saved to ~/.dnse-cli/config.json)
    Set {
        /// API key; prompted for interactively when omitted
        #[arg(long)]
        key: Option<String>,
        /// API secret; prompted for interactively when omitted
        #[arg(long)]
        secret: Option<String>,
        /// API base URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Show current configuration
    Get,
    /// Clear API credentials from config
    Clear,
}

impl ConfigCommands {
    pub fn run(self) -> Result<()> {
        match self {
            ConfigCommands::Set { key, secret, url } => set(key, secret, url),
            ConfigCommands::Get => get(),
            ConfigCommands::Clear => clear(),
        }
    }
}

fn set(key: Option<String>, secret: Option<String>, url: Option<String>) -> Result<()> {
    let mut config = config::load();

    config.api_key = Some(match key {
        Some(key) if !key.is_empty() => key,
        _ => Input::new().with_prompt("Enter API Key").interact_text()?,
    });
    config.api_secret = Some(match secret {
        Some(secret) if !secret.is_empty() => secret,
        _ => Password::new().with_prompt("Enter API Secret").interact()?,
    });
    if let Some(url) = url {
        config.base_url = url;
    }

    let path = config::store(&config)?;
    println!("Configuration saved to: {}", path.display());
    println!("Current config:");
    print_masked(&config);
    Ok(())
}

fn get() -> Result<()> {
    let config = config::load();
    println!("Current configuration:");
    print_masked(&config);
    if let Some(path) = config::config_file() {
        println!("\nConfig file: {}", path.display());
    }
    Ok(())
}

fn clear() -> Result<()> {
    match config::clear()? {
        Some(path) => {
            println!("Configuration cleared");
            println!("Config file: {}", path.display());
        }
        None => println!("No configuration file found"),
    }
    Ok(())
}

fn print_masked(config: &CliConfig) {
    let masked = serde_json::json!({
        "apiKey": mask_key(config.api_key.as_deref()),
        "apiSecret": mask_key(config.api_secret.as_deref()),
        "baseUrl": config.base_url,
    });
    println!("{}", serde_json::to_string_pretty(&masked).unwrap_or_default());
}

fn mask_key(key: Option<&str>) -> String {
    let Some(key) = key else {
        return "(not set)".to_string();
    };
    // Counted in chars so stored keys with multi-byte text never split a
    // codepoint.
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}{}", head, "*".repeat(chars.len() - 8), tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key(None), "(not set)");
        assert_eq!(mask_key(Some("short")), "*****");
        assert_eq!(mask_key(Some("abcd1234wxyz")), "abcd****wxyz");
    }

    #[test]
    fn test_mask_key_handles_multibyte_text() {
        assert_eq!(mask_key(Some("khóa-bí-mật-123")), "khóa*******-123");
        assert_eq!(mask_key(Some("mật-khẩu")), "********");
    }
}
