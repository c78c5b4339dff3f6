//! Steam deal notifier.
//!
//! One-shot bot that fetches the USD/INR exchange rate and the current Steam
//! deal listing, then delivers the formatted report to a Telegram chat.

mod config;

use config::Config;
use dealwatch_alerts::{
    format_deals_report, split_message, TelegramBot, MAX_MESSAGE_LEN, NO_OFFERS_MESSAGE,
};
use dealwatch_core::{Deal, ExchangeRate};
use dealwatch_feeds::{DealsClient, ExchangeRateClient};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum RunError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("feed error: {0}")]
    Feed(#[from] dealwatch_feeds::FeedError),
    #[error("delivery error: {0}")]
    Telegram(#[from] dealwatch_alerts::TelegramError),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Build the ordered message bodies for one run.
///
/// An empty listing becomes exactly one fixed message; otherwise the report
/// is formatted and chunked to the Telegram size limit.
fn build_messages(rate: ExchangeRate, deals: &[Deal]) -> Vec<String> {
    if deals.is_empty() {
        return vec![NO_OFFERS_MESSAGE.to_string()];
    }
    let report = format_deals_report(rate, deals);
    split_message(&report, MAX_MESSAGE_LEN)
}

async fn run(config: Config) -> Result<(), RunError> {
    let rate = match ExchangeRateClient::new()?.usd_to_inr().await {
        Ok(rate) => rate,
        Err(e) => {
            error!("Failed to fetch exchange rate: {}", e);
            return Ok(());
        }
    };
    info!(rate = rate.0, "USD/INR exchange rate");

    let deals = match DealsClient::new()?.steam_deals().await {
        Ok(deals) => deals,
        Err(e) => {
            warn!("Failed to fetch Steam deals: {}", e);
            Vec::new()
        }
    };
    info!(count = deals.len(), "Fetched Steam deals");

    let bot = TelegramBot::new(&config.bot_token, &config.chat_id)?;
    let messages = build_messages(rate, &deals);
    let total = messages.len();
    for (i, message) in messages.iter().enumerate() {
        bot.send(message).await?;
        info!(chunk = i + 1, total, "Report chunk sent");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), RunError> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_logging();

    info!("Steam deal notifier starting");
    let config = Config::from_env()?;
    run(config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn deal(title: &str) -> Deal {
        Deal {
            title: title.to_string(),
            sale_price: 9.99,
            normal_price: 19.99,
            deal_id: "123".to_string(),
        }
    }

    #[test]
    fn test_empty_listing_sends_single_fixed_message() {
        let messages = build_messages(ExchangeRate(83.0), &[]);
        assert_eq!(messages, vec![NO_OFFERS_MESSAGE.to_string()]);
    }

    #[test]
    fn test_report_starts_with_header() {
        let messages = build_messages(ExchangeRate(83.0), &[deal("Game A")]);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("🔥 Steam Deals Alert! 🔥"));
        assert!(messages[0].contains("₹829.17"));
    }

    #[test]
    fn test_long_report_is_chunked_in_order() {
        let deals: Vec<Deal> = (0..200).map(|i| deal(&format!("Game {i:04}"))).collect();
        let messages = build_messages(ExchangeRate(83.0), &deals);

        assert!(messages.len() > 1);
        for message in &messages {
            assert!(message.chars().count() <= MAX_MESSAGE_LEN);
        }
        // Concatenation reproduces the full report, deals in input order.
        let rejoined = messages.concat();
        let first = rejoined.find("Game 0000").unwrap();
        let last = rejoined.find("Game 0199").unwrap();
        assert!(first < last);
    }
}
