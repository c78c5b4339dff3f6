//! Deal report composition and chunking.

use dealwatch_core::{Deal, ExchangeRate};

/// Header line of the deals report.
const HEADER: &str = "🔥 Steam Deals Alert! 🔥\n\n";

/// Sent instead of a report when the deals listing comes back empty.
pub const NO_OFFERS_MESSAGE: &str = "No offers found at the moment!";

/// Format the full deals report.
///
/// Emits the header, then one three-line block per deal in input order:
/// title, prices converted to INR at `rate`, and the storefront link.
pub fn format_deals_report(rate: ExchangeRate, deals: &[Deal]) -> String {
    let mut report = String::from(HEADER);

    for deal in deals {
        let sale = rate.to_inr(deal.sale_price);
        let normal = rate.to_inr(deal.normal_price);

        report.push_str(&format!("🎮 {}\n", deal.title));
        report.push_str(&format!("💰 Sale Price: ₹{:.2} (was ₹{:.2})\n", sale, normal));
        report.push_str(&format!("🔗 {}\n\n", deal.store_url()));
    }

    report
}

/// Split `text` into ordered chunks of at most `max_chars` characters.
///
/// Chunks never overlap and never split a character; concatenating them
/// reproduces the input exactly. Empty input yields no chunks.
pub fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        if count == max_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(ch);
        count += 1;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
