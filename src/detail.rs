use chromiumoxide::Page;

use crate::{
    browser::find_value_near_label,
    records::{CreatorDetail, CreatorStub},
    Result,
};

const LABEL_MINUTES: &str = "Minutes purchased";
const LABEL_PRICE: &str = "Price per minute";
const LABEL_MARKET_CAP: &str = "Market Cap";

/// Enriches a stub from its loaded creator page. Each attribute is read
/// from the text block next to its label; a label that is missing or holds
/// an unparseable value resolves to `0`. Identity fields are carried over
/// from the stub untouched.
pub async fn extract_detail(page: &Page, stub: &CreatorStub) -> Result<CreatorDetail> {
    let minutes = find_value_near_label(page, LABEL_MINUTES).await?;
    let price = find_value_near_label(page, LABEL_PRICE).await?;
    let market_cap = find_value_near_label(page, LABEL_MARKET_CAP).await?;

    Ok(CreatorDetail::from_stub(
        stub,
        parse_minutes(minutes.as_deref()),
        parse_price(price.as_deref()),
        parse_market_cap(market_cap.as_deref()),
    ))
}

/// Base-10 integer from the leading digits of the raw text.
fn parse_minutes(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else { return 0 };
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Float from the raw text with a leading currency symbol stripped.
fn parse_price(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    parse_float_prefix(raw.trim().trim_start_matches('$').trim_start())
}

/// Like [`parse_price`] but also drops thousands separators first.
fn parse_market_cap(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    parse_float_prefix(cleaned.trim_start())
}

fn parse_float_prefix(text: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for c in text.chars() {
        match c {
            '0'..='9' => end += 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    text[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_parse_leading_digits() {
        assert_eq!(parse_minutes(Some("350")), 350);
        assert_eq!(parse_minutes(Some("  1200 minutes ")), 1200);
    }

    #[test]
    fn unparseable_minutes_default_to_zero() {
        assert_eq!(parse_minutes(Some("n/a")), 0);
        assert_eq!(parse_minutes(None), 0);
    }

    #[test]
    fn price_strips_the_currency_symbol() {
        assert_eq!(parse_price(Some("$4.50")), 4.5);
        assert_eq!(parse_price(Some("4.5")), 4.5);
        assert_eq!(parse_price(Some("$ 2.25 / min")), 2.25);
    }

    #[test]
    fn missing_price_label_resolves_to_zero() {
        assert_eq!(parse_price(None), 0.0);
        assert_eq!(parse_price(Some("free")), 0.0);
    }

    #[test]
    fn market_cap_drops_thousands_separators() {
        assert_eq!(parse_market_cap(Some("$1,234,567.89")), 1_234_567.89);
        assert_eq!(parse_market_cap(Some("$500")), 500.0);
        assert_eq!(parse_market_cap(None), 0.0);
    }
}
