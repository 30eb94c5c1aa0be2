use std::cmp::Ordering;

use crate::{categories::title_from_slug, records::CreatorDetail};

const RULE: &str = "========================================";
const CREATOR_RULE: &str = "----------------------------------------";

/// Grand totals over every detail partition. Computed in one pure pass and
/// rendered into both summary blocks from the same values.
pub struct Totals {
    pub creator_count: usize,
    pub market_cap_sum: f64,
}

pub fn compute_totals(partitions: &[(String, Vec<CreatorDetail>)]) -> Totals {
    let creator_count = partitions.iter().map(|(_, creators)| creators.len()).sum();
    let market_cap_sum = partitions
        .iter()
        .flat_map(|(_, creators)| creators)
        .map(|creator| creator.market_cap)
        .sum();

    Totals {
        creator_count,
        market_cap_sum,
    }
}

/// Renders the full report: leading summary, one titled section per
/// partition (in the order provided) with creators sorted by market cap
/// descending, and a trailing summary. Stored partitions are never
/// mutated; sorting happens on a copy.
pub fn render(partitions: &[(String, Vec<CreatorDetail>)]) -> String {
    let totals = compute_totals(partitions);

    let mut out = String::new();
    push_summary(&mut out, "CREATOR MARKET REPORT", &totals);

    for (slug, creators) in partitions {
        out.push('\n');
        out.push_str(&format!("=== {} ===\n\n", title_from_slug(slug)));

        let mut by_market_cap = creators.clone();
        // Stable: creators with equal market caps keep discovery order.
        by_market_cap.sort_by(|a, b| {
            b.market_cap
                .partial_cmp(&a.market_cap)
                .unwrap_or(Ordering::Equal)
        });

        for creator in &by_market_cap {
            push_creator(&mut out, creator);
        }
    }

    out.push('\n');
    push_summary(&mut out, "SUMMARY", &totals);

    out
}

fn push_summary(out: &mut String, heading: &str, totals: &Totals) {
    out.push_str(&format!(
        "{RULE}\n{heading}\n{RULE}\nTotal creators: {}\nTotal market cap: {}\n",
        totals.creator_count,
        money(totals.market_cap_sum),
    ));
}

fn push_creator(out: &mut String, creator: &CreatorDetail) {
    out.push_str(&format!(
        "{}\n{}\nMinutes purchased: {}\nPrice per minute: {}\nMarket cap: {}\n{CREATOR_RULE}\n",
        creator.name,
        creator.url,
        minutes(creator.minutes_purchased),
        price(creator.price_per_minute),
        market_cap(creator.market_cap),
    ));
}

// A `0` is the defaulted "nothing on the page" case and renders as N/A.

fn minutes(value: u64) -> String {
    if value == 0 {
        "N/A".to_string()
    } else {
        group_digits(value)
    }
}

fn price(value: f64) -> String {
    if value == 0.0 {
        "N/A".to_string()
    } else {
        format!("${value:.2}")
    }
}

fn market_cap(value: f64) -> String {
    if value == 0.0 {
        "N/A".to_string()
    } else {
        money(value)
    }
}

fn money(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    format!("${}.{:02}", group_digits(cents / 100), cents % 100)
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{CreatorDetail, CreatorStub};

    fn creator(name: &str, market_cap: f64) -> CreatorDetail {
        let stub = CreatorStub::new(name, format!("http://127.0.0.1:3000/creator/{name}"));
        CreatorDetail::from_stub(&stub, 350, 4.5, market_cap)
    }

    #[test]
    fn creators_sort_by_market_cap_descending_ties_keep_order() {
        let partitions = vec![(
            "music".to_string(),
            vec![
                creator("alpha", 100.0),
                creator("bravo", 500.0),
                creator("charlie", 500.0),
                creator("delta", 10.0),
            ],
        )];

        let text = render(&partitions);
        let pos = |name: &str| text.find(name).unwrap();
        assert!(pos("bravo") < pos("charlie"));
        assert!(pos("charlie") < pos("alpha"));
        assert!(pos("alpha") < pos("delta"));
    }

    #[test]
    fn rendering_never_mutates_the_partitions() {
        let partitions = vec![(
            "music".to_string(),
            vec![creator("alpha", 100.0), creator("bravo", 500.0)],
        )];

        render(&partitions);
        assert_eq!(partitions[0].1[0].name, "alpha");
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let partitions = vec![
            ("fitness".to_string(), vec![creator("alpha", 250.0)]),
            ("music".to_string(), vec![creator("bravo", 500.0)]),
        ];

        assert_eq!(render(&partitions), render(&partitions));
    }

    #[test]
    fn both_summary_blocks_carry_the_same_totals() {
        let partitions = vec![
            ("fitness".to_string(), vec![creator("alpha", 250.0)]),
            ("music".to_string(), vec![creator("bravo", 500.0)]),
        ];

        let text = render(&partitions);
        assert_eq!(text.matches("Total creators: 2").count(), 2);
        assert_eq!(text.matches("Total market cap: $750.00").count(), 2);
    }

    #[test]
    fn empty_category_still_gets_a_header_and_counts_nothing() {
        let partitions = vec![
            ("fitness".to_string(), vec![]),
            ("music".to_string(), vec![creator("alpha", 100.0)]),
        ];

        let text = render(&partitions);
        assert!(text.contains("=== Fitness ==="));
        assert!(text.contains("Total creators: 1"));
        assert!(text.contains("Total market cap: $100.00"));
    }

    #[test]
    fn defaulted_attributes_render_as_not_available() {
        let stub = CreatorStub::new("ghost", "http://127.0.0.1:3000/creator/ghost".into());
        let partitions = vec![(
            "gaming".to_string(),
            vec![CreatorDetail::from_stub(&stub, 0, 0.0, 0.0)],
        )];

        let text = render(&partitions);
        assert!(text.contains("Minutes purchased: N/A"));
        assert!(text.contains("Price per minute: N/A"));
        assert!(text.contains("Market cap: N/A"));
    }

    #[test]
    fn large_values_group_thousands() {
        assert_eq!(group_digits(1_234_567), "1,234,567");
        assert_eq!(group_digits(42), "42");
        assert_eq!(money(1_234_567.89), "$1,234,567.89");
        assert_eq!(money(0.5), "$0.50");
    }
}
