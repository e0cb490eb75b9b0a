//! # Terminal Rendering
//!
//! Currency formatting and the text blocks printed by every command.
//!
//! ```text
//! Bill:          $1,234.50
//! Tip (15%):       $185.18
//! Total:         $1,419.68
//! Each of 4:       $354.92
//! ```

use std::fmt::Write as _;

use tipease_core::money::Money;
use tipease_core::session::AdvisoryState;
use tipease_core::split::{BillInput, SplitResult};

/// Formats whole cents as US currency: `$1,234.50`, `-$0.50`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
}

pub fn format_currency(amount: Money) -> String {
    format_cents(amount.cents())
}

/// Formats a decimal share, rounded half away from zero to the cent.
pub fn format_share(amount: f64) -> String {
    format_cents((amount * 100.0).round() as i64)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Tip, total and (for more than one person) each share.
pub fn render_split(input: &BillInput, split: &SplitResult) -> String {
    let mut rows = vec![
        ("Bill:".to_string(), format_currency(input.bill)),
        (format!("Tip ({}):", input.tip_rate), format_currency(split.tip_amount)),
        ("Total:".to_string(), format_currency(split.total_amount)),
    ];
    if input.people > 1 {
        rows.push((
            format!("Each of {}:", input.people),
            format_share(split.per_person_amount),
        ));
    }

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(
            out,
            "{:<lw$}  {:>vw$}",
            label,
            value,
            lw = label_width,
            vw = value_width
        );
    }

    if split.is_uneven {
        let _ = writeln!(
            out,
            "The {} tip does not split evenly among {} people.",
            format_currency(split.tip_amount),
            input.people
        );
    }
    out
}

/// One-line view of the advisory state.
pub fn render_advisory(state: &AdvisoryState) -> String {
    match state {
        AdvisoryState::Idle => "No suggestion requested.".to_string(),
        AdvisoryState::Requesting { .. } => "Working on a fair-split suggestion...".to_string(),
        AdvisoryState::Succeeded { text } | AdvisoryState::Failed { text } => {
            format!("Suggestion: {}", text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipease_core::types::TipRate;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(123_450), "$1,234.50");
        assert_eq!(format_cents(100_000_000), "$1,000,000.00");
        assert_eq!(format_cents(-50), "-$0.50");
        assert_eq!(format_cents(-123_456), "-$1,234.56");
    }

    #[test]
    fn test_format_share_rounds() {
        assert_eq!(format_share(14.375), "$14.38");
        assert_eq!(format_share(19.166_666), "$19.17");
        assert_eq!(format_share(0.0), "$0.00");
    }

    #[test]
    fn test_render_uneven_split() {
        let input = BillInput::new(Money::from_cents(5000), TipRate::from_percent(15), 4);
        let text = render_split(&input, &input.split());

        assert!(text.contains("Tip (15%):"));
        assert!(text.contains("$7.50"));
        assert!(text.contains("$57.50"));
        assert!(text.contains("Each of 4:"));
        assert!(text.contains("$14.38"));
        assert!(text.contains("does not split evenly among 4 people"));
    }

    #[test]
    fn test_render_single_person_has_no_share() {
        let input = BillInput::new(Money::from_cents(5000), TipRate::from_percent(15), 1);
        let text = render_split(&input, &input.split());
        assert!(!text.contains("Each of"));
        assert!(!text.contains("evenly"));
    }

    #[test]
    fn test_render_advisory() {
        assert_eq!(
            render_advisory(&AdvisoryState::Failed {
                text: "Sorry".into()
            }),
            "Suggestion: Sorry"
        );
        assert_eq!(render_advisory(&AdvisoryState::Idle), "No suggestion requested.");
    }
}
