//! `tipease advise`

use std::io::Write;

use tipease_advisor::{render_instruction, FairSplitAdvisor};
use tipease_core::advisory::{evaluate, AdvisoryDecision};
use tipease_core::input::{normalize_bill, normalize_people};

use crate::cli::AdviseArgs;
use crate::error::CliResult;

pub async fn run<W: Write>(
    args: &AdviseArgs,
    advisor: &FairSplitAdvisor,
    out: &mut W,
) -> CliResult<()> {
    // Tip text follows the bill field's rules
    let tip = normalize_bill(&args.tip_amount);
    let people = normalize_people(&args.people);

    if args.show_prompt {
        if let AdvisoryDecision::Request(request) = evaluate(tip, people) {
            writeln!(out, "Prompt: {}", render_instruction(&request))?;
            writeln!(out)?;
        }
    }

    let result = advisor.request_fair_split_advisory(tip, people).await;
    writeln!(out, "{}", result.suggestion_text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tipease_advisor::OfflineBackend;

    async fn run_to_string(tip: &str, people: &str, show_prompt: bool) -> String {
        let advisor = FairSplitAdvisor::new(Arc::new(OfflineBackend::new()));
        let args = AdviseArgs {
            tip_amount: tip.to_string(),
            people: people.to_string(),
            show_prompt,
        };
        let mut out = Vec::new();
        run(&args, &advisor, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_even_tip_gets_fixed_message() {
        let text = run_to_string("7.50", "3", true).await;
        assert_eq!(
            text.trim(),
            "The tip amount divides evenly, no special suggestion needed."
        );
    }

    #[tokio::test]
    async fn test_single_person() {
        let text = run_to_string("7.51", "1", false).await;
        assert_eq!(
            text.trim(),
            "Splitting is only needed for more than one person."
        );
    }

    #[tokio::test]
    async fn test_uneven_tip_with_prompt() {
        let text = run_to_string("7.50", "4", true).await;
        assert!(text.starts_with("Prompt: We need to split a tip of 7.50 among 4 people."));
        assert!(text.contains("$1.88"));
    }
}
