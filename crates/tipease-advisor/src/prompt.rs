//! Instruction the text-generation backend is given for every request.

use tipease_core::advisory::AdvisoryRequest;

/// Placeholders: `{tipAmount}`, `{peopleCount}`.
pub const FAIR_SPLIT_TEMPLATE: &str = "We need to split a tip of {tipAmount} among {peopleCount} people. \
Suggest a fair way to split the tip, considering it may not divide evenly. \
The suggestion should include how much each person should pay, and who should pay the extra amount if necessary, with reasoning. \
Make sure the suggested amounts add up to the tip amount.";

/// Fills the template, tip as a two-place decimal without a currency sign.
pub fn render_instruction(request: &AdvisoryRequest) -> String {
    FAIR_SPLIT_TEMPLATE
        .replace("{tipAmount}", &format!("{:.2}", request.tip_amount().as_decimal()))
        .replace("{peopleCount}", &request.people_count().to_string())
}
