//! # Fair-Split Wire Protocol
//!
//! JSON bodies exchanged with the text-generation backend.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  client ───► POST { "tipAmount": 7.5, "peopleCount": 4 }               │
//! │  backend ◄── 200  { "suggestion": "Two people pay $1.88, ..." }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `tipAmount` is a plain decimal number of dollars, not cents.

use serde::{Deserialize, Serialize};

use tipease_core::advisory::AdvisoryRequest;

/// Request body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairSplitInput {
    pub tip_amount: f64,
    pub people_count: u32,
}

impl From<&AdvisoryRequest> for FairSplitInput {
    fn from(request: &AdvisoryRequest) -> Self {
        FairSplitInput {
            tip_amount: request.tip_amount().as_decimal(),
            people_count: request.people_count(),
        }
    }
}

/// Response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairSplitOutput {
    pub suggestion: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tipease_core::money::Money;

    #[test]
    fn test_input_wire_shape() {
        let request = AdvisoryRequest::new(Money::from_cents(750), 4).unwrap();
        let body = serde_json::to_value(FairSplitInput::from(&request)).unwrap();
        assert_eq!(body, json!({ "tipAmount": 7.5, "peopleCount": 4 }));
    }

    #[test]
    fn test_output_requires_suggestion() {
        let ok: FairSplitOutput =
            serde_json::from_value(json!({ "suggestion": "Each pays $1.87" })).unwrap();
        assert_eq!(ok.suggestion, "Each pays $1.87");

        assert!(serde_json::from_value::<FairSplitOutput>(json!({ "text": "x" })).is_err());
        assert!(serde_json::from_value::<FairSplitOutput>(json!({ "suggestion": 3 })).is_err());
    }
}
