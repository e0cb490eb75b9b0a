//! Local suggestion generator used when no endpoint is configured.

use async_trait::async_trait;

use tipease_core::advisory::AdvisoryRequest;
use tipease_core::money::Money;

use super::SuggestionBackend;
use crate::error::AdvisorResult;

/// Writes a fair-split suggestion from whole-cent shares.
///
/// Everyone pays the base share and the first `remainder` people pay one
/// extra cent each.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBackend;

impl OfflineBackend {
    pub fn new() -> Self {
        OfflineBackend
    }

    fn compose(request: &AdvisoryRequest) -> String {
        let tip = request.tip_amount();
        let people = request.people_count();
        let (base, extra) = tip.split_among(people);
        let extra_count = extra as u32;
        let base_count = people - extra_count;
        let higher = base + Money::from_cents(1);

        let payers = if extra_count == 1 {
            "Person 1 pays".to_string()
        } else {
            format!("People 1 to {} each pay", extra_count)
        };
        let cents = if extra == 1 { "cent" } else { "cents" };

        let mut text = format!(
            "A {} tip does not split evenly among {} people: {} each leaves {} {} over. ",
            tip, people, base, extra, cents
        );
        text.push_str(&format!(
            "{} {} and everyone else pays {}. ",
            payers, higher, base
        ));
        text.push_str(&format!(
            "Nobody pays more than one cent above anyone else, and {} x {} + {} x {} = {}. ",
            extra_count, higher, base_count, base, tip
        ));
        text.push_str("Rotate who covers the extra cent next time.");
        text
    }
}

#[async_trait]
impl SuggestionBackend for OfflineBackend {
    async fn suggest(&self, request: &AdvisoryRequest) -> AdvisorResult<String> {
        Ok(Self::compose(request))
    }
}
