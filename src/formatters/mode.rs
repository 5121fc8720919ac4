use serde::Serialize;

use crate::models::Breakdown;

/// What the graph shows for a given set of inputs. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// A bot response is still being generated.
    Pending,
    /// Nothing was used and the message came from a fixed template.
    HardcodedResponse,
    /// Nothing has been used in this session so far.
    NoUsageYet,
    Chart,
}

impl DisplayMode {
    pub fn select(loading: bool, breakdown: &Breakdown, prompt_view: bool) -> Self {
        if loading {
            DisplayMode::Pending
        } else if breakdown.grand_total() > 0 {
            DisplayMode::Chart
        } else if prompt_view {
            DisplayMode::HardcodedResponse
        } else {
            DisplayMode::NoUsageYet
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            DisplayMode::Pending => {
                Some("Final token usage will be available once bot response is generated.")
            }
            DisplayMode::HardcodedResponse => {
                Some("No tokens were used. This is a hardcoded response.")
            }
            DisplayMode::NoUsageYet => Some("No tokens have been used in this session yet."),
            DisplayMode::Chart => None,
        }
    }
}
