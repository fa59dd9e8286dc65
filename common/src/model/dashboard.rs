use crate::model::installation::Installation;
use crate::model::NOT_AVAILABLE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub value: u64,
    pub is_positive: bool,
}

/// One card of the dashboard summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: StatValue,
    pub description: String,
    pub icon: String,
    pub trend: Trend,
}

impl StatCard {
    fn new(title: &str, value: StatValue, description: &str, icon: &str, trend: Trend) -> Self {
        Self {
            title: title.to_string(),
            value,
            description: description.to_string(),
            icon: icon.to_string(),
            trend,
        }
    }
}

/// The fixed set of dashboard cards, derived from the number of installations.
///
/// Every installation counts as active; replacements and efficiency are not tracked yet and
/// report constant values.
pub fn dashboard_stats(installation_count: u64) -> Vec<StatCard> {
    vec![
        StatCard::new(
            "Total Parts",
            StatValue::Count(installation_count),
            "All tracked components",
            "Package",
            Trend {
                value: installation_count,
                is_positive: true,
            },
        ),
        StatCard::new(
            "Active Installations",
            StatValue::Count(installation_count),
            "Currently installed",
            "Wrench",
            Trend {
                value: installation_count,
                is_positive: true,
            },
        ),
        StatCard::new(
            "Pending Replacements",
            StatValue::Count(0),
            "Require attention",
            "AlertTriangle",
            Trend {
                value: 0,
                is_positive: false,
            },
        ),
        StatCard::new(
            "System Efficiency",
            StatValue::Text("100%".to_string()),
            "Overall performance",
            "TrendingUp",
            Trend {
                value: 0,
                is_positive: true,
            },
        ),
    ]
}

/// Entry of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub action: String,
    pub details: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Activity {
    pub fn installed(installation: &Installation) -> Self {
        let details = &installation.details;
        Self {
            id: installation.id,
            action: "Part Installed".to_string(),
            details: format!(
                "{} ({}) installed at {}",
                details.part_name.as_deref().unwrap_or("Unknown Part"),
                installation.uid,
                details.address.as_deref().unwrap_or(NOT_AVAILABLE),
            ),
            timestamp: installation
                .timestamp
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            kind: "install".to_string(),
        }
    }
}
