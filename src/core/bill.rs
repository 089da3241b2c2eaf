//! Bill entity and display formatting

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Expected storage format of [`Bill::date`]
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Review status of a bill
///
/// Statuses the backend does not know about are kept verbatim in
/// [`BillStatus::Unknown`] so they survive a round-trip and render as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
    Unknown(String),
}

impl BillStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
            BillStatus::Unknown(raw) => raw,
        }
    }

    /// Label shown to the employee in the bills table
    pub fn label(&self) -> &str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refused",
            BillStatus::Unknown(raw) => raw,
        }
    }
}

impl From<String> for BillStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => BillStatus::Pending,
            "accepted" => BillStatus::Accepted,
            "refused" => BillStatus::Refused,
            _ => BillStatus::Unknown(value),
        }
    }
}

impl From<BillStatus> for String {
    fn from(status: BillStatus) -> Self {
        match status {
            BillStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An employee expense-reimbursement record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub status: BillStatus,
    #[serde(rename = "type")]
    pub bill_type: String,

    /// Usually `YYYY-MM-DD`, but stored and rendered as received
    pub date: String,
    pub amount: f64,

    #[serde(default, deserialize_with = "lenient_number")]
    pub vat: Option<f64>,
    #[serde(default)]
    pub pct: Option<f64>,
    #[serde(default)]
    pub commentary: String,
    pub email: String,
    pub file_url: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub comment_admin: Option<String>,
}

impl Bill {
    /// Parse the stored date, `None` when it is not a valid ISO date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, ISO_DATE_FORMAT).ok()
    }
}

/// Latest-first comparison on the raw date text
///
/// ISO dates order lexicographically, so no parsing is needed and corrupted
/// values still get a stable position.
pub fn anti_chrono(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

/// Sort bills latest-first on their raw date
pub fn sort_by_date_desc(bills: &mut [Bill]) {
    bills.sort_by(|a, b| anti_chrono(&a.date, &b.date));
}

const FRENCH_SHORT_MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format an ISO date the way the bills table shows it (`2004-04-04` → `4 Avr. 04`)
///
/// Returns `None` when the input is not a valid ISO date; callers decide
/// whether to fall back to the raw value.
pub fn format_date(raw: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).ok()?;
    let month = FRENCH_SHORT_MONTHS[date.month0() as usize];
    Some(format!(
        "{} {}. {:02}",
        date.day(),
        month,
        date.year().rem_euclid(100)
    ))
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
        Null,
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(Some(n)),
        NumberOrText::Null => Ok(None),
        NumberOrText::Text(text) if text.trim().is_empty() => Ok(None),
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
