//! Field record describing one analyzed research paper.

use crate::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::io::Read;

/// Input record for one report generation call.
///
/// Every field is optional; absent fields render as placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub authors: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub year: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub citation: Option<String>,
    #[serde(alias = "notionId", deserialize_with = "lenient_text")]
    pub notion_id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub filename: Option<String>,
    #[serde(alias = "qualityAssessment", deserialize_with = "lenient_text")]
    pub quality_assessment: Option<String>,
    #[serde(alias = "genderLevel", deserialize_with = "lenient_number")]
    pub gender_level: Option<f64>,
    #[serde(alias = "genderTreatment", deserialize_with = "lenient_text")]
    pub gender_treatment: Option<String>,
    #[serde(alias = "disjunctureType", deserialize_with = "lenient_text")]
    pub disjuncture_type: Option<String>,
    #[serde(alias = "disjunctureLevel", deserialize_with = "lenient_text")]
    pub disjuncture_level: Option<String>,
    #[serde(alias = "buildingPotential", deserialize_with = "lenient_text")]
    pub building_potential: Option<String>,
    #[serde(flatten)]
    pub topics: TopicFlags,
    #[serde(flatten)]
    pub nuggets: NuggetFlags,
    #[serde(deserialize_with = "lenient_text")]
    pub synthesis: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub critical: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub prospector: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub fulltext: Option<String>,
}

/// Research topics the paper touches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicFlags {
    #[serde(rename = "topic_ai_ethics", alias = "aiEthics", deserialize_with = "lenient_bool")]
    pub ai_ethics: bool,
    #[serde(
        rename = "topic_future_of_work",
        alias = "futureOfWork",
        deserialize_with = "lenient_bool"
    )]
    pub future_of_work: bool,
    #[serde(
        rename = "topic_gender_bias",
        alias = "genderBias",
        deserialize_with = "lenient_bool"
    )]
    pub gender_bias: bool,
    #[serde(
        rename = "topic_measurement",
        alias = "measurement",
        deserialize_with = "lenient_bool"
    )]
    pub measurement: bool,
    #[serde(
        rename = "topic_performance_mgmt",
        alias = "performanceMgmt",
        deserialize_with = "lenient_bool"
    )]
    pub performance_mgmt: bool,
}

impl TopicFlags {
    /// Display labels of the active topics, in fixed order.
    pub fn active_labels(&self) -> Vec<&'static str> {
        [
            (self.ai_ethics, "AI Ethics"),
            (self.future_of_work, "Future of Work"),
            (self.gender_bias, "Gender & Bias"),
            (self.measurement, "Measurement"),
            (self.performance_mgmt, "Performance Management"),
        ]
        .into_iter()
        .filter_map(|(active, label)| active.then_some(label))
        .collect()
    }
}

/// Kinds of reusable insight ("nuggets") extracted from the paper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NuggetFlags {
    #[serde(
        rename = "nugget_conceptual",
        alias = "conceptual",
        deserialize_with = "lenient_bool"
    )]
    pub conceptual: bool,
    #[serde(
        rename = "nugget_practitioner",
        alias = "practitioner",
        deserialize_with = "lenient_bool"
    )]
    pub practitioner: bool,
    #[serde(
        rename = "nugget_builder",
        alias = "builder",
        deserialize_with = "lenient_bool"
    )]
    pub builder: bool,
}

impl NuggetFlags {
    /// (label, flag) pairs in the order they appear in the report.
    pub fn entries(&self) -> [(&'static str, bool); 3] {
        [
            ("Conceptual", self.conceptual),
            ("Practitioner", self.practitioner),
            ("Builder", self.builder),
        ]
    }
}

impl FieldRecord {
    /// Parses a record from JSON.
    ///
    /// Accepts either the bare record or a request envelope `{"data": {...}}`.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Parses a record from a JSON stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    fn from_value(mut value: Value) -> Result<Self> {
        if value.get("data").is_some_and(Value::is_object) {
            value = value["data"].take();
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Non-blank synthesis text.
    pub fn synthesis(&self) -> Option<&str> {
        non_blank(&self.synthesis)
    }

    /// Non-blank critical analysis text.
    pub fn critical(&self) -> Option<&str> {
        non_blank(&self.critical)
    }

    /// Non-blank prospector notes.
    pub fn prospector(&self) -> Option<&str> {
        non_blank(&self.prospector)
    }

    /// Non-blank full-text excerpt.
    pub fn fulltext(&self) -> Option<&str> {
        non_blank(&self.fulltext)
    }
}

/// Treats `None`, `""` and whitespace-only strings alike.
pub(crate) fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

// Text fields arrive as strings, numbers or booleans depending on the caller.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|level: &f64| level.is_finite()))
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ),
        _ => false,
    })
}
