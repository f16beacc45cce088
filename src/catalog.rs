use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Lenient per-field deserializers: a field with an unusable shape (or an
// explicit null) degrades to that field's documented default instead of
// failing the whole record.

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        _ => Ok(false),
    }
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<YearField>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(YearField::Number(i)),
            None => n.as_f64().map(YearField::Float),
        },
        Value::String(s) => Some(YearField::Text(s)),
        _ => None,
    })
}

/// Year field as it appears in catalog records: sometimes a number,
/// sometimes a string, often absent.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum YearField {
    Number(i64),
    Float(f64),
    Text(String),
}

/// One record of the content catalog.
///
/// All fields except `id` are optional with documented defaults; absent,
/// present-but-null, and wrongly-shaped inputs all deserialize to the
/// field's default, so one bad field never invalidates the record.
/// Unknown fields are tolerated so records can carry extra pipeline
/// annotations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    /// Comma-separated category labels.
    #[serde(default, deserialize_with = "lenient_string")]
    pub tags: String,
    #[serde(
        default,
        deserialize_with = "lenient_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<YearField>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub locked: bool,
    /// Output field: most-similar foreign ids, best first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_ids: Vec<String>,
}

impl CatalogEntry {
    /// An entry participates in similarity computation only when it has
    /// an id and at least one of title/description.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && (!self.title.is_empty() || !self.description.is_empty())
    }

    /// Parse the year field; non-numeric text and fractional years count
    /// as unknown.
    pub fn parsed_year(&self) -> Option<i32> {
        match &self.year {
            Some(YearField::Number(n)) => i32::try_from(*n).ok(),
            Some(YearField::Float(f)) => {
                if f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64 {
                    Some(*f as i32)
                } else {
                    None
                }
            }
            Some(YearField::Text(s)) => s.trim().parse::<i32>().ok(),
            None => None,
        }
    }

    /// Split the comma-separated tag string into raw labels.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Text used for TF-IDF: the title repeated three times ahead of the
    /// description, upweighting title terms over body text.
    pub fn text_blob(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.title, self.title, self.description
        )
    }
}

/// Operator-facing anomalies observed while scanning the catalog. None of
/// these abort a run; both halves of an id collision stay in the catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogReport {
    pub total_entries: usize,
    pub valid_entries: usize,
    /// Ids that appeared more than once.
    pub id_collisions: Vec<String>,
    /// Titles (or a placeholder) of entries lacking an id.
    pub entries_without_id: Vec<String>,
}

impl CatalogReport {
    pub fn scan(entries: &[CatalogEntry]) -> Self {
        let mut seen: Vec<&str> = Vec::new();
        let mut report = CatalogReport {
            total_entries: entries.len(),
            valid_entries: entries.iter().filter(|e| e.is_valid()).count(),
            ..Default::default()
        };
        for entry in entries {
            if entry.id.is_empty() {
                let label = if entry.title.is_empty() {
                    "(untitled)".to_string()
                } else {
                    entry.title.clone()
                };
                report.entries_without_id.push(label);
            } else if seen.contains(&entry.id.as_str()) {
                if !report.id_collisions.contains(&entry.id) {
                    report.id_collisions.push(entry.id.clone());
                }
            } else {
                seen.push(&entry.id);
            }
        }
        report
    }
}
