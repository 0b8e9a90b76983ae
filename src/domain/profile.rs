use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything extracted from one person page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub header: Header,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub last_modified: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub top: TopSection,
    pub scoring: Scoring,
    pub blocks: Blocks,
    pub names: Names,
}

/// Profile head plus the labelled rows of the info table.
///
/// Optional fields are only set when the page has a row with the matching
/// label, and are left out of the serialized output otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSection {
    pub profile_image_src: String,
    pub profile_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_position_job_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_position_job_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_position_job_title: Option<String>,
    #[serde(
        rename = "birth_date__time",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date_time: Option<String>,
    #[serde(
        rename = "birth_date__meta_content",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date_meta_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal_date: Option<String>,
}

impl TopSection {
    pub fn set(&mut self, field: TopField, value: String) {
        let slot = match field {
            TopField::Category => &mut self.category,
            TopField::LastPositionJobLink => &mut self.last_position_job_link,
            TopField::LastPositionJobName => &mut self.last_position_job_name,
            TopField::LastPositionJobTitle => &mut self.last_position_job_title,
            TopField::BirthDateTime => &mut self.birth_date_time,
            TopField::BirthDateMetaContent => &mut self.birth_date_meta_content,
            TopField::DismissalDate => &mut self.dismissal_date,
        };
        *slot = Some(value);
    }

    /// Machine-readable birth date from the `<meta content>` attribute.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date_meta_content
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
    }
}

/// Optional top-section fields that table rows can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopField {
    Category,
    LastPositionJobLink,
    LastPositionJobName,
    LastPositionJobTitle,
    BirthDateTime,
    BirthDateMetaContent,
    DismissalDate,
}

impl TopField {
    pub fn key(&self) -> &'static str {
        match self {
            TopField::Category => "category",
            TopField::LastPositionJobLink => "last_position_job_link",
            TopField::LastPositionJobName => "last_position_job_name",
            TopField::LastPositionJobTitle => "last_position_job_title",
            TopField::BirthDateTime => "birth_date__time",
            TopField::BirthDateMetaContent => "birth_date__meta_content",
            TopField::DismissalDate => "dismissal_date",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    pub scoring_score: String,
    pub scoring_factors: Vec<String>,
}

// Left and right supplementary columns are not extracted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocks {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Names {
    pub alternative_names: Vec<String>,
}
