use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

pub const REQUIRED_FIELDS: &[&str] = &["company", "name", "phone", "industry", "revenue"];
pub const CONSENT_FIELD: &str = "privacy";

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{label} 항목을 입력해주세요.")]
    MissingField { key: String, label: String },
    #[error("개인정보 수집 및 이용에 동의해주세요.")]
    MissingConsent,
}

/// Display label for a form key, or the key itself when it has none.
pub fn field_label(key: &str) -> &str {
    match key {
        "company" => "업체명",
        "name" => "대표자명",
        "phone" => "연락처",
        "industry" => "업종",
        "revenue" => "연매출",
        "source" => "유입경로",
        other => other,
    }
}

/// A consultation request as entered in the contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConsultationRequest {
    pub company: String,
    pub name: String,
    pub phone: String,
    pub industry: String,
    pub revenue: String,
    pub source: String,
    pub message: String,
    pub privacy: bool,
}

impl ConsultationRequest {
    pub fn value(&self, key: &str) -> Option<&str> {
        match key {
            "company" => Some(&self.company),
            "name" => Some(&self.name),
            "phone" => Some(&self.phone),
            "industry" => Some(&self.industry),
            "revenue" => Some(&self.revenue),
            "source" => Some(&self.source),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    pub fn set_value(&mut self, key: &str, value: String) {
        match key {
            "company" => self.company = value,
            "name" => self.name = value,
            "phone" => self.phone = value,
            "industry" => self.industry = value,
            "revenue" => self.revenue = value,
            "source" => self.source = value,
            "message" => self.message = value,
            _ => log::warn!("Ignoring unknown form field {}", key),
        }
    }

    /// Flat key/value view, as a submitted HTML form would produce it.
    /// The consent checkbox only appears when ticked.
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        let mut fields: BTreeMap<String, String> = [
            "company", "name", "phone", "industry", "revenue", "source", "message",
        ]
        .iter()
        .filter_map(|key| self.value(key).map(|value| (key.to_string(), value.to_string())))
        .collect();
        if self.privacy {
            fields.insert(CONSENT_FIELD.to_string(), "on".to_string());
        }
        fields
    }
}

/// Checks required fields in order, then consent. Reports the first problem.
pub fn validate(fields: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    for key in REQUIRED_FIELDS {
        let filled = fields
            .get(*key)
            .map_or(false, |value| !value.trim().is_empty());
        if !filled {
            return Err(ValidationError::MissingField {
                key: key.to_string(),
                label: field_label(key).to_string(),
            });
        }
    }

    if fields.get(CONSENT_FIELD).map_or(true, |value| value.is_empty()) {
        return Err(ValidationError::MissingConsent);
    }

    Ok(())
}
