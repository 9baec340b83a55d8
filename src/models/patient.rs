use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::doctor::DoctorId;
use super::enums::{PatientStatus, Priority};

/// Registration-order identifier. Lower ids registered earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub u64);

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Intake form as submitted at the front desk. Only `name` is required.
///
/// The browser form posts every input as text, blank when untouched, so the
/// optional fields accept a string or a number and store blanks as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub name: String,
    #[serde(deserialize_with = "deserialize_form_text")]
    pub address: Option<String>,
    #[serde(deserialize_with = "deserialize_form_text")]
    pub age: Option<String>,
    #[serde(deserialize_with = "deserialize_form_text")]
    pub dob: Option<String>,
    pub priority: Priority,
    #[serde(deserialize_with = "deserialize_form_text")]
    pub problem: Option<String>,
    #[serde(deserialize_with = "deserialize_form_text")]
    pub mobile: Option<String>,
    #[serde(deserialize_with = "deserialize_form_text")]
    pub email: Option<String>,
}

impl RegistrationForm {
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            priority,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub address: Option<String>,
    pub age: Option<String>,
    pub dob: Option<String>,
    pub priority: Priority,
    pub problem: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub status: PatientStatus,
    /// Current pairing. A suggestion while waiting, binding once started.
    pub doctor: Option<DoctorId>,
    pub registered_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Patient {
    pub fn from_form(id: PatientId, form: RegistrationForm, registered_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: form.name.trim().to_string(),
            address: form.address,
            age: form.age,
            dob: form.dob,
            priority: form.priority,
            problem: form.problem,
            mobile: form.mobile,
            email: form.email,
            status: PatientStatus::Waiting,
            doctor: None,
            registered_at,
            completed_at: None,
        }
    }
}

/// Optional form text: accepts a string, a number or null. Blank strings
/// become `None`; surrounding whitespace is trimmed.
fn deserialize_form_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct FormText;

    impl<'de> de::Visitor<'de> for FormText {
        type Value = Option<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a string, a number or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let trimmed = v.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(FormText)
}
