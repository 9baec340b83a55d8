use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(pub u32);

impl std::fmt::Display for DoctorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: Option<String>,
    /// False while paired with a patient, whether reserved or in consultation.
    pub available: bool,
}

impl Doctor {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: DoctorId(id),
            name: name.into(),
            specialty: None,
            available: true,
        }
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }
}

/// Build a roster from names, numbering doctors from 1 in the given order.
pub fn roster_from_names<I, S>(names: I) -> Vec<Doctor>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .zip(1u32..)
        .map(|(name, id)| Doctor::new(id, name))
        .collect()
}
