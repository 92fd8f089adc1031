//! Personal identification fields collected on step 3.

/// Editable field on the personal details step.
///
/// 个人信息字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalInfoField {
    DocumentNumber,
    FullName,
    DateOfBirth,
    Address,
}

/// In-progress personal details. Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PersonalInfoDraft {
    pub document_number: String,
    pub full_name: String,
    pub date_of_birth: String,
    pub address: String,
}

impl PersonalInfoDraft {
    /// Draft with the full name pre-filled from the user's profile.
    pub fn with_full_name(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, field: PersonalInfoField, value: String) {
        match field {
            PersonalInfoField::DocumentNumber => self.document_number = value,
            PersonalInfoField::FullName => self.full_name = value,
            PersonalInfoField::DateOfBirth => self.date_of_birth = value,
            PersonalInfoField::Address => self.address = value,
        }
    }

    pub fn get(&self, field: PersonalInfoField) -> &str {
        match field {
            PersonalInfoField::DocumentNumber => &self.document_number,
            PersonalInfoField::FullName => &self.full_name,
            PersonalInfoField::DateOfBirth => &self.date_of_birth,
            PersonalInfoField::Address => &self.address,
        }
    }

    /// Fields that still block the step, in form order.
    pub fn missing_fields(&self) -> Vec<PersonalInfoField> {
        [
            PersonalInfoField::DocumentNumber,
            PersonalInfoField::DateOfBirth,
            PersonalInfoField::FullName,
            PersonalInfoField::Address,
        ]
        .into_iter()
        .filter(|field| self.get(*field).is_empty())
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Promote the draft into a [`PersonalInfo`] when every field is non-empty.
    ///
    /// Only emptiness is checked; formats are the backend's concern.
    pub fn complete(self) -> Result<PersonalInfo, Self> {
        if !self.is_complete() {
            return Err(self);
        }
        Ok(PersonalInfo {
            document_number: self.document_number,
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            address: self.address,
        })
    }
}

/// Personal details with every field present.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PersonalInfo {
    document_number: String,
    full_name: String,
    date_of_birth: String,
    address: String,
}

impl PersonalInfo {
    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// ISO date string as entered (`YYYY-MM-DD` from a date input).
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn into_draft(self) -> PersonalInfoDraft {
        PersonalInfoDraft {
            document_number: self.document_number,
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            address: self.address,
        }
    }
}
