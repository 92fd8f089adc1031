use std::fmt;
use std::str::FromStr;

/// Government-issued document kind presented in step 1.
///
/// 证件类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[default]
    Passport,
    DriversLicense,
    NationalId,
}

impl DocumentType {
    /// Wire value sent as the `document_type` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Passport => "passport",
            DocumentType::DriversLicense => "drivers_license",
            DocumentType::NationalId => "national_id",
        }
    }

    /// Human label shown on the review step.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Passport => "Passport",
            DocumentType::DriversLicense => "Driver's License",
            DocumentType::NationalId => "National ID Card",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passport" => Ok(DocumentType::Passport),
            "drivers_license" => Ok(DocumentType::DriversLicense),
            "national_id" => Ok(DocumentType::NationalId),
            other => Err(UnknownDocumentType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_serde_representation() {
        for doc in [
            DocumentType::Passport,
            DocumentType::DriversLicense,
            DocumentType::NationalId,
        ] {
            let json = serde_json::to_string(&doc).unwrap();
            assert_eq!(json, format!("\"{}\"", doc.as_str()));
            assert_eq!(doc.as_str().parse::<DocumentType>().unwrap(), doc);
        }
    }

    #[test]
    fn unknown_wire_value_is_rejected() {
        assert_eq!(
            "visa".parse::<DocumentType>(),
            Err(UnknownDocumentType("visa".into()))
        );
    }
}
