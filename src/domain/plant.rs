use std::fmt;
use uuid::Uuid;

/// Store-generated identifier of a plant. Rendered into URLs as its
/// lowercase hyphenated UUID form, the only form [`PlantId::parse`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct PlantId(Uuid);

impl PlantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns `None` for anything other than the form `Display` produces,
    /// so every plant has exactly one URL.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::try_parse(value)
            .ok()
            .filter(|uuid| uuid.hyphenated().to_string() == value)
            .map(Self)
    }
}

impl Default for PlantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub variety: String,

    /// Link to a picture of the plant, shown on list and detail pages.
    pub photo_url: String,

    /// Kept exactly as submitted, no date parsing happens.
    pub date_planted: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphenated_uuid() {
        let id = PlantId::new();
        assert_eq!(PlantId::parse(&id.to_string()), Some(id));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(PlantId::parse(""), None);
        assert_eq!(PlantId::parse("not-an-id"), None);
        assert_eq!(PlantId::parse("65a1f0c2e4b0a1b2c3d4e5f6"), None);
    }

    #[test]
    fn rejects_non_canonical_spellings() {
        let id = PlantId::new().to_string();

        assert_eq!(PlantId::parse(&id.replace('-', "")), None);
        assert_eq!(PlantId::parse(&id.to_uppercase()), None);
        assert_eq!(PlantId::parse(&format!("urn:uuid:{id}")), None);
        assert_eq!(PlantId::parse(&format!("{{{id}}}")), None);
        assert_eq!(PlantId::parse(&format!(" {id} ")), None);
    }
}
