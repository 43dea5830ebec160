/// Identifier for a group as it appears in a URL: either its id or its slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupIdentifier {
    /// Slug-based identifier (e.g., "sf-ios-coffee")
    Slug(String),
    /// UUID-based identifier
    Id(uuid::Uuid),
}

impl From<&str> for GroupIdentifier {
    fn from(s: &str) -> Self {
        if let Ok(uuid) = uuid::Uuid::parse_str(s) {
            Self::Id(uuid)
        } else {
            Self::Slug(s.to_string())
        }
    }
}

impl From<String> for GroupIdentifier {
    fn from(s: String) -> Self {
        if let Ok(uuid) = uuid::Uuid::parse_str(&s) {
            Self::Id(uuid)
        } else {
            Self::Slug(s)
        }
    }
}

impl From<uuid::Uuid> for GroupIdentifier {
    fn from(id: uuid::Uuid) -> Self {
        Self::Id(id)
    }
}
