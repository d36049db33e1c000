use serde::{Deserialize, Serialize};

/// Sector/industry metadata for one symbol.
///
/// Classification is assumed stable for the process lifetime and is cached
/// accordingly. A classification where both fields are `None` is a valid,
/// cacheable value: it records that the provider cannot classify the
/// symbol, so we never ask again.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub sector: Option<String>,
    pub industry: Option<String>,
}

impl Classification {
    /// The "provider could not classify this symbol" value.
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_unknown(&self) -> bool {
        self.sector.is_none() && self.industry.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_classification() {
        assert!(Classification::unknown().is_unknown());

        let classified = Classification {
            sector: Some("Technology".to_string()),
            industry: None,
        };
        assert!(!classified.is_unknown());
    }
}
