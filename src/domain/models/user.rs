use serde::{Deserialize, Serialize};

/// Logged-in user, persisted as a JSON blob in local storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    /// Explicit initials, else the first letter of up to two name words.
    pub fn display_initials(&self) -> String {
        if let Some(initials) = &self.initials {
            return initials.clone();
        }
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            name: name.to_string(),
            role: None,
            initials: None,
            email: None,
            avatar_url: None,
        }
    }

    #[test]
    fn test_initials_from_name() {
        assert_eq!(user("ada lovelace byron").display_initials(), "AL");
        assert_eq!(user("Prince").display_initials(), "P");
        assert_eq!(user("  ").display_initials(), "");
    }

    #[test]
    fn test_explicit_initials_win() {
        let mut u = user("Ada Lovelace");
        u.initials = Some("XY".into());
        assert_eq!(u.display_initials(), "XY");
    }

    #[test]
    fn test_user_json_omits_missing_fields() {
        let json = serde_json::to_string(&user("Ada")).unwrap();
        assert_eq!(json, r#"{"name":"Ada"}"#);
        let parsed: User = serde_json::from_str(r#"{"name":"Ada","role":"Merchant Portal"}"#).unwrap();
        assert_eq!(parsed.role.as_deref(), Some("Merchant Portal"));
    }
}
