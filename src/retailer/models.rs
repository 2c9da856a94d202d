//! Retailer records, projections and the structured field patch.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A retailer row as stored. `password_hash` never leaves the crate; API
/// responses use [`RetailerProfile`] instead.
#[derive(Debug, Clone)]
pub struct Retailer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company_logo: Option<String>,
    pub profile_image: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Non-sensitive projection returned by login and profile endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetailerProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company_logo: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Retailer> for RetailerProfile {
    fn from(retailer: Retailer) -> Self {
        Self {
            id: retailer.id,
            first_name: retailer.first_name,
            last_name: retailer.last_name,
            company_name: retailer.company_name,
            email: retailer.email,
            phone: retailer.phone,
            address: retailer.address,
            company_logo: retailer.company_logo,
            profile_image: retailer.profile_image,
            created_at: retailer.created_at,
            updated_at: retailer.updated_at,
        }
    }
}

/// Insert payload for a freshly registered retailer. The hash must come from
/// `auth::password::hash`; no other writer exists.
#[derive(Debug, Clone)]
pub struct NewRetailer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company_logo: Option<String>,
    pub profile_image: Option<String>,
    pub password_hash: String,
}

/// Allow-listed partial update. `None` means "leave the stored value alone";
/// the store applies the patch behind one fixed, parameterized UPDATE.
/// Email and the credential are deliberately not part of the patch.
#[derive(Debug, Clone, Default)]
pub struct RetailerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company_logo: Option<String>,
    pub profile_image: Option<String>,
}

impl RetailerPatch {
    /// Collapse blank or whitespace-only values into `None` so they cannot
    /// overwrite stored fields.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            first_name: non_blank(self.first_name),
            last_name: non_blank(self.last_name),
            company_name: non_blank(self.company_name),
            phone: non_blank(self.phone),
            address: non_blank(self.address),
            company_logo: non_blank(self.company_logo),
            profile_image: non_blank(self.profile_image),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.company_name.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.company_logo.is_none()
            && self.profile_image.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_normalized_drops_blanks() {
        let patch = RetailerPatch {
            first_name: Some("Alice".to_string()),
            last_name: Some("   ".to_string()),
            company_name: Some(String::new()),
            ..RetailerPatch::default()
        };

        let normalized = patch.normalized();
        assert_eq!(normalized.first_name.as_deref(), Some("Alice"));
        assert!(normalized.last_name.is_none());
        assert!(normalized.company_name.is_none());
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(RetailerPatch::default().is_empty());
        assert!(!RetailerPatch {
            phone: Some("0123456789".to_string()),
            ..RetailerPatch::default()
        }
        .is_empty());
    }

    #[test]
    fn test_profile_never_carries_hash() {
        let retailer = Retailer {
            id: Uuid::new_v4(),
            first_name: "Alice".to_string(),
            last_name: "Doe".to_string(),
            company_name: "Acme".to_string(),
            email: "alice@x.com".to_string(),
            phone: "0123456789".to_string(),
            address: "1 Main St".to_string(),
            company_logo: None,
            profile_image: None,
            password_hash: "$2b$10$secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(RetailerProfile::from(retailer)).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "alice@x.com");
        assert_eq!(json["firstName"], "Alice");
    }
}
