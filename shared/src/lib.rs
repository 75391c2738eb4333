use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A promotional campaign managed through the admin UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promo {
    pub id: i64,
    /// Display name of the promo
    pub name: String,
    /// Lifecycle status; one of PROMO_STATUSES when set
    pub status: Option<String>,
}

/// Statuses a promo can be in, in the order the form offers them
pub const PROMO_STATUSES: [&str; 3] = ["Active", "Inactive", "Draft"];

/// Request body for creating or updating a promo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavePromoRequest {
    pub name: String,
    pub status: String,
}

/// Response after creating or updating a promo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavePromoResponse {
    pub success: bool,
    pub message: Option<String>,
    /// Field name -> server-side validation messages for that field
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl SavePromoResponse {
    /// Render a failed save as a single user-facing string.
    ///
    /// When the backend sends both field errors and a message, the field
    /// errors win and are concatenated into one list, one line per message.
    pub fn failure_summary(&self) -> String {
        if let Some(errors) = &self.errors {
            if !errors.is_empty() {
                let mut fields: Vec<&String> = errors.keys().collect();
                fields.sort();
                let mut lines = Vec::new();
                for field in fields {
                    for message in &errors[field] {
                        lines.push(format!("{}: {}", field, message));
                    }
                }
                return lines.join("\n");
            }
        }
        self.message
            .clone()
            .unwrap_or_else(|| "Saving the promo failed".to_string())
    }
}

/// Response containing the list of promos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoListResponse {
    pub promos: Vec<Promo>,
}

/// Active color palette used for interactive styling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorPalette {
    pub primary: String,
    pub accent: Option<String>,
}

/// State for the promo create/edit form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromoFormState {
    /// id of the promo being edited; None while creating
    pub promo_id: Option<i64>,
    pub name: String,
    pub status: String,
}

impl PromoFormState {
    /// Empty form for creating a new promo
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form from an existing promo for editing
    pub fn from_promo(promo: &Promo) -> Self {
        Self {
            promo_id: Some(promo.id),
            name: promo.name.clone(),
            status: promo.status.clone().unwrap_or_default(),
        }
    }
}

/// Validation result for the promo form
#[derive(Debug, Clone, PartialEq)]
pub struct PromoFormValidation {
    pub is_valid: bool,
    /// Field name -> human-readable message
    pub errors: HashMap<String, String>,
}

/// Validate the promo form. The name must be non-empty after trimming;
/// the status is optional and not validated client-side.
pub fn validate_promo_form(form: &PromoFormState) -> PromoFormValidation {
    let mut errors = HashMap::new();

    if form.name.trim().is_empty() {
        errors.insert("name".to_string(), "Promo name is required".to_string());
    }

    PromoFormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// HTTP method for a promo save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMethod {
    Post,
    Put,
}

impl fmt::Display for SaveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveMethod::Post => write!(f, "POST"),
            SaveMethod::Put => write!(f, "PUT"),
        }
    }
}

/// Route for a promo save request, derived from the presence of an id
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRoute {
    pub method: SaveMethod,
    pub path: String,
}

impl SaveRoute {
    /// Creation posts to the collection; an update puts to the item by id
    pub fn for_promo(promo_id: Option<i64>) -> Self {
        match promo_id {
            None => Self {
                method: SaveMethod::Post,
                path: "/promos".to_string(),
            },
            Some(id) => Self {
                method: SaveMethod::Put,
                path: format!("/promos/{}", id),
            },
        }
    }
}

/// Validate the form and, when it passes, build the route and request body
/// for the save. A form that fails validation never produces a request, so
/// no network call can be made from an invalid form.
pub fn prepare_save(
    form: &PromoFormState,
) -> Result<(SaveRoute, SavePromoRequest), PromoFormValidation> {
    let validation = validate_promo_form(form);
    if !validation.is_valid {
        return Err(validation);
    }

    let route = SaveRoute::for_promo(form.promo_id);
    let request = SavePromoRequest {
        name: form.name.trim().to_string(),
        status: form.status.trim().to_string(),
    };

    Ok((route, request))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(promo_id: Option<i64>, name: &str, status: &str) -> PromoFormState {
        PromoFormState {
            promo_id,
            name: name.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_validate_requires_name() {
        // Empty name
        let validation = validate_promo_form(&form(None, "", "Active"));
        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors.get("name").map(String::as_str),
            Some("Promo name is required")
        );

        // Whitespace-only name trims to empty
        let validation = validate_promo_form(&form(None, "   ", ""));
        assert!(!validation.is_valid);
        assert!(validation.errors.contains_key("name"));

        // Valid name passes with no errors
        let validation = validate_promo_form(&form(None, "Spring Sale", ""));
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
    }

    #[test]
    fn test_status_is_not_validated() {
        let validation = validate_promo_form(&form(None, "Spring Sale", "whatever"));
        assert!(validation.is_valid);
    }

    #[test]
    fn test_prepare_save_blocks_invalid_form() {
        let result = prepare_save(&form(None, "  ", "Active"));
        let validation = result.unwrap_err();
        assert!(validation.errors.contains_key("name"));
    }

    #[test]
    fn test_prepare_save_trims_fields() {
        let (_, request) = prepare_save(&form(None, "  Launch  ", " Active ")).unwrap();
        assert_eq!(request.name, "Launch");
        assert_eq!(request.status, "Active");
    }

    #[test]
    fn test_save_route_create_targets_collection() {
        let route = SaveRoute::for_promo(None);
        assert_eq!(route.method, SaveMethod::Post);
        assert_eq!(route.method.to_string(), "POST");
        assert_eq!(route.path, "/promos");
    }

    #[test]
    fn test_save_route_update_targets_item() {
        let route = SaveRoute::for_promo(Some(5));
        assert_eq!(route.method, SaveMethod::Put);
        assert_eq!(route.method.to_string(), "PUT");
        assert_eq!(route.path, "/promos/5");
    }

    #[test]
    fn test_prepare_save_routes_by_id_presence() {
        let (route, _) = prepare_save(&form(None, "Spring Sale", "")).unwrap();
        assert_eq!(route.method, SaveMethod::Post);

        let (route, _) = prepare_save(&form(Some(42), "Spring Sale", "")).unwrap();
        assert_eq!(route.method, SaveMethod::Put);
        assert_eq!(route.path, "/promos/42");
    }

    #[test]
    fn test_from_promo_round_trip() {
        let promo = Promo {
            id: 5,
            name: "Spring Sale".to_string(),
            status: Some("Active".to_string()),
        };

        let state = PromoFormState::from_promo(&promo);
        assert_eq!(state.promo_id, Some(5));
        assert_eq!(state.name, "Spring Sale");
        assert_eq!(state.status, "Active");
    }

    #[test]
    fn test_from_promo_without_status() {
        let promo = Promo {
            id: 7,
            name: "Clearance".to_string(),
            status: None,
        };

        let state = PromoFormState::from_promo(&promo);
        assert_eq!(state.status, "");
    }

    #[test]
    fn test_new_form_is_empty_and_error_free() {
        let state = PromoFormState::new();
        assert_eq!(state.promo_id, None);
        assert_eq!(state.name, "");
        assert_eq!(state.status, "");
        assert!(validate_promo_form(&state).errors.contains_key("name"));
    }

    #[test]
    fn test_failure_summary_prefers_field_errors() {
        let mut errors = HashMap::new();
        errors.insert(
            "name".to_string(),
            vec!["already taken".to_string(), "too short".to_string()],
        );

        let response = SavePromoResponse {
            success: false,
            message: Some("validation failed".to_string()),
            errors: Some(errors),
        };

        let summary = response.failure_summary();
        assert!(summary.contains("already taken"));
        assert!(summary.contains("too short"));
        // The errors mapping wins over the generic message
        assert!(!summary.contains("validation failed"));
    }

    #[test]
    fn test_failure_summary_falls_back_to_message() {
        let response = SavePromoResponse {
            success: false,
            message: Some("something went wrong".to_string()),
            errors: None,
        };
        assert_eq!(response.failure_summary(), "something went wrong");

        // An empty errors mapping behaves like no errors at all
        let response = SavePromoResponse {
            success: false,
            message: Some("still wrong".to_string()),
            errors: Some(HashMap::new()),
        };
        assert_eq!(response.failure_summary(), "still wrong");

        // Neither field present falls back to a default
        let response = SavePromoResponse {
            success: false,
            message: None,
            errors: None,
        };
        assert_eq!(response.failure_summary(), "Saving the promo failed");
    }

    #[test]
    fn test_save_response_parses_with_optional_fields_missing() {
        let response: SavePromoResponse =
            serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("ok"));
        assert_eq!(response.errors, None);

        let response: SavePromoResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.message, None);
    }

    #[test]
    fn test_save_response_parses_field_errors() {
        let json = r#"{"success":false,"errors":{"name":["already taken"]}}"#;
        let response: SavePromoResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.failure_summary().contains("already taken"));
    }
}
