//! Response Models
//!
//! Wire shapes for every payload the API emits, plus the inbound contact body.
//! Field names and null handling follow the public website's JSON contract:
//! top-level optional fields serialize as `null`, nested doc extras are omitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Analysis Methods
// ============================================================================

/// One operational-assessment method offered by OpenOA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMethod {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    pub citations: Vec<String>,
    pub parameters: Option<Vec<String>>,
    #[serde(default = "default_method_icon")]
    pub icon: String,
}

pub fn default_method_icon() -> String {
    "⚡".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisListResponse {
    count: usize,
    methods: Vec<AnalysisMethod>,
}

impl AnalysisListResponse {
    pub fn new(methods: Vec<AnalysisMethod>) -> Self {
        Self { count: methods.len(), methods }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn methods(&self) -> &[AnalysisMethod] {
        &self.methods
    }
}

// ============================================================================
// Features
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default = "default_feature_icon")]
    pub icon: String,
    #[serde(default = "default_feature_category")]
    pub category: String,
}

pub fn default_feature_icon() -> String {
    "🔧".to_string()
}

pub fn default_feature_category() -> String {
    "utility".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturesListResponse {
    count: usize,
    features: Vec<Feature>,
}

impl FeaturesListResponse {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { count: features.len(), features }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}

// ============================================================================
// Documentation
// ============================================================================

/// Top-level documentation page (overview, installation, schema, citations)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocSection {
    pub title: String,
    pub content: String,
    pub subsections: Option<Vec<DocSubsection>>,
}

/// Nested documentation block. Every extra is optional and omitted when unset,
/// so the frontend can test `sub.items`, `sub.code` etc. for presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocSubsection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<DocSubsection>,
}

// ============================================================================
// Team
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub orcid: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    count: usize,
    members: Vec<TeamMember>,
}

impl TeamResponse {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self { count: members.len(), members }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }
}

// ============================================================================
// Contact
// ============================================================================

/// Contact form submission. Request-scoped, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A single violated field in an inbound body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl FieldError {
    fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }

    /// Human-readable text for the reason code
    pub fn message(&self) -> &'static str {
        match self.reason {
            "missing" => "Field required",
            "empty" => "Field must not be empty",
            "not_a_string" => "Input should be a valid string",
            "not_an_object" => "Input should be a valid object",
            _ => "Invalid value",
        }
    }
}

impl ContactMessage {
    /// Validate a decoded JSON body, collecting every violation rather than
    /// stopping at the first. Unknown keys are ignored.
    ///
    /// Walks a `Value` instead of deriving `Deserialize` because serde stops
    /// at the first bad field.
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldError::new("body", "not_an_object")]);
        };

        let mut errors = Vec::new();
        let mut take = |field: &'static str| -> Option<String> {
            match object.get(field) {
                None | Some(Value::Null) => errors.push(FieldError::new(field, "missing")),
                Some(Value::String(s)) if s.trim().is_empty() => {
                    errors.push(FieldError::new(field, "empty"))
                }
                Some(Value::String(s)) => return Some(s.clone()),
                Some(_) => errors.push(FieldError::new(field, "not_a_string")),
            }
            None
        };

        let name = take("name");
        let email = take("email");
        let subject = take("subject");
        let message = take("message");

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => {
                Ok(Self { name, email, subject, message })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn acknowledged() -> Self {
        Self {
            success: true,
            message: "Thank you for your message! We'll get back to you soon.".to_string(),
        }
    }
}

// ============================================================================
// Health / Root
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(version: &str) -> Self {
        Self { status: "healthy".to_string(), version: version.to_string() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub docs: String,
}
