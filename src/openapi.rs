//! OpenAPI Document
//!
//! Machine-readable description of the public routes, built once at startup
//! and served verbatim from `/openapi.json`.

use serde_json::{json, Map, Value};

use crate::lookup::DocTopic;

/// OpenAPI 3 description of the public routes, with paths under `prefix`.
#[must_use]
pub fn openapi_spec(title: &str, version: &str, prefix: &str) -> Value {
    let ok = |description: &str, schema: &str| {
        json!({
            "description": description,
            "content": {"application/json": {"schema": {"$ref": format!("#/components/schemas/{schema}")}}}
        })
    };
    let error = |description: &str| {
        json!({
            "description": description,
            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiError"}}}
        })
    };

    let mut paths = Map::new();
    paths.insert(
        "/".to_string(),
        json!({"get": {"tags": ["Root"], "responses": {"200": ok("welcome banner", "RootResponse")}}}),
    );
    paths.insert(
        format!("{prefix}/health"),
        json!({"get": {"tags": ["Health"], "responses": {"200": ok("service health", "HealthResponse")}}}),
    );
    paths.insert(
        format!("{prefix}/analysis"),
        json!({"get": {"tags": ["Analysis Methods"], "responses": {"200": ok("all analysis methods", "AnalysisListResponse")}}}),
    );
    paths.insert(
        format!("{prefix}/analysis/{{method_id}}"),
        json!({"get": {
            "tags": ["Analysis Methods"],
            "parameters": [{"name": "method_id", "in": "path", "required": true, "schema": {"type": "string"}}],
            "responses": {
                "200": ok("one analysis method", "AnalysisMethod"),
                "404": error("unknown analysis method")
            }
        }}),
    );
    paths.insert(
        format!("{prefix}/features"),
        json!({"get": {"tags": ["Features"], "responses": {"200": ok("all features", "FeaturesListResponse")}}}),
    );
    for topic in DocTopic::ALL {
        paths.insert(
            format!("{prefix}/docs/{topic}"),
            json!({"get": {"tags": ["Documentation"], "responses": {"200": ok("documentation page", "DocSection")}}}),
        );
    }
    paths.insert(
        format!("{prefix}/team"),
        json!({"get": {"tags": ["Documentation"], "responses": {"200": ok("team roster", "TeamResponse")}}}),
    );
    paths.insert(
        format!("{prefix}/contact"),
        json!({"post": {
            "tags": ["Contact"],
            "requestBody": {
                "required": true,
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ContactMessage"}}}
            },
            "responses": {
                "200": ok("message acknowledged", "ContactResponse"),
                "422": error("malformed JSON, wrong content type, or invalid fields")
            }
        }}),
    );

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": title,
            "version": version,
            "description": "REST API for the OpenOA public website: analysis methods, features, documentation, team and contact."
        },
        "paths": Value::Object(paths),
        "components": {"schemas": component_schemas()}
    })
}

fn component_schemas() -> Value {
    let string = json!({"type": "string"});
    let strings = json!({"type": "array", "items": {"type": "string"}});
    json!({
        "AnalysisMethod": {
            "type": "object",
            "required": ["id", "name", "short_description", "long_description", "citations"],
            "properties": {
                "id": string, "name": string,
                "short_description": string, "long_description": string,
                "citations": strings,
                "parameters": {"type": "array", "items": {"type": "string"}, "nullable": true},
                "icon": string
            }
        },
        "AnalysisListResponse": {
            "type": "object",
            "required": ["count", "methods"],
            "properties": {
                "count": {"type": "integer"},
                "methods": {"type": "array", "items": {"$ref": "#/components/schemas/AnalysisMethod"}}
            }
        },
        "Feature": {
            "type": "object",
            "required": ["id", "name", "description"],
            "properties": {"id": string, "name": string, "description": string, "icon": string, "category": string}
        },
        "FeaturesListResponse": {
            "type": "object",
            "required": ["count", "features"],
            "properties": {
                "count": {"type": "integer"},
                "features": {"type": "array", "items": {"$ref": "#/components/schemas/Feature"}}
            }
        },
        "DocSubsection": {
            "type": "object",
            "required": ["title"],
            "properties": {
                "title": string, "content": string, "items": strings,
                "code": string, "text": string, "doi": string,
                "subsections": {"type": "array", "items": {"$ref": "#/components/schemas/DocSubsection"}}
            }
        },
        "DocSection": {
            "type": "object",
            "required": ["title", "content"],
            "properties": {
                "title": string, "content": string,
                "subsections": {"type": "array", "nullable": true, "items": {"$ref": "#/components/schemas/DocSubsection"}}
            }
        },
        "TeamMember": {
            "type": "object",
            "required": ["name", "role"],
            "properties": {"name": string, "role": string, "orcid": {"type": "string", "nullable": true}}
        },
        "TeamResponse": {
            "type": "object",
            "required": ["count", "members"],
            "properties": {
                "count": {"type": "integer"},
                "members": {"type": "array", "items": {"$ref": "#/components/schemas/TeamMember"}}
            }
        },
        "ContactMessage": {
            "type": "object",
            "required": ["name", "email", "subject", "message"],
            "properties": {"name": string, "email": string, "subject": string, "message": string}
        },
        "ContactResponse": {
            "type": "object",
            "required": ["success", "message"],
            "properties": {"success": {"type": "boolean"}, "message": string}
        },
        "HealthResponse": {
            "type": "object",
            "required": ["status", "version"],
            "properties": {"status": string, "version": string}
        },
        "RootResponse": {
            "type": "object",
            "required": ["message", "version", "docs"],
            "properties": {"message": string, "version": string, "docs": string}
        },
        "ApiError": {
            "type": "object",
            "required": ["detail"],
            "properties": {
                "detail": {"oneOf": [
                    string,
                    {"type": "array", "items": {
                        "type": "object",
                        "properties": {"loc": strings, "msg": string, "type": string}
                    }}
                ]}
            }
        }
    })
}
