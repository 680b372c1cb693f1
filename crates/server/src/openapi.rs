use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

/// Employee as returned by the API.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDoc {
    #[schema(example = "3f1c2b9e-8f5a-4c3e-9a51-0d6f1f2a7b10")]
    pub id: String,
    #[schema(example = "Ann")]
    pub first_name: String,
    #[schema(example = "Lee")]
    pub last_name: String,
    #[schema(example = "ann@x.com")]
    pub email: String,
}

/// Create/update body; `id` is optional and ignored on update.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayloadDoc {
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Employee Directory API", description = "CRUD over the employee record store"),
    paths(
        crate::routes::health,
        crate::routes::employees::list,
        crate::routes::employees::create,
        crate::routes::employees::get,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            EmployeeDoc,
            EmployeePayloadDoc,
            ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees")
    )
)]
pub struct ApiDoc;

/// Serve the machine-readable API description.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_employee_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/api/employees"));
        let item = &paths["/api/employees/{id}"];
        for method in ["get", "put", "delete"] {
            assert!(item.get(method).is_some(), "missing {method}");
        }
        assert!(paths["/api/employees"].get("post").is_some());
    }

    #[test]
    fn employee_schema_is_camel_case() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let props = &doc["components"]["schemas"]["EmployeeDoc"]["properties"];
        assert!(props.get("firstName").is_some());
        assert!(props.get("lastName").is_some());
        assert!(props.get("first_name").is_none());
    }

    fn schema_keys(doc: &serde_json::Value, name: &str) -> std::collections::BTreeSet<String> {
        doc["components"]["schemas"][name]["properties"]
            .as_object()
            .map(|props| props.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn value_keys(v: serde_json::Value) -> std::collections::BTreeSet<String> {
        v.as_object().map(|o| o.keys().cloned().collect()).unwrap_or_default()
    }

    #[test]
    fn doc_schemas_match_wire_types() {
        use service::employee::{Employee, EmployeeInput};

        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let employee = Employee {
            id: "x".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@x.com".into(),
        };
        let input = EmployeeInput {
            id: Some("x".into()),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@x.com".into(),
        };
        assert_eq!(schema_keys(&doc, "EmployeeDoc"), value_keys(serde_json::to_value(employee).unwrap()));
        assert_eq!(schema_keys(&doc, "EmployeePayloadDoc"), value_keys(serde_json::to_value(input).unwrap()));
    }
}
