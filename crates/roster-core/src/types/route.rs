//! Route types for the employee resource.

use std::fmt;

/// HTTP method for route matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation served by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListEmployees,
    GetEmployee,
    CreateEmployee,
    UpdateEmployee,
    DeleteEmployee,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::ListEmployees,
        Endpoint::GetEmployee,
        Endpoint::CreateEmployee,
        Endpoint::UpdateEmployee,
        Endpoint::DeleteEmployee,
    ];

    /// Route identifier used in logs
    pub fn id(&self) -> &'static str {
        match self {
            Endpoint::ListEmployees => "list-employees",
            Endpoint::GetEmployee => "get-employee",
            Endpoint::CreateEmployee => "create-employee",
            Endpoint::UpdateEmployee => "update-employee",
            Endpoint::DeleteEmployee => "delete-employee",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::ListEmployees | Endpoint::GetEmployee => HttpMethod::Get,
            Endpoint::CreateEmployee => HttpMethod::Post,
            Endpoint::UpdateEmployee => HttpMethod::Patch,
            Endpoint::DeleteEmployee => HttpMethod::Delete,
        }
    }

    /// Path relative to the namespace (supports {param} placeholders)
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::ListEmployees | Endpoint::CreateEmployee => "/employees",
            Endpoint::GetEmployee | Endpoint::UpdateEmployee | Endpoint::DeleteEmployee => {
                "/employees/{id}"
            }
        }
    }
}

/// Join a namespace prefix and a relative path into a URL pattern.
///
/// `"api"`, `"/api"` and `"/api/"` all produce `/api/...`; an empty
/// namespace mounts routes at the root.
pub fn mount(namespace: &str, path: &str) -> String {
    let namespace = namespace.trim_matches('/');
    if namespace.is_empty() {
        path.to_owned()
    } else {
        format!("/{namespace}{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HttpMethod::Get, "GET")]
    #[case(HttpMethod::Post, "POST")]
    #[case(HttpMethod::Put, "PUT")]
    #[case(HttpMethod::Patch, "PATCH")]
    #[case(HttpMethod::Delete, "DELETE")]
    #[case(HttpMethod::Head, "HEAD")]
    #[case(HttpMethod::Options, "OPTIONS")]
    fn test_http_method_display(#[case] method: HttpMethod, #[case] expected: &str) {
        assert_eq!(method.to_string(), expected);
        assert_eq!(method.as_str(), expected);
    }

    #[rstest]
    #[case(Endpoint::ListEmployees, HttpMethod::Get, "/employees", "list-employees")]
    #[case(Endpoint::GetEmployee, HttpMethod::Get, "/employees/{id}", "get-employee")]
    #[case(Endpoint::CreateEmployee, HttpMethod::Post, "/employees", "create-employee")]
    #[case(Endpoint::UpdateEmployee, HttpMethod::Patch, "/employees/{id}", "update-employee")]
    #[case(Endpoint::DeleteEmployee, HttpMethod::Delete, "/employees/{id}", "delete-employee")]
    fn test_endpoint_table(
        #[case] endpoint: Endpoint,
        #[case] method: HttpMethod,
        #[case] path: &str,
        #[case] id: &str,
    ) {
        assert_eq!(endpoint.method(), method);
        assert_eq!(endpoint.path(), path);
        assert_eq!(endpoint.id(), id);
    }

    #[rstest]
    #[case("api", "/employees", "/api/employees")]
    #[case("/api", "/employees", "/api/employees")]
    #[case("/api/", "/employees/{id}", "/api/employees/{id}")]
    #[case("/v1/hr", "/employees", "/v1/hr/employees")]
    #[case("", "/employees", "/employees")]
    #[case("/", "/employees", "/employees")]
    fn test_mount(#[case] namespace: &str, #[case] path: &str, #[case] expected: &str) {
        assert_eq!(mount(namespace, path), expected);
    }
}
