//! Route table for the employee resource.

use crate::config::error::ConfigError;
use crate::matching::UrlPattern;
use crate::types::exchange::Request;
use crate::types::route::{mount, Endpoint};
use std::collections::HashMap;

/// Mounted route: an endpoint bound to its URL pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub endpoint: Endpoint,
    pub pattern: UrlPattern,
}

/// Outcome of looking a request up in the [`RouteTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// Method and URL matched; carries the decoded path parameters
    Found {
        endpoint: Endpoint,
        params: HashMap<String, String>,
    },
    /// URL matched at least one route, but none with this method
    MethodNotAllowed,
    NotFound,
}

/// All employee routes mounted under one namespace, in declaration order.
#[derive(Debug, Clone)]
pub struct RouteTable {
    namespace: String,
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(namespace: &str) -> Result<Self, ConfigError> {
        let routes = Endpoint::ALL
            .iter()
            .map(|&endpoint| -> Result<Route, ConfigError> {
                Ok(Route {
                    endpoint,
                    pattern: UrlPattern::new(&mount(namespace, endpoint.path()))?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            namespace: namespace.to_string(),
            routes,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the first route matching the request's method and URL.
    pub fn find(&self, request: &Request) -> RouteMatch {
        let mut url_matched = false;
        for route in &self.routes {
            let Some(params) = route.pattern.captures(&request.url) else {
                continue;
            };
            if route.endpoint.method() == request.method {
                return RouteMatch::Found {
                    endpoint: route.endpoint,
                    params,
                };
            }
            url_matched = true;
        }

        if url_matched {
            RouteMatch::MethodNotAllowed
        } else {
            RouteMatch::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::route::HttpMethod;
    use rstest::{fixture, rstest};

    #[fixture]
    fn table() -> RouteTable {
        RouteTable::new("/api").expect("valid namespace")
    }

    #[rstest]
    #[case(HttpMethod::Get, "/api/employees", Endpoint::ListEmployees, None)]
    #[case(HttpMethod::Post, "/api/employees", Endpoint::CreateEmployee, None)]
    #[case(HttpMethod::Get, "/api/employees/3", Endpoint::GetEmployee, Some("3"))]
    #[case(HttpMethod::Patch, "/api/employees/3", Endpoint::UpdateEmployee, Some("3"))]
    #[case(HttpMethod::Delete, "/api/employees/3/", Endpoint::DeleteEmployee, Some("3"))]
    fn test_find_route(
        table: RouteTable,
        #[case] method: HttpMethod,
        #[case] url: &str,
        #[case] expected: Endpoint,
        #[case] id: Option<&str>,
    ) {
        match table.find(&Request::new(method, url)) {
            RouteMatch::Found { endpoint, params } => {
                assert_eq!(endpoint, expected);
                assert_eq!(params.get("id").map(String::as_str), id);
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[rstest]
    #[case(HttpMethod::Put, "/api/employees/3")]
    #[case(HttpMethod::Delete, "/api/employees")]
    #[case(HttpMethod::Options, "/api/employees")]
    fn test_method_not_allowed(table: RouteTable, #[case] method: HttpMethod, #[case] url: &str) {
        assert_eq!(
            table.find(&Request::new(method, url)),
            RouteMatch::MethodNotAllowed
        );
    }

    #[rstest]
    #[case("/employees")]
    #[case("/api/departments")]
    #[case("/api/employees/3/manager")]
    fn test_route_not_found(table: RouteTable, #[case] url: &str) {
        assert_eq!(table.find(&Request::get(url)), RouteMatch::NotFound);
    }

    #[rstest]
    fn test_custom_namespace() {
        let table = RouteTable::new("v2/hr").unwrap();
        assert_eq!(table.namespace(), "v2/hr");
        assert_eq!(table.routes()[0].pattern.as_str(), "/v2/hr/employees");
        assert!(matches!(
            table.find(&Request::get("/v2/hr/employees")),
            RouteMatch::Found {
                endpoint: Endpoint::ListEmployees,
                ..
            }
        ));
        assert_eq!(
            table.find(&Request::get("/api/employees")),
            RouteMatch::NotFound
        );
    }
}
