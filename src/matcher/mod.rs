mod error;
mod params;
mod resolver;

pub use error::MatchError;
pub use params::RouteParams;
pub(crate) use params::captures_to_params;
pub(crate) use resolver::find_route;

use crate::action::ActionDescriptor;
use crate::method::HttpMethod;
use crate::table::CompiledRoute;

/// A successful resolution: the winning route plus its extracted parameters
/// and the raw request method and path echoed back. Produced fresh per
/// request; the table itself is never retained or mutated.
#[derive(Debug, Clone)]
pub struct MatchResult<'t> {
    route: &'t CompiledRoute,
    params: RouteParams,
    method: HttpMethod,
    path: String,
}

impl<'t> MatchResult<'t> {
    pub(crate) fn new(
        route: &'t CompiledRoute,
        params: RouteParams,
        method: HttpMethod,
        path: String,
    ) -> Self {
        Self {
            route,
            params,
            method,
            path,
        }
    }

    pub fn route(&self) -> &'t CompiledRoute {
        self.route
    }

    pub fn action(&self) -> &'t ActionDescriptor {
        self.route.action()
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
