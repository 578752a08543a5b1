use serde::{Deserialize, Serialize};

use crate::action::ActionDescriptor;
use crate::loader::{self, LoadResult};
use crate::matcher::{self, MatchError, MatchResult};
use crate::method::HttpMethod;
use crate::pattern::PathSegment;

/// One compiled route. Owned exclusively by its table and immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    method: HttpMethod,
    template: String,
    segments: Vec<PathSegment>,
    action: ActionDescriptor,
    order: u32,
}

impl CompiledRoute {
    pub(crate) fn new(
        method: HttpMethod,
        template: String,
        segments: Vec<PathSegment>,
        action: ActionDescriptor,
        order: u32,
    ) -> Self {
        Self {
            method,
            template,
            segments,
            action,
            order,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The path template with the table prefix already applied.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn action(&self) -> &ActionDescriptor {
        &self.action
    }

    /// Position among successfully parsed routes; the sole priority key.
    pub fn order(&self) -> u32 {
        self.order
    }
}

/// A route made unreachable by an earlier declaration, identified by the
/// declaration orders of both routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowWarning {
    pub shadowed: u32,
    pub shadowed_by: u32,
}

/// The ordered, immutable route table. Built once at load time; matching
/// only ever reads it, so it can be shared across threads freely.
/// Reconfiguration means building a new table and swapping it in whole.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    prefix: String,
    shadow_warnings: Vec<ShadowWarning>,
}

impl RouteTable {
    pub(crate) fn new(
        routes: Vec<CompiledRoute>,
        prefix: String,
        shadow_warnings: Vec<ShadowWarning>,
    ) -> Self {
        Self {
            routes,
            prefix,
            shadow_warnings,
        }
    }

    pub fn load(source: &str, prefix: &str) -> LoadResult<Self> {
        loader::load(source, prefix)
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[CompiledRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The prefix applied to every template, trailing slash trimmed.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Shadowed-route lint findings collected at load time.
    pub fn shadow_warnings(&self) -> &[ShadowWarning] {
        &self.shadow_warnings
    }

    /// Resolves a request to the first matching route in declaration order,
    /// or a typed not-found outcome carrying the offending method and path.
    #[tracing::instrument(level = "trace", skip(self, path), fields(method = %method, path = %path))]
    pub fn find(&self, method: HttpMethod, path: &str) -> Result<MatchResult<'_>, MatchError> {
        matcher::find_route(self, method, path)
    }
}
