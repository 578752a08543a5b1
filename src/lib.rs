pub mod action;
pub mod loader;
pub mod matcher;
mod method;
pub mod path;
pub mod pattern;
mod registry;
mod router;
mod table;

pub use action::{ActionDescriptor, ActionError, parse_action};
pub use loader::{LoadError, LoadResult, load};
pub use matcher::{MatchError, MatchResult, RouteParams};
pub use method::HttpMethod;
pub use pattern::{ParamConstraint, PathSegment, PatternError, compile_template};
pub use registry::{ActionRegistry, RegistryError};
pub use router::Router;
pub use table::{CompiledRoute, RouteTable, ShadowWarning};
