//! # Beer Route Table
//!
//! The HTTP surface is a static table of [`Route`] descriptors. At startup
//! [`beer_routes`] walks the table and registers each entry with axum;
//! [`resolve`] runs the same table as an explicit matcher, backing
//! `beer-service routes --match <METHOD> <PATH>`.
//!
//! Path templates hold at most one `{id}` placeholder. When several templates
//! match, the one with the fewest placeholders wins. Matching is exact on
//! segments; a trailing slash is not folded away.

use std::fmt;

use axum::{
    http::Method,
    routing::{on, MethodFilter, MethodRouter},
    Router,
};

use super::beer_handlers::{
    create_beer, delete_beer, get_beer, list_beers, patch_beer, update_beer, SharedBeerState,
};

/// Collection path
pub const BEER_PATH: &str = "/api/v3/beer";

/// Single-resource path template
pub const BEER_PATH_ID: &str = "/api/v3/beer/{id}";

/// Query parameter filtering the collection by style
pub const BEER_STYLE_PARAM: &str = "beerStyle";

/// Methods used by the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl RouteMethod {
    pub fn as_method(&self) -> Method {
        match self {
            RouteMethod::Get => Method::GET,
            RouteMethod::Post => Method::POST,
            RouteMethod::Put => Method::PUT,
            RouteMethod::Patch => Method::PATCH,
            RouteMethod::Delete => Method::DELETE,
        }
    }

    fn filter(&self) -> MethodFilter {
        match self {
            RouteMethod::Get => MethodFilter::GET,
            RouteMethod::Post => MethodFilter::POST,
            RouteMethod::Put => MethodFilter::PUT,
            RouteMethod::Patch => MethodFilter::PATCH,
            RouteMethod::Delete => MethodFilter::DELETE,
        }
    }

    pub fn matches(&self, method: &Method) -> bool {
        self.as_method() == *method
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_method())
    }
}

/// Operation a route dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListBeers,
    GetBeer,
    CreateBeer,
    UpdateBeer,
    PatchBeer,
    DeleteBeer,
}

impl Endpoint {
    /// The axum handler bound to this endpoint, under `method`.
    fn method_router(self, method: RouteMethod) -> MethodRouter<SharedBeerState> {
        let filter = method.filter();
        match self {
            Endpoint::ListBeers => on(filter, list_beers),
            Endpoint::GetBeer => on(filter, get_beer),
            Endpoint::CreateBeer => on(filter, create_beer),
            Endpoint::UpdateBeer => on(filter, update_beer),
            Endpoint::PatchBeer => on(filter, patch_beer),
            Endpoint::DeleteBeer => on(filter, delete_beer),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::ListBeers => "list_beers",
            Endpoint::GetBeer => "get_beer",
            Endpoint::CreateBeer => "create_beer",
            Endpoint::UpdateBeer => "update_beer",
            Endpoint::PatchBeer => "patch_beer",
            Endpoint::DeleteBeer => "delete_beer",
        }
    }
}

/// One row of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub method: RouteMethod,
    pub path: &'static str,
    pub query: Option<&'static str>,
    pub endpoint: Endpoint,
}

impl Route {
    const fn new(
        method: RouteMethod,
        path: &'static str,
        query: Option<&'static str>,
        endpoint: Endpoint,
    ) -> Self {
        Self {
            method,
            path,
            query,
            endpoint,
        }
    }

    /// Number of placeholder segments; lower is more specific.
    fn placeholders(&self) -> usize {
        segments(self.path).filter(|s| is_placeholder(s)).count()
    }

    /// Match `path` against this route's template, capturing the id.
    fn capture(&self, path: &str) -> Option<Option<String>> {
        let mut template = segments(self.path);
        let mut actual = segments(path);
        let mut id = None;

        loop {
            match (template.next(), actual.next()) {
                (None, None) => return Some(id),
                (Some(t), Some(a)) if is_placeholder(t) => {
                    if a.is_empty() {
                        return None;
                    }
                    id = Some(a.to_string());
                }
                (Some(t), Some(a)) if t == a => {}
                _ => return None,
            }
        }
    }
}

/// Every beer route, in registration order
pub const BEER_ROUTES: &[Route] = &[
    Route::new(RouteMethod::Get, BEER_PATH, Some(BEER_STYLE_PARAM), Endpoint::ListBeers),
    Route::new(RouteMethod::Post, BEER_PATH, None, Endpoint::CreateBeer),
    Route::new(RouteMethod::Get, BEER_PATH_ID, None, Endpoint::GetBeer),
    Route::new(RouteMethod::Put, BEER_PATH_ID, None, Endpoint::UpdateBeer),
    Route::new(RouteMethod::Patch, BEER_PATH_ID, None, Endpoint::PatchBeer),
    Route::new(RouteMethod::Delete, BEER_PATH_ID, None, Endpoint::DeleteBeer),
];

/// Result of [`resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static Route,
    pub id: Option<String>,
}

/// Find the most specific route for `method` + `path`.
///
/// The query string, if any, must already be stripped from `path`.
pub fn resolve(method: &Method, path: &str) -> Option<RouteMatch> {
    BEER_ROUTES
        .iter()
        .filter(|route| route.method.matches(method))
        .filter_map(|route| route.capture(path).map(|id| RouteMatch { route, id }))
        .min_by_key(|m| m.route.placeholders())
}

/// Build the axum router from [`BEER_ROUTES`].
pub fn beer_routes(state: SharedBeerState) -> Router {
    BEER_ROUTES
        .iter()
        .fold(Router::new(), |router, route| {
            router.route(route.path, route.endpoint.method_router(route.method))
        })
        .with_state(state)
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.strip_prefix('/').unwrap_or(path).split('/')
}

fn is_placeholder(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}
