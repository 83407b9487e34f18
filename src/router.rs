//! Routing capability: absolute path resolution and route lookup.
//!
//! The engine treats routing as a host capability. [`Router`] is the seam;
//! [`RouteTable`] is a small pattern-based implementation good enough for
//! applications that declare their routes up front.

use crate::context::RenderContext;

/// Routing capability exposed to attribute value transforms.
pub trait Router {
    /// Resolve `path` into its application-absolute form.
    ///
    /// The default resolves relative paths against the context location and
    /// leaves anything carrying a URL scheme untouched.
    fn absolute(&self, path: &str, context: &RenderContext<'_>) -> String {
        resolve_path(path, context.location())
    }

    /// Look up the route handling an absolute `path`, if any.
    fn get_route(&self, path: &str) -> Option<RouteMatch<'_>>;
}

/// Resolve `path` against `base`, normalising `.`, `..` and empty segments.
///
/// Paths with a scheme (`https:`, `mailto:`) or a protocol-relative prefix
/// (`//host`) are returned as-is. Query strings and fragments are preserved.
pub fn resolve_path(path: &str, base: &str) -> String {
    if path.starts_with("//") || has_scheme(path) {
        return path.to_owned();
    }

    let (target, suffix) = split_suffix(path);
    let joined = if target.starts_with('/') {
        target.to_owned()
    } else if target.is_empty() {
        base.to_owned()
    } else {
        format!("{base}/{target}")
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    format!("/{}{}", segments.join("/"), suffix)
}

/// Split a path into its path part and its `?query#fragment` suffix.
fn split_suffix(path: &str) -> (&str, &str) {
    let at = path.find(['?', '#']).unwrap_or(path.len());
    path.split_at(at)
}

/// Whether `path` starts with an RFC 3986 scheme followed by `:`.
fn has_scheme(path: &str) -> bool {
    let Some(colon) = path.find(':') else {
        return false;
    };
    let scheme = &path[..colon];
    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `:name` captures one path segment.
    Param(String),
}

/// A declared route such as `/users/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: String,
    segments: Vec<Segment>,
}

impl Route {
    /// Parse a route pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let segments = pattern
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_owned()),
                None => Segment::Literal(segment.to_owned()),
            })
            .collect();
        Self { pattern, segments }
    }

    /// The pattern this route was declared with.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match an absolute path, returning captured parameters on success.
    fn capture(&self, path: &str) -> Option<Vec<(String, String)>> {
        let (path, _) = split_suffix(path);
        if !path.starts_with('/') {
            return None;
        }

        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.push((name.clone(), part.to_owned())),
            }
        }
        Some(params)
    }
}

/// A successful route lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    /// Captured `:name` parameters in pattern order.
    pub params: Vec<(String, String)>,
}

impl RouteMatch<'_> {
    /// Value of a captured parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Router over a fixed list of route patterns. First declared match wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty table. No path resolves to a route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a route (builder).
    pub fn route(mut self, pattern: impl Into<String>) -> Self {
        self.routes.push(Route::new(pattern));
        self
    }

    /// Declared routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Router for RouteTable {
    fn get_route(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            route
                .capture(path)
                .map(|params| RouteMatch { route, params })
        })
    }
}
