use std::collections::BTreeMap;

/// Outbound routes keyed by start location.
///
/// At most one route leaves any start location; adding another overwrites it.
/// Iteration is ascending by start location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `start -> end`, replacing any previous route from `start`.
    ///
    /// Returns the end location that was replaced, if any.
    pub fn add_route(&mut self, start: impl Into<String>, end: impl Into<String>) -> Option<String> {
        self.routes.insert(start.into(), end.into())
    }

    /// `(start, end)` pairs sorted by start. Each call walks the current state.
    pub fn list_routes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.routes.iter().map(|(s, e)| (s.as_str(), e.as_str()))
    }

    pub fn destination(&self, start: &str) -> Option<&str> {
        self.routes.get(start).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
