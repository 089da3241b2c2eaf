//! Logical page paths

/// Paths accepted by `Router::on_navigate`
#[derive(Debug, Clone, Copy)]
pub struct RoutesPath {
    pub bills: &'static str,
}

pub const ROUTES_PATH: RoutesPath = RoutesPath {
    bills: "#employee/bills",
};

/// A page the router knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Bills,
}

impl Route {
    /// Resolve a path, `None` for unknown paths
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim() {
            p if p == ROUTES_PATH.bills => Some(Route::Bills),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Bills => ROUTES_PATH.bills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_paths() {
        assert_eq!(Route::from_path("#employee/bills"), Some(Route::Bills));
        assert_eq!(Route::from_path(Route::Bills.path()), Some(Route::Bills));
        assert_eq!(Route::from_path("#employee/bill/new"), None);
        assert_eq!(Route::from_path(""), None);
    }
}
