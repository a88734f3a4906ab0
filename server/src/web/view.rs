/// The two page layouts, keyed directly off the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Map,
}

impl View {
    /// Pure path-to-view mapping; any unrecognized path falls back to `Home`.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/map" => View::Map,
            _ => View::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_to_home() {
        assert_eq!(View::from_path("/"), View::Home);
        assert_eq!(View::from_path(""), View::Home);
    }

    #[test]
    fn map_path_resolves_to_map() {
        assert_eq!(View::from_path("/map"), View::Map);
        assert_eq!(View::from_path("/map/"), View::Map);
    }

    #[test]
    fn unrecognized_paths_fall_back_to_home() {
        assert_eq!(View::from_path("/gallery"), View::Home);
        assert_eq!(View::from_path("/map/extra"), View::Home);
        assert_eq!(View::from_path("/admin"), View::Home);
    }
}
