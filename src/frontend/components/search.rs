/// Community search input. Takes no parameters; everything is fixed here.
///
/// The form submits to the HTML results page at `action`; `endpoint` is the
/// JSON backend for typeahead lookups.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchBar {
    pub placeholder: &'static str,
    pub action: &'static str,
    pub endpoint: &'static str,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            placeholder: "Search communities...",
            action: "/search",
            endpoint: "/api/search",
        }
    }
}
