use indexmap::IndexMap;

/// Attribute carrying a declarative navigation target.
pub const NAVIGATION_ATTRIBUTE: &str = "data-href";

/// The parts of a DOM element click delegation looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub attributes: IndexMap<String, String>,
    pub disabled: bool,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Resolve a click to a navigation target.
///
/// `path` runs from the clicked element outward to the root. Only the closest
/// element carrying [`NAVIGATION_ATTRIBUTE`] is considered; if it is disabled
/// or its target is empty, the click does not navigate.
pub fn resolve_navigation<'a, I>(path: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a Element>,
{
    let target = path
        .into_iter()
        .find(|el| el.attributes.contains_key(NAVIGATION_ATTRIBUTE))?;
    if target.disabled {
        return None;
    }
    target
        .attribute(NAVIGATION_ATTRIBUTE)
        .filter(|href| !href.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_target_wins() {
        let icon = Element::new();
        let button = Element::new().with_attribute("data-href", "/jobs/42");
        let card = Element::new().with_attribute("data-href", "/jobs");
        assert_eq!(resolve_navigation([&icon, &button, &card]), Some("/jobs/42"));
    }

    #[test]
    fn disabled_target_blocks_outer_targets() {
        let button = Element::new().with_attribute("data-href", "/apply").disabled();
        let card = Element::new().with_attribute("data-href", "/jobs");
        assert_eq!(resolve_navigation([&button, &card]), None);
    }

    #[test]
    fn empty_or_missing_target() {
        let empty = Element::new().with_attribute("data-href", "");
        assert_eq!(resolve_navigation([&empty]), None);
        let plain = Element::new().with_attribute("href", "/x");
        assert_eq!(resolve_navigation([&plain]), None);
        assert_eq!(resolve_navigation(std::iter::empty()), None);
    }
}
