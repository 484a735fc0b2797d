//! In-page anchor scrolling helpers.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// What a click on an in-page link does. Both variants suppress the
/// browser's own jump and hash rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashLink<'a> {
    /// Bare `#`: nothing scrolls.
    Inert,
    /// Scroll to the element with this id, if it exists.
    Scroll(&'a str),
}

/// Classify an `href`; `None` for links that leave the page.
pub fn hash_link(href: &str) -> Option<HashLink<'_>> {
    href.starts_with('#')
        .then(|| hash_target(href).map_or(HashLink::Inert, HashLink::Scroll))
}

/// Element id referenced by an in-page `href`, if any.
pub fn hash_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that places a target below the sticky header.
pub fn scroll_top(target_offset_top: f64, header_height: f64, gap: f64) -> f64 {
    (target_offset_top - header_height - gap).max(0.0)
}
