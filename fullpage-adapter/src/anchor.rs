use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

/// Extracts the target id from an in-page anchor href (`"#s3"` -> `"s3"`).
///
/// Returns `None` for empty anchors (`"#"`) and for anything that is not an in-page anchor.
pub fn parse_anchor_href(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Builds one link target per href, preserving menu order.
///
/// Hrefs that are not in-page anchors map to an empty id, which never matches a section, so the
/// link keeps its position but can never become active.
pub fn link_targets<'a>(hrefs: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    hrefs
        .into_iter()
        .map(|href| parse_anchor_href(href).unwrap_or_default().to_owned())
        .collect()
}

/// Finds the position of the section an href points at.
pub fn section_index_for_href<K: AsRef<str>>(sections: &[K], href: &str) -> Option<usize> {
    let id = parse_anchor_href(href)?;
    sections.iter().position(|s| s.as_ref() == id)
}
