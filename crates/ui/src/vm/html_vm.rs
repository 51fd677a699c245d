use std::collections::HashSet;

/// Cleans lesson markup down to a small set of structural tags.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "u", "h3", "h4", "blockquote", "ul",
        "ol", "li", "table", "thead", "tbody", "tr", "th", "td", "hr",
    ]
    .into_iter()
    .collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}
