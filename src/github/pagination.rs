//! `Link` header pagination.
//!
//! GitHub advertises further pages with an RFC 8288 header such as
//! `<https://api.github.com/repositories/1/releases?per_page=100&page=2>; rel="next", <...>; rel="last"`.

use url::Url;

/// Page number of the `rel="next"` link, if any.
///
/// A missing relation, an unparseable URL or a URL without a numeric `page`
/// query parameter all mean there is no next page.
pub fn next_page(link_header: &str) -> Option<u32> {
    link_header.split(',').find_map(|link| {
        let mut parts = link.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            let param = param.trim();
            param
                .strip_prefix("rel=")
                .map(|rel| rel.trim_matches('"').split_whitespace().any(|r| r == "next"))
                .unwrap_or(false)
        });
        if !is_next {
            return None;
        }

        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        let url = Url::parse(target).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse::<u32>().ok())
    })
}
