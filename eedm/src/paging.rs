use axum::http::header::LINK;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Uri};
use itertools::Itertools;
use serde::Deserialize;
use utoipa::IntoParams;

pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

#[derive(Debug, Default, Deserialize, IntoParams, PartialEq, Eq)]
#[into_params(parameter_in = Query)]
pub struct PagingParams {
    /// Index of the first item to return
    pub offset: Option<u64>,
    /// Maximum number of items to return, capped at the endpoint's page size
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub offset: u64,
    pub limit: u64,
}

impl Paging {
    pub const fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// A missing or zero limit takes the endpoint's default, which is also the
    /// largest page handed out.
    pub fn from_params(params: &PagingParams, default_limit: u64) -> Self {
        let default_limit = default_limit.max(1);
        let limit = match params.limit {
            None | Some(0) => default_limit,
            Some(limit) => limit.min(default_limit),
        };

        Self::new(params.offset.unwrap_or_default(), limit)
    }

    /// `X-Total-Count` and `Link` headers describing where this page sits.
    pub fn headers(&self, uri: &Uri, total: u64, include_self: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(X_TOTAL_COUNT, HeaderValue::from(total));

        if let Ok(links) = HeaderValue::from_str(&self.links(uri, total, include_self)) {
            headers.insert(LINK, links);
        }
        headers
    }

    fn links(&self, uri: &Uri, total: u64, include_self: bool) -> String {
        let path = uri.path();
        let retained = uri
            .query()
            .into_iter()
            .flat_map(|query| query.split('&'))
            .filter(|pair| !pair.is_empty() && !is_paging_pair(pair))
            .join("&");

        let link = |offset: u64, rel: &str| {
            let paging = format!("offset={offset}&limit={}", self.limit);
            if retained.is_empty() {
                format!("<{path}?{paging}>; rel=\"{rel}\"")
            } else {
                format!("<{path}?{retained}&{paging}>; rel=\"{rel}\"")
            }
        };

        let last = total.saturating_sub(1) / self.limit * self.limit;

        let mut links = Vec::with_capacity(5);
        if include_self {
            links.push(link(self.offset, "self"));
        }
        links.push(link(0, "first"));
        if self.offset > 0 {
            links.push(link(self.offset.saturating_sub(self.limit), "prev"));
        }
        if self.offset.saturating_add(self.limit) < total {
            links.push(link(self.offset + self.limit, "next"));
        }
        links.push(link(last, "last"));

        links.join(", ")
    }
}

fn is_paging_pair(pair: &str) -> bool {
    let name = pair.split('=').next().unwrap_or_default();
    name.eq_ignore_ascii_case("offset") || name.eq_ignore_ascii_case("limit")
}

/// One page of a collection along with the size of the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, Paging::new(0, 100))]
    #[case(Some(20), None, Paging::new(20, 100))]
    #[case(None, Some(0), Paging::new(0, 100))]
    #[case(None, Some(25), Paging::new(0, 25))]
    #[case(Some(5), Some(500), Paging::new(5, 100))]
    fn paging_from_params(
        #[case] offset: Option<u64>,
        #[case] limit: Option<u64>,
        #[case] expected: Paging,
    ) {
        let params = PagingParams { offset, limit };

        assert_eq!(expected, Paging::from_params(&params, 100));
    }

    fn link_header(paging: Paging, uri: &str, total: u64, include_self: bool) -> String {
        let headers = paging.headers(&uri.parse().unwrap(), total, include_self);
        headers[LINK].to_str().unwrap().to_owned()
    }

    #[test]
    fn total_count_header_is_set() {
        let headers = Paging::new(0, 10).headers(&"/employees".parse().unwrap(), 42, false);

        assert_eq!("42", headers[X_TOTAL_COUNT].to_str().unwrap());
    }

    #[test]
    fn middle_page_links_in_every_direction() {
        let links = link_header(Paging::new(10, 10), "/employees?offset=10&limit=10", 35, true);

        assert_eq!(
            "</employees?offset=10&limit=10>; rel=\"self\", \
             </employees?offset=0&limit=10>; rel=\"first\", \
             </employees?offset=0&limit=10>; rel=\"prev\", \
             </employees?offset=20&limit=10>; rel=\"next\", \
             </employees?offset=30&limit=10>; rel=\"last\"",
            links
        );
    }

    #[test]
    fn first_page_of_empty_collection() {
        let links = link_header(Paging::new(0, 100), "/employees", 0, false);

        assert_eq!(
            "</employees?offset=0&limit=100>; rel=\"first\", \
             </employees?offset=0&limit=100>; rel=\"last\"",
            links
        );
    }

    #[test]
    fn links_keep_other_query_parameters() {
        let links = link_header(
            Paging::new(0, 1),
            "/employees?criteria=%7B%7D&limit=1",
            2,
            false,
        );

        assert!(links.contains("</employees?criteria=%7B%7D&offset=1&limit=1>; rel=\"next\""));
    }
}
