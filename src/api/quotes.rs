//! Quotes Service
//!
//! Search URL construction and the search request.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{get_text, parse_json, QuotesError};
use crate::models::{Quote, SearchParams};

const SEARCH_PATH: &str = "/quotes/random";

/// Characters that would break a query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'`');

/// Build `{base}/quotes/random?tags={category}&limit={quantity}`.
///
/// The category is percent-encoded so it cannot add query parameters.
/// The base and quantity are used verbatim, an empty base yields a relative URL.
pub fn build_search_url(base: &str, params: &SearchParams) -> String {
    format!(
        "{}{}?tags={}&limit={}",
        base,
        SEARCH_PATH,
        utf8_percent_encode(&params.category, QUERY_VALUE),
        params.quantity
    )
}

pub async fn search_quotes(base: &str, params: &SearchParams) -> Result<Vec<Quote>, QuotesError> {
    parse_quotes(&get_text(&build_search_url(base, params)).await?)
}

pub fn parse_quotes(body: &str) -> Result<Vec<Quote>, QuotesError> {
    parse_json(body)
}
