/*
[INPUT]:  Address string and optional search refinements
[OUTPUT]: URL query parameters for the geocoding endpoint
[POS]:    Geocode service - query construction
[UPDATE]: When the geocoding API gains or changes query parameters
*/

use crate::http::{NcloudError, Result};

/// Response language for address fields
///
/// Default on the server side is Korean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Kor,
    Eng,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Kor => "kor",
            Lang::Eng => "eng",
        }
    }
}

/// Administrative-code filter for the result set
///
/// A query carries at most one filter kind; setting a new filter replaces
/// the previous one. Codes of the same kind are joined with `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Filter by administrative district code (HCODE)
    HCode(Vec<String>),
    /// Filter by legal district code (BCODE)
    BCode(Vec<String>),
}

impl Filter {
    /// Wire format: "HCODE@code1;code2"
    pub(crate) fn to_param(&self) -> String {
        match self {
            Filter::HCode(codes) => format!("HCODE@{}", codes.join(";")),
            Filter::BCode(codes) => format!("BCODE@{}", codes.join(";")),
        }
    }
}

/// Builder for a geocoding lookup
///
/// The address query is required; everything else is optional and
/// passed through as documented by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeQuery {
    query: String,
    coordinate: Option<(f64, f64)>,
    language: Option<Lang>,
    filter: Option<Filter>,
    page: Option<u32>,
    count: Option<u32>,
}

impl GeocodeQuery {
    /// Start a query for the given address
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            coordinate: None,
            language: None,
            filter: None,
            page: None,
            count: None,
        }
    }

    /// Set coordinates to be the center of the search
    ///
    /// If set, the server computes the distance from each result to the
    /// coordinates.
    pub fn coordinate(mut self, lon: f64, lat: f64) -> Self {
        self.coordinate = Some((lon, lat));
        self
    }

    /// Set the response language (server default: kor)
    pub fn language(mut self, lang: Lang) -> Self {
        self.language = Some(lang);
        self
    }

    /// Filter results by administrative district codes (HCODE)
    ///
    /// Replaces any previously set filter.
    pub fn hcode<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = Some(Filter::HCode(codes.into_iter().map(Into::into).collect()));
        self
    }

    /// Filter results by legal district codes (BCODE)
    ///
    /// Replaces any previously set filter.
    pub fn bcode<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = Some(Filter::BCode(codes.into_iter().map(Into::into).collect()));
        self
    }

    /// Result page to fetch (server default: 1)
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Results per page (server default: 10, range 1..=100)
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Assemble the URL query parameters, validating the required address
    pub(crate) fn to_params(&self) -> Result<Vec<(&'static str, String)>> {
        if self.query.is_empty() {
            return Err(NcloudError::InvalidQuery(
                "query address must not be empty".to_string(),
            ));
        }

        let mut params = vec![("query", self.query.clone())];
        if let Some((lon, lat)) = self.coordinate {
            params.push(("coordinate", format!("{lon:.6},{lat:.6}")));
        }
        if let Some(lang) = self.language {
            params.push(("language", lang.as_str().to_string()));
        }
        if let Some(filter) = &self.filter {
            params.push(("filter", filter.to_param()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(count) = self.count {
            params.push(("count", count.to_string()));
        }
        Ok(params)
    }
}
