//! URL building utilities for API endpoints

use crate::data_fetcher::endpoint::Endpoint;

/// Builds the absolute URL for an endpoint.
/// Trailing slashes on the domain are dropped so the joined URL never
/// contains `//` between the domain and the endpoint path.
///
/// # Arguments
/// * `api_domain` - The base API domain, e.g. `https://ergast.com`
/// * `endpoint` - The endpoint to resolve
///
/// # Example
/// ```
/// use f1_ergast::data_fetcher::api::build_endpoint_url;
/// use f1_ergast::data_fetcher::{Endpoint, Season};
///
/// let url = build_endpoint_url("https://ergast.com/", &Endpoint::RaceResults(Season::Year(2015)));
/// assert_eq!(url, "https://ergast.com/api/f1/2015/results.json");
/// ```
pub fn build_endpoint_url(api_domain: &str, endpoint: &Endpoint) -> String {
    format!(
        "{}{}",
        api_domain.trim_end_matches('/'),
        endpoint.resolve_path()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::season::Season;

    #[test]
    fn test_build_endpoint_url() {
        assert_eq!(
            build_endpoint_url("https://ergast.com", &Endpoint::Seasons),
            "https://ergast.com/api/f1/seasons.json"
        );
        assert_eq!(
            build_endpoint_url(
                "http://localhost:8080//",
                &Endpoint::Circuits(Some(Season::Year(1998)))
            ),
            "http://localhost:8080/api/f1/1998/circuits.json"
        );
    }
}
