use std::time::Duration;

use log::info;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Method,
};

use super::{errors::RaspError, models::Config};

pub const NAVIGATOR_PATH: &str = "/Schedule/Navigator";
pub const SCHEDULE_CARD_PATH: &str = "/Schedule/ScheduleCard";
pub const DETAILS_PATH: &str = "/Schedule/GetDetails";

/// Without this header the site answers with a full page instead of a fragment.
pub const AJAX_HEADER: (&str, &str) = ("x-requested-with", "XMLHttpRequest");

/// A trait, necessary for every entity that will be used for talking to the timetable site.
///
/// `params` go to the query string for GET and to the form body for POST.
/// A non-success status is reported as [`RaspError::UnreachableOrigin`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn fetch(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String, RaspError>;
}

/// The real site, reached over HTTP.
#[derive(Debug, Clone)]
pub struct Origin {
    client: Client,
    base_url: String,
}

impl Origin {
    pub fn new(client: Client, base_url: &str) -> Self {
        Origin {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Builds a client that always sends the AJAX marker header.
    pub fn from_config(config: &Config) -> Result<Self, RaspError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(AJAX_HEADER.0),
            HeaderValue::from_static(AJAX_HEADER.1),
        );
        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Origin::new(builder.build()?, &config.base_url))
    }
}

/// Allows Origin to fetch fragments via its inner reqwest client.
impl Transport for Origin {
    async fn fetch(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<String, RaspError> {
        let url = format!("{}{}", self.base_url, path);
        info!("{} {} {:?}", method, url, params);
        let request = if method == Method::GET {
            self.client.get(&url).query(params)
        } else {
            self.client.request(method, &url).form(params)
        };
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RaspError::UnreachableOrigin { url, status });
        }
        Ok(response.text().await?)
    }
}
