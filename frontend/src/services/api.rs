use gloo::net::http::Request;
use shared::{ColorPalette, PromoListResponse, SaveMethod, SavePromoRequest, SavePromoResponse, SaveRoute};

/// API client for communicating with the promo backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Get the list of promos from the backend
    pub async fn list_promos(&self) -> Result<PromoListResponse, String> {
        let url = format!("{}/promos", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<PromoListResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse promos: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch promos: {}", e)),
        }
    }

    /// Create or update a promo along the given route.
    ///
    /// The body is parsed as a `SavePromoResponse` regardless of the HTTP
    /// status: the backend reports validation failures structurally with
    /// `success: false`, so only transport and parse problems map to `Err`.
    pub async fn save_promo(
        &self,
        route: &SaveRoute,
        request: &SavePromoRequest,
    ) -> Result<SavePromoResponse, String> {
        let url = format!("{}{}", self.base_url, route.path);
        let builder = match route.method {
            SaveMethod::Post => Request::post(&url),
            SaveMethod::Put => Request::put(&url),
        };

        match builder
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => match response.json::<SavePromoResponse>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse response: {}", e)),
            },
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Fetch the active color palette. Best effort: callers keep their
    /// fallback color when this fails.
    pub async fn get_active_palette(&self) -> Result<ColorPalette, String> {
        let url = format!("{}/palette/active", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<ColorPalette>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse palette: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch palette: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
