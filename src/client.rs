use crate::api::{LocationAreaDetail, LocationPage, PokemonDetails, Species};
use crate::config::PokeapiConfig;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// The remote-service seam. The pager, explorer, and pokedex reach PokeAPI
/// through this trait so tests can substitute canned responses.
#[allow(async_fn_in_trait)]
pub trait PokeApi {
    async fn fetch_location_page(&self, url: &str) -> Result<LocationPage, AppError>;
    async fn fetch_location_area(&self, location: &str) -> Result<LocationAreaDetail, AppError>;
    async fn fetch_pokemon(&self, name: &str) -> Result<PokemonDetails, AppError>;
    async fn fetch_species(&self, url: &str) -> Result<Species, AppError>;
}

pub struct HttpPokeApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPokeApi {
    pub fn new(config: &PokeapiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout as u64))
            .build()
            .map_err(|e| AppError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        tracing::debug!("Fetching from URL: {}", url);

        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to make HTTP request to {}: {}", url, e);
            AppError::Network(format!("request to {url} failed: {e}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Request to {} failed with status: {}", url, status);
            return Err(AppError::Network(format!("{url} returned status {status}")));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse JSON response from {}: {}", url, e);
            AppError::Decode(format!("unexpected response from {url}: {e}"))
        })
    }
}

impl PokeApi for HttpPokeApi {
    async fn fetch_location_page(&self, url: &str) -> Result<LocationPage, AppError> {
        self.get_json(url).await
    }

    async fn fetch_location_area(&self, location: &str) -> Result<LocationAreaDetail, AppError> {
        let url = format!("{}/location-area/{}", self.base_url, location);
        self.get_json(&url).await
    }

    async fn fetch_pokemon(&self, name: &str) -> Result<PokemonDetails, AppError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.get_json(&url).await
    }

    async fn fetch_species(&self, url: &str) -> Result<Species, AppError> {
        self.get_json(url).await
    }
}
