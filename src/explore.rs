use crate::api::LocationAreaDetail;
use crate::cache::FetchCache;
use crate::client::PokeApi;
use crate::error::AppError;

/// Serves a location's creature encounters, fetching each location at most
/// once per process lifetime.
pub struct LocationExplorer {
    areas: FetchCache<LocationAreaDetail>,
}

impl LocationExplorer {
    pub fn new() -> Self {
        Self {
            areas: FetchCache::new(),
        }
    }

    /// Names of the creatures encountered at the given location name or id.
    pub async fn explore(
        &mut self,
        api: &impl PokeApi,
        location: &str,
    ) -> Result<Vec<String>, AppError> {
        let area = match self.areas.get(location) {
            Some(area) => area,
            None => {
                let area = api.fetch_location_area(location).await?;
                self.areas.insert(location.to_string(), area.clone());
                area
            }
        };

        Ok(area
            .pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.clone())
            .collect())
    }
}

impl Default for LocationExplorer {
    fn default() -> Self {
        Self::new()
    }
}
