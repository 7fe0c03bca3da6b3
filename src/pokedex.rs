use crate::api::PokemonDetails;
use crate::client::PokeApi;
use crate::error::AppError;
use rand::Rng;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A creature's record as held in the pokedex: the detail resource merged
/// with the species capture rate, plus whether a catch roll has landed.
#[derive(Debug, Clone)]
pub struct CreatureRecord {
    pub id: i32,
    pub name: String,
    pub height: i32,
    pub weight: i32,
    pub base_experience: i32,
    pub stats: Vec<(String, i32)>,
    pub types: Vec<String>,
    pub capture_rate: u8,
    pub caught: bool,
}

impl CreatureRecord {
    fn from_details(details: PokemonDetails, capture_rate: u8) -> Self {
        Self {
            id: details.id,
            name: details.name,
            height: details.height,
            weight: details.weight,
            base_experience: details.base_experience.unwrap_or(0),
            stats: details
                .stats
                .into_iter()
                .map(|s| (s.stat.name, s.base_stat))
                .collect(),
            types: details.types.into_iter().map(|t| t.r#type.name).collect(),
            capture_rate,
            caught: false,
        }
    }
}

/// Inclusive bound: rate 0 still catches on a draw of exactly 0, rate 255
/// catches on every draw.
fn roll_succeeds(draw: u8, capture_rate: u8) -> bool {
    draw <= capture_rate
}

/// The running collection of seen and caught creatures. Process-lifetime
/// state; nothing is persisted across runs.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: HashMap<String, CreatureRecord>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Throw a pokeball at the named creature. The first attempt fetches the
    /// creature's detail and its species capture rate and records it as seen;
    /// the record is reused for every later attempt. An entry is only created
    /// once both fetches have succeeded, so a failed attempt leaves the
    /// collection untouched. Returns whether this throw caught it.
    pub async fn catch(
        &mut self,
        api: &impl PokeApi,
        rng: &mut impl Rng,
        name: &str,
    ) -> Result<bool, AppError> {
        let record = match self.entries.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let details = api.fetch_pokemon(name).await?;
                let species = api.fetch_species(&details.species.url).await?;
                tracing::debug!(
                    "Recorded {} with capture rate {}",
                    name,
                    species.capture_rate
                );
                entry.insert(CreatureRecord::from_details(details, species.capture_rate))
            }
        };

        let draw: u8 = rng.random();
        let caught = roll_succeeds(draw, record.capture_rate);
        tracing::debug!(
            "Catch roll for {}: drew {} against rate {}",
            name,
            draw,
            record.capture_rate
        );
        if caught {
            record.caught = true;
        }
        Ok(caught)
    }

    pub fn get(&self, name: &str) -> Option<&CreatureRecord> {
        self.entries.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CreatureRecord)> {
        self.entries.iter()
    }
}
