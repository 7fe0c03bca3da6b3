// api.rs
// Wire models for the PokeAPI resources this client reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NamedAPIResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing. `next` and `previous` are full
/// cursor URLs, absent on the first and last page respectively.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LocationPage {
    pub count: i32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedAPIResource>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LocationAreaDetail {
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonEncounter {
    pub pokemon: NamedAPIResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonDetails {
    pub id: i32,
    pub name: String,
    // null for some newer generations
    pub base_experience: Option<i32>,
    pub height: i32,
    pub weight: i32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
    pub species: NamedAPIResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonStat {
    pub base_stat: i32,
    pub effort: i32,
    pub stat: NamedAPIResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonType {
    pub slot: i32,
    pub r#type: NamedAPIResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Species {
    pub capture_rate: u8,
}
