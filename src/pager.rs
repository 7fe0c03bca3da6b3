use crate::api::LocationPage;
use crate::cache::FetchCache;
use crate::client::PokeApi;
use crate::config::PokeapiConfig;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Cursor state over the paged location-area listing. Every page that has
/// been displayed stays cached by its cursor URL, so walking back and forth
/// never re-fetches.
pub struct LocationPager {
    current: String,
    next: Option<String>,
    previous: Option<String>,
    pages: FetchCache<LocationPage>,
}

impl LocationPager {
    pub fn new(config: &PokeapiConfig) -> Self {
        Self {
            current: format!(
                "{}/location-area/?offset=0&limit={}",
                config.base_url, config.page_size
            ),
            next: None,
            previous: None,
            pages: FetchCache::new(),
        }
    }

    /// Move one page in the given direction and return its location names.
    /// With no cursor available in that direction the current page is
    /// redisplayed rather than treated as an error.
    pub async fn advance(
        &mut self,
        api: &impl PokeApi,
        direction: Direction,
    ) -> Result<Vec<String>, AppError> {
        let target = match direction {
            Direction::Forward => self.next.clone(),
            Direction::Backward => self.previous.clone(),
        }
        .unwrap_or_else(|| self.current.clone());

        let page = match self.pages.get(&target) {
            Some(page) => page,
            None => {
                let page = api.fetch_location_page(&target).await?;
                self.pages.insert(target.clone(), page.clone());
                page
            }
        };

        // Rebind the cursors only once the page is known good.
        self.current = target;
        self.next = page.next.clone();
        self.previous = page.previous.clone();

        Ok(page.results.iter().map(|r| r.name.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{MockApi, page};

    const BASE: &str = "https://pokeapi.test/api/v2";

    fn config() -> PokeapiConfig {
        PokeapiConfig {
            base_url: BASE.to_string(),
            timeout: 5,
            page_size: 20,
        }
    }

    fn first_url() -> String {
        format!("{BASE}/location-area/?offset=0&limit=20")
    }

    fn second_url() -> String {
        format!("{BASE}/location-area/?offset=20&limit=20")
    }

    fn two_page_api() -> MockApi {
        let mut api = MockApi::default();
        api.pages.insert(
            first_url(),
            page(
                &["canalave-city-area", "eterna-city-area"],
                Some(&second_url()),
                None,
            ),
        );
        api.pages.insert(
            second_url(),
            page(
                &["pastoria-city-area", "sunyshore-city-area"],
                None,
                Some(&first_url()),
            ),
        );
        api
    }

    #[tokio::test]
    async fn forward_walk_then_back_serves_from_cache() {
        let api = two_page_api();
        let mut pager = LocationPager::new(&config());

        let first = pager.advance(&api, Direction::Forward).await.unwrap();
        assert_eq!(first, vec!["canalave-city-area", "eterna-city-area"]);

        let second = pager.advance(&api, Direction::Forward).await.unwrap();
        assert_eq!(second, vec!["pastoria-city-area", "sunyshore-city-area"]);
        assert_eq!(api.page_fetches.get(), 2);

        // Going back and forward again must not fetch anything new.
        let back = pager.advance(&api, Direction::Backward).await.unwrap();
        assert_eq!(back, first);
        let forward = pager.advance(&api, Direction::Forward).await.unwrap();
        assert_eq!(forward, second);
        assert_eq!(api.page_fetches.get(), 2);
    }

    #[tokio::test]
    async fn forward_without_next_redisplays_current_page() {
        let mut api = MockApi::default();
        api.pages
            .insert(first_url(), page(&["lone-area"], None, None));
        let mut pager = LocationPager::new(&config());

        let first = pager.advance(&api, Direction::Forward).await.unwrap();
        let again = pager.advance(&api, Direction::Forward).await.unwrap();

        assert_eq!(first, again);
        assert_eq!(api.page_fetches.get(), 1);
    }

    #[tokio::test]
    async fn backward_on_first_page_redisplays_current_page() {
        let api = two_page_api();
        let mut pager = LocationPager::new(&config());

        let first = pager.advance(&api, Direction::Forward).await.unwrap();
        let back = pager.advance(&api, Direction::Backward).await.unwrap();

        assert_eq!(first, back);
        assert_eq!(api.page_fetches.get(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_leaves_pager_state_unchanged() {
        let api = MockApi::default();
        let mut pager = LocationPager::new(&config());

        let err = pager.advance(&api, Direction::Forward).await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
        assert!(pager.pages.is_empty());
        assert_eq!(pager.current, first_url());

        // A later attempt against a healthy service starts from scratch.
        let api = two_page_api();
        let names = pager.advance(&api, Direction::Forward).await.unwrap();
        assert_eq!(names, vec!["canalave-city-area", "eterna-city-area"]);
    }

    #[tokio::test]
    async fn cached_pages_never_shrink() {
        let api = two_page_api();
        let mut pager = LocationPager::new(&config());

        pager.advance(&api, Direction::Forward).await.unwrap();
        assert_eq!(pager.pages.len(), 1);
        pager.advance(&api, Direction::Forward).await.unwrap();
        assert_eq!(pager.pages.len(), 2);

        for _ in 0..5 {
            pager.advance(&api, Direction::Backward).await.unwrap();
            pager.advance(&api, Direction::Forward).await.unwrap();
            assert_eq!(pager.pages.len(), 2);
        }
    }
}
