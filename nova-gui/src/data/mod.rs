mod config;
mod promise;

pub use crate::data::{
    config::{Config, DEFAULT_CATALOG_URL},
    promise::Promise,
};

use std::sync::Arc;

use druid::{im::Vector, Data, Lens};

use nova_core::{
    catalog::{Category, Game},
    filter,
};

use crate::error::Error;

#[derive(Clone, Data, Lens)]
pub struct AppState {
    pub route: Nav,
    pub config: Config,
    pub catalog: Promise<Vector<Arc<Game>>>,
    pub query: String,
    #[data(same_fn = "PartialEq::eq")]
    pub category: Option<Category>,
}

impl AppState {
    pub fn default_with_config(config: Config) -> Self {
        Self {
            route: Nav::Browse,
            config,
            catalog: Promise::Empty,
            query: "".into(),
            category: None,
        }
    }
}

impl AppState {
    pub fn play(&mut self, game: Arc<Game>) {
        self.route = Nav::Playing(game);
    }

    pub fn navigate_home(&mut self) {
        self.route = Nav::Browse;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    pub fn playing(&self) -> Option<&Arc<Game>> {
        match &self.route {
            Nav::Playing(game) => Some(game),
            Nav::Browse => None,
        }
    }

    /// Applies the outcome of a catalog load. Failures degrade to an
    /// empty catalog; the browse view then shows the empty state.
    pub fn catalog_loaded(&mut self, result: Result<Vector<Arc<Game>>, Error>) {
        match result {
            Ok(games) => {
                self.catalog.resolve(games);
            }
            Err(err) => {
                log::error!("error loading games: {err}");
                self.catalog.resolve(Vector::new());
            }
        }
    }

    /// The visible subset, computed fresh from (catalog, query, category)
    /// on every call. Nothing else feeds the filter.
    pub fn visible_games(&self) -> Vector<Arc<Game>> {
        match self.catalog.resolved() {
            Some(games) => games
                .iter()
                .filter(|game| filter::matches(game.as_ref(), &self.query, self.category))
                .cloned()
                .collect(),
            None => Vector::new(),
        }
    }
}

#[derive(Clone, Debug, Data, Eq, PartialEq, Hash)]
pub enum Nav {
    Browse,
    Playing(Arc<Game>),
}

impl Nav {
    pub fn title(&self) -> String {
        match self {
            Nav::Browse => "Games".to_string(),
            Nav::Playing(game) => game.title.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, title: &str, category: &str) -> Arc<Game> {
        Arc::new(Game {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            ..Game::default()
        })
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default_with_config(Config::default());
        state.catalog.resolve(Vector::from(vec![
            game("1", "Block Blast", "Puzzle"),
            game("2", "Speed Race", "Sports"),
        ]));
        state
    }

    #[test]
    fn play_and_back_drive_the_route() {
        let mut state = loaded_state();
        assert_eq!(state.route, Nav::Browse);
        assert!(state.playing().is_none());

        let selected = game("1", "Block Blast", "Puzzle");
        state.play(selected.clone());
        assert_eq!(state.route, Nav::Playing(selected.clone()));
        assert_eq!(state.playing(), Some(&selected));

        state.navigate_home();
        assert_eq!(state.route, Nav::Browse);
        assert!(state.playing().is_none());
    }

    #[test]
    fn navigate_home_while_browsing_is_a_noop() {
        let mut state = loaded_state();
        state.navigate_home();
        assert_eq!(state.route, Nav::Browse);
    }

    #[test]
    fn visible_games_follow_query_and_category() {
        let mut state = loaded_state();
        state.query = "bl".into();
        let visible = state.visible_games();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_ref(), "1");

        state.query = "".into();
        state.set_category(Some(Category::Sports));
        let visible = state.visible_games();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_ref(), "2");
    }

    #[test]
    fn failed_load_resolves_an_empty_catalog() {
        let mut state = AppState::default_with_config(Config::default());
        state.catalog.defer();
        assert!(state.catalog.is_deferred());

        state.catalog_loaded(Err(Error::FetchError("connection refused".into())));
        assert!(state.catalog.is_resolved());
        assert!(state.visible_games().is_empty());
    }

    #[test]
    fn unloaded_catalog_has_no_visible_games() {
        let state = AppState::default_with_config(Config::default());
        assert!(state.visible_games().is_empty());
    }
}
