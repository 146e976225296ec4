use std::sync::Arc;

use druid::{im::Vector, Selector};

use nova_core::catalog::{Category, Game};

use crate::error::Error;

// Navigation

pub const PLAY_GAME: Selector<Arc<Game>> = Selector::new("app.play-game");
pub const NAVIGATE_HOME: Selector = Selector::new("app.navigate-home");

// Catalog

pub const LOAD_CATALOG: Selector = Selector::new("app.load-catalog");
pub const UPDATE_CATALOG: Selector<Result<Vector<Arc<Game>>, Error>> =
    Selector::new("app.update-catalog");
pub const SET_CATEGORY: Selector<Option<Category>> = Selector::new("app.set-category");

// Player

pub const RELOAD_APP: Selector = Selector::new("app.reload");
