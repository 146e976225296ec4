use std::{fmt, io::Read, sync::Arc};

use serde::{Deserialize, Deserializer};
use url::Url;

use crate::{error::Error, util};

/// One playable entry of the catalog. Created by the catalog resource,
/// never mutated; identity is the `id` field.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(default)]
pub struct Game {
    #[serde(deserialize_with = "deserialize_null_arc_str")]
    pub id: Arc<str>,
    #[serde(deserialize_with = "deserialize_null_arc_str")]
    pub title: Arc<str>,
    #[serde(deserialize_with = "deserialize_null_arc_str")]
    pub category: Arc<str>,
    #[serde(deserialize_with = "deserialize_null_arc_str")]
    pub description: Arc<str>,
    #[serde(deserialize_with = "deserialize_null_arc_str")]
    pub thumbnail: Arc<str>,
    #[serde(rename = "iframeUrl", deserialize_with = "deserialize_null_arc_str")]
    pub iframe_url: Arc<str>,
    #[serde(rename = "isFeatured")]
    pub is_featured: bool,
}

/// The fixed category set. "All" is not a category, it is the absence of a
/// selector; use `Option<Category>` with `None` as the wildcard.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Action,
    Puzzle,
    Arcade,
    Sports,
    Strategy,
}

impl Category {
    pub fn all() -> [Category; 5] {
        [
            Self::Action,
            Self::Puzzle,
            Self::Arcade,
            Self::Sports,
            Self::Strategy,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Puzzle => "Puzzle",
            Self::Arcade => "Arcade",
            Self::Sports => "Sports",
            Self::Strategy => "Strategy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for the static catalog resource. One fetch per session; the
/// resource shape is trusted, malformed entries degrade to empty fields.
pub struct CatalogClient {
    agent: ureq::Agent,
    catalog_url: Url,
}

impl CatalogClient {
    pub fn new(catalog_url: &str, proxy_url: Option<&str>) -> Result<Self, Error> {
        let catalog_url = Url::parse(catalog_url)?;
        let agent = util::default_agent_builder(proxy_url).build().into();
        Ok(Self { agent, catalog_url })
    }

    pub fn fetch(&self) -> Result<Vec<Game>, Error> {
        log::debug!("fetching catalog from {}", self.catalog_url);
        let response = self.agent.get(self.catalog_url.as_str()).call()?;
        let mut body = Vec::new();
        response.into_body().into_reader().read_to_end(&mut body)?;
        let games = serde_json::from_slice(&body)?;
        Ok(games)
    }
}

fn deserialize_null_arc_str<'de, D>(deserializer: D) -> Result<Arc<str>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<Arc<str>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_field_names() {
        let game: Game = serde_json::from_str(
            r#"{
                "id": "1",
                "title": "Block Blast",
                "category": "Puzzle",
                "description": "Clear the board.",
                "thumbnail": "https://img.example/1.png",
                "iframeUrl": "https://play.example/1",
                "isFeatured": true
            }"#,
        )
        .unwrap();
        assert_eq!(game.id.as_ref(), "1");
        assert_eq!(game.iframe_url.as_ref(), "https://play.example/1");
        assert!(game.is_featured);
    }

    #[test]
    fn tolerates_missing_and_null_fields() {
        let game: Game = serde_json::from_str(r#"{"id": "2", "title": null}"#).unwrap();
        assert_eq!(game.id.as_ref(), "2");
        assert_eq!(game.title.as_ref(), "");
        assert_eq!(game.category.as_ref(), "");
        assert!(!game.is_featured);
    }

    #[test]
    fn rejects_invalid_catalog_url() {
        assert!(CatalogClient::new("not a url", None).is_err());
    }

    #[test]
    fn category_names_are_canonical() {
        let names: Vec<_> = Category::all().iter().map(Category::as_str).collect();
        assert_eq!(names, ["Action", "Puzzle", "Arcade", "Sports", "Strategy"]);
    }
}
