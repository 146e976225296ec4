//! The visible subset of the catalog is a pure function of the catalog,
//! the free-text query, and the active category selector.

use crate::catalog::{Category, Game};

/// Returns true when `game` should be visible for the given query and
/// category selector. Title matching is a case-insensitive substring
/// test; category matching is exact and case-sensitive. `None` is the
/// "All" wildcard.
pub fn matches(game: &Game, query: &str, category: Option<Category>) -> bool {
    matches_lowercase(game, &query.to_lowercase(), category)
}

/// Filters `catalog` down to the visible subset, preserving catalog
/// order. No sorting, no de-duplication.
pub fn visible<'a>(
    catalog: impl IntoIterator<Item = &'a Game>,
    query: &str,
    category: Option<Category>,
) -> Vec<&'a Game> {
    let query = query.to_lowercase();
    catalog
        .into_iter()
        .filter(|game| matches_lowercase(game, &query, category))
        .collect()
}

fn matches_lowercase(game: &Game, query: &str, category: Option<Category>) -> bool {
    let matches_query = game.title.to_lowercase().contains(query);
    let matches_category = category.map_or(true, |c| game.category.as_ref() == c.as_str());
    matches_query && matches_category
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn game(id: &str, title: &str, category: &str) -> Game {
        Game {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            ..Game::default()
        }
    }

    fn catalog() -> Vec<Game> {
        vec![
            game("1", "Block Blast", "Puzzle"),
            game("2", "Speed Race", "Sports"),
            game("3", "Neon Arcadia", "Arcade"),
        ]
    }

    fn ids(games: &[&Game]) -> Vec<Arc<str>> {
        games.iter().map(|g| g.id.clone()).collect()
    }

    #[test]
    fn empty_query_and_wildcard_is_identity() {
        let catalog = catalog();
        let all = visible(&catalog, "", None);
        assert_eq!(ids(&all), ["1".into(), "2".into(), "3".into()]);
    }

    #[test]
    fn preserves_catalog_order() {
        let catalog = catalog();
        let hits = visible(&catalog, "a", None);
        let positions: Vec<_> = hits
            .iter()
            .map(|hit| catalog.iter().position(|g| g.id == hit.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn query_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(
            ids(&visible(&catalog, "ARC", None)),
            ids(&visible(&catalog, "arc", None)),
        );
        assert_eq!(ids(&visible(&catalog, "bLoCk", None)), ["1".into()]);
    }

    #[test]
    fn category_match_is_exact() {
        let catalog = catalog();
        let arcade = visible(&catalog, "", Some(Category::Arcade));
        assert_eq!(ids(&arcade), ["3".into()]);

        // A "Puzzle" entry never shows up under "Arcade", query or not.
        assert!(visible(&catalog, "block", Some(Category::Arcade)).is_empty());

        // Case-sensitive: a lowercase category string is a different category.
        let catalog = vec![game("9", "Block Blast", "puzzle")];
        assert!(visible(&catalog, "", Some(Category::Puzzle)).is_empty());
    }

    #[test]
    fn query_and_category_combine() {
        let catalog = catalog();
        assert_eq!(ids(&visible(&catalog, "bl", None)), ["1".into()]);
        assert_eq!(
            ids(&visible(&catalog, "", Some(Category::Sports))),
            ["2".into()],
        );
    }

    #[test]
    fn empty_catalog_yields_empty_subset() {
        assert!(visible(&[], "", None).is_empty());
        assert!(visible(&[], "race", Some(Category::Sports)).is_empty());
    }

    #[test]
    fn absent_title_fails_the_match() {
        let catalog = vec![game("7", "", "Arcade")];
        assert!(visible(&catalog, "race", None).is_empty());
        // The empty title still contains the empty query.
        assert_eq!(visible(&catalog, "", None).len(), 1);
    }

    #[test]
    fn predicate_agrees_with_visible() {
        let catalog = catalog();
        for g in &catalog {
            assert_eq!(
                matches(g, "Ar", Some(Category::Arcade)),
                visible(&catalog, "Ar", Some(Category::Arcade))
                    .iter()
                    .any(|hit| hit.id == g.id),
            );
        }
    }
}
