//! The merge pipeline: four raw tables in, one denormalized record set out.
//!
//! The stages run in a fixed order; moving a filter changes which rows
//! survive, so the order itself is part of the contract.

use super::catalog::Catalog;
use super::error::CatalogError;
use super::record::MovieRecord;
use super::sources::{
    read_person_records, read_principal_records, read_rating_records, read_title_records,
    CatalogSources, RawTitleRecord,
};
use std::collections::HashMap;
use tracing::info;

/// A title that survived the movie/year/genre filters.
struct FilteredTitle {
    id: String,
    title: String,
    year: i32,
    genres: Vec<String>,
}

/// A filtered title joined with its rating row.
struct RatedTitle {
    id: String,
    title: String,
    year: i32,
    genres: Vec<String>,
    rating: f64,
    votes: u64,
}

/// Build the catalog from the four source dumps.
///
/// Pure function of the sources and the threshold: identical inputs yield
/// row-for-row identical catalogs. Fails fast with
/// [`CatalogError::MissingSources`] listing every unreadable path before any
/// parsing starts.
pub fn load_and_merge(
    sources: &CatalogSources,
    rating_threshold: f64,
) -> Result<Catalog, CatalogError> {
    sources.check_readable()?;

    info!("Loading {}...", sources.title_basics.display());
    let titles = read_title_records(&sources.title_basics)?;
    let movies: Vec<FilteredTitle> = titles.into_iter().filter_map(filter_title).collect();
    info!("{} titles survive the movie filters.", movies.len());

    info!("Loading {}...", sources.title_ratings.display());
    let ratings = read_rating_records(&sources.title_ratings)?;
    let ratings_by_id: HashMap<String, (f64, u64)> = ratings
        .into_iter()
        .map(|r| (r.id, (r.rating, r.votes)))
        .collect();

    // Inner join: a title with no rating row at all is dropped here, along
    // with everything below the threshold.
    let rated: Vec<RatedTitle> = movies
        .into_iter()
        .filter_map(|movie| {
            let (rating, votes) = *ratings_by_id.get(&movie.id)?;
            (rating >= rating_threshold).then_some(RatedTitle {
                id: movie.id,
                title: movie.title,
                year: movie.year,
                genres: movie.genres,
                rating,
                votes,
            })
        })
        .collect();
    info!(
        "{} titles rated {:.1} or higher.",
        rated.len(),
        rating_threshold
    );

    info!("Loading {}...", sources.title_principals.display());
    let principals = read_principal_records(&sources.title_principals)?;
    let mut credits_by_title: HashMap<String, Vec<String>> = HashMap::new();
    for principal in principals
        .into_iter()
        .filter(|p| p.category == "actor" || p.category == "actress")
    {
        credits_by_title
            .entry(principal.title_id)
            .or_default()
            .push(principal.person_id);
    }

    info!("Loading {}...", sources.name_basics.display());
    let persons = read_person_records(&sources.name_basics)?;
    let names_by_id: HashMap<String, String> =
        persons.into_iter().map(|p| (p.id, p.name)).collect();

    // Left join against acting credits, then against names. A movie with no
    // credits (or only unresolvable ones) carries a null actor through both
    // joins and is dropped by the final filter. One output row per
    // (movie, actor) pair.
    let mut records = Vec::new();
    for title in rated {
        let credited = credits_by_title
            .get(&title.id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let resolved: Vec<Option<&String>> = if credited.is_empty() {
            vec![None]
        } else {
            credited
                .iter()
                .map(|person_id| names_by_id.get(person_id))
                .collect()
        };
        for actor in resolved.into_iter().flatten() {
            records.push(MovieRecord {
                id: title.id.clone(),
                title: title.title.clone(),
                year: title.year,
                genres: title.genres.clone(),
                rating: title.rating,
                votes: title.votes,
                actor: actor.clone(),
            });
        }
    }

    info!("Catalog has {} movie/actor rows.", records.len());
    Ok(Catalog::new(records))
}

/// The title-side filters, applied per row in order: keep non-adult movies,
/// coerce the year, require genre information.
fn filter_title(raw: RawTitleRecord) -> Option<FilteredTitle> {
    if raw.title_type != "movie" || raw.is_adult != "0" {
        return None;
    }
    let year: i32 = raw.year?.parse().ok()?;
    let genres: Vec<String> = raw
        .genres?
        .split(',')
        .map(|g| g.trim().to_owned())
        .filter(|g| !g.is_empty())
        .collect();
    if genres.is_empty() {
        return None;
    }
    Some(FilteredTitle {
        id: raw.id,
        title: raw.title,
        year,
        genres,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_raw_title(title_type: &str, is_adult: &str) -> RawTitleRecord {
        RawTitleRecord {
            id: "tt1".to_string(),
            title_type: title_type.to_string(),
            title: "Alpha".to_string(),
            is_adult: is_adult.to_string(),
            year: Some("2001".to_string()),
            genres: Some("Drama,War".to_string()),
        }
    }

    #[test]
    fn test_filter_title_keeps_non_adult_movies() {
        let filtered = filter_title(make_raw_title("movie", "0")).unwrap();
        assert_eq!(filtered.year, 2001);
        assert_eq!(filtered.genres, vec!["Drama", "War"]);
    }

    #[test]
    fn test_filter_title_rejects_other_title_types() {
        assert!(filter_title(make_raw_title("short", "0")).is_none());
        assert!(filter_title(make_raw_title("tvSeries", "0")).is_none());
    }

    #[test]
    fn test_filter_title_rejects_adult_titles() {
        assert!(filter_title(make_raw_title("movie", "1")).is_none());
    }

    #[test]
    fn test_filter_title_rejects_unparsable_year() {
        let mut raw = make_raw_title("movie", "0");
        raw.year = None;
        assert!(filter_title(raw).is_none());

        let mut raw = make_raw_title("movie", "0");
        raw.year = Some("circa 1990".to_string());
        assert!(filter_title(raw).is_none());
    }

    #[test]
    fn test_filter_title_rejects_missing_genres() {
        let mut raw = make_raw_title("movie", "0");
        raw.genres = None;
        assert!(filter_title(raw).is_none());

        let mut raw = make_raw_title("movie", "0");
        raw.genres = Some(" , ".to_string());
        assert!(filter_title(raw).is_none());
    }

    #[test]
    fn test_filter_title_trims_genre_tokens() {
        let mut raw = make_raw_title("movie", "0");
        raw.genres = Some("Drama, War".to_string());
        let filtered = filter_title(raw).unwrap();
        assert_eq!(filtered.genres, vec!["Drama", "War"]);
    }
}
