//! The four raw source tables and their typed parsing.
//!
//! Each source gets its own record shape, validated at parse time: rows
//! missing a key field or failing numeric coercion are dropped silently,
//! per-row problems are never fatal.

use super::error::CatalogError;
use super::tsv::{field, TsvTable};
use std::path::{Path, PathBuf};

/// Locations of the four source dumps the catalog is built from.
#[derive(Debug, Clone)]
pub struct CatalogSources {
    pub title_basics: PathBuf,
    pub title_ratings: PathBuf,
    pub title_principals: PathBuf,
    pub name_basics: PathBuf,
}

impl CatalogSources {
    /// Fail-fast existence check. Every unreadable path is collected before
    /// failing so the caller can report all of them at once.
    pub(crate) fn check_readable(&self) -> Result<(), CatalogError> {
        let missing: Vec<PathBuf> = [
            &self.title_basics,
            &self.title_ratings,
            &self.title_principals,
            &self.name_basics,
        ]
        .into_iter()
        .filter(|path| !path.is_file())
        .map(|path| path.to_owned())
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::MissingSources { paths: missing })
        }
    }
}

/// One row of the title dump, before any filtering.
#[derive(Debug, Clone)]
pub(crate) struct RawTitleRecord {
    pub id: String,
    pub title_type: String,
    pub title: String,
    pub is_adult: String,
    pub year: Option<String>,
    pub genres: Option<String>,
}

/// One row of the ratings dump. One-to-one with a title id.
#[derive(Debug, Clone)]
pub(crate) struct RawRatingRecord {
    pub id: String,
    pub rating: f64,
    pub votes: u64,
}

/// One row of the principals dump. Many rows per title id.
#[derive(Debug, Clone)]
pub(crate) struct RawPrincipalRecord {
    pub title_id: String,
    pub person_id: String,
    pub category: String,
}

/// One row of the names dump. One-to-one with a person id.
#[derive(Debug, Clone)]
pub(crate) struct RawPersonRecord {
    pub id: String,
    pub name: String,
}

pub(crate) fn read_title_records(path: &Path) -> Result<Vec<RawTitleRecord>, CatalogError> {
    let table = TsvTable::open(path)?;
    let id_col = table.column("tconst")?;
    let type_col = table.column("titleType")?;
    let title_col = table.column("primaryTitle")?;
    let adult_col = table.column("isAdult")?;
    let year_col = table.column("startYear")?;
    let genres_col = table.column("genres")?;

    let mut records = Vec::new();
    for row in table.rows() {
        let (Some(id), Some(title_type), Some(title), Some(is_adult)) = (
            field(&row, id_col),
            field(&row, type_col),
            field(&row, title_col),
            field(&row, adult_col),
        ) else {
            continue;
        };
        records.push(RawTitleRecord {
            id: id.to_owned(),
            title_type: title_type.to_owned(),
            title: title.to_owned(),
            is_adult: is_adult.to_owned(),
            year: field(&row, year_col).map(str::to_owned),
            genres: field(&row, genres_col).map(str::to_owned),
        });
    }
    Ok(records)
}

pub(crate) fn read_rating_records(path: &Path) -> Result<Vec<RawRatingRecord>, CatalogError> {
    let table = TsvTable::open(path)?;
    let id_col = table.column("tconst")?;
    let rating_col = table.column("averageRating")?;
    let votes_col = table.column("numVotes")?;

    let mut records = Vec::new();
    for row in table.rows() {
        let (Some(id), Some(rating), Some(votes)) = (
            field(&row, id_col),
            field(&row, rating_col),
            field(&row, votes_col),
        ) else {
            continue;
        };
        let (Ok(rating), Ok(votes)) = (rating.parse::<f64>(), votes.parse::<u64>()) else {
            continue;
        };
        records.push(RawRatingRecord {
            id: id.to_owned(),
            rating,
            votes,
        });
    }
    Ok(records)
}

pub(crate) fn read_principal_records(path: &Path) -> Result<Vec<RawPrincipalRecord>, CatalogError> {
    let table = TsvTable::open(path)?;
    let title_col = table.column("tconst")?;
    let person_col = table.column("nconst")?;
    let category_col = table.column("category")?;

    let mut records = Vec::new();
    for row in table.rows() {
        let (Some(title_id), Some(person_id), Some(category)) = (
            field(&row, title_col),
            field(&row, person_col),
            field(&row, category_col),
        ) else {
            continue;
        };
        records.push(RawPrincipalRecord {
            title_id: title_id.to_owned(),
            person_id: person_id.to_owned(),
            category: category.to_owned(),
        });
    }
    Ok(records)
}

pub(crate) fn read_person_records(path: &Path) -> Result<Vec<RawPersonRecord>, CatalogError> {
    let table = TsvTable::open(path)?;
    let id_col = table.column("nconst")?;
    let name_col = table.column("primaryName")?;

    let mut records = Vec::new();
    for row in table.rows() {
        let (Some(id), Some(name)) = (field(&row, id_col), field(&row, name_col)) else {
            continue;
        };
        records.push(RawPersonRecord {
            id: id.to_owned(),
            name: name.to_owned(),
        });
    }
    Ok(records)
}
