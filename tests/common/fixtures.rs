//! Test fixture creation for the catalog source dumps
//!
//! Writes the four TSV dumps into a temporary directory and hands back a
//! `CatalogSources` pointing at them. The standard set covers every filter
//! in the merge pipeline: wrong title type, adult flag, null year, null
//! genres, missing rating, below-threshold rating, non-acting credits and
//! unresolvable credits.

use super::constants::*;
use cinequiz::catalog::CatalogSources;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Keeps the backing `TempDir` alive for as long as the sources are in use.
pub struct TestSources {
    #[allow(dead_code)] // held for its Drop
    pub dir: TempDir,
    pub sources: CatalogSources,
}

/// Write four raw TSV bodies (headers included) into a fresh temp directory.
pub fn write_sources(titles: &str, ratings: &str, principals: &str, names: &str) -> TestSources {
    let dir = TempDir::new().unwrap();
    let sources = CatalogSources {
        title_basics: write_file(dir.path(), "title.basics.tsv", titles),
        title_ratings: write_file(dir.path(), "title.ratings.tsv", ratings),
        title_principals: write_file(dir.path(), "title.principals.tsv", principals),
        name_basics: write_file(dir.path(), "name.basics.tsv", names),
    };
    TestSources { dir, sources }
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// The standard fixture set.
///
/// With `TEST_THRESHOLD` the expected catalog is exactly four rows:
/// Alpha/Jane, Beta/John, Beta/Mary, Gamma/Jane.
pub fn create_test_sources() -> TestSources {
    write_sources(
        &standard_titles(),
        &standard_ratings(),
        &standard_principals(),
        &standard_names(),
    )
}

fn standard_titles() -> String {
    [
        "tconst\ttitleType\tprimaryTitle\tisAdult\tstartYear\tgenres".to_string(),
        format!("{ALPHA_ID}\tmovie\t{ALPHA_TITLE}\t0\t2001\tDrama,War"),
        format!("{BETA_ID}\tmovie\t{BETA_TITLE}\t0\t1999\tComedy"),
        format!("{GAMMA_ID}\tmovie\t{GAMMA_TITLE}\t0\t2010\tDrama,Thriller"),
        format!("{DELTA_ID}\tmovie\tDelta\t0\t2015\tHorror"),
        format!("{SHORT_ID}\tshort\tShorty\t0\t2005\tComedy"),
        format!("{ADULT_ID}\tmovie\tAfter Dark\t1\t2003\tDrama"),
        format!("{NO_YEAR_ID}\tmovie\tUndated\t0\t\\N\tDrama"),
        format!("{NO_GENRE_ID}\tmovie\tUnclassified\t0\t2008\t\\N"),
        format!("{UNRATED_ID}\tmovie\tUnrated\t0\t2009\tDrama"),
        format!("{EPSILON_ID}\tmovie\tEpsilon\t0\t2020\tSci-Fi"),
        String::new(),
    ]
    .join("\n")
}

fn standard_ratings() -> String {
    [
        "tconst\taverageRating\tnumVotes".to_string(),
        format!("{ALPHA_ID}\t9.1\t5000"),
        format!("{BETA_ID}\t8.2\t150000"),
        format!("{GAMMA_ID}\t7.5\t75000"),
        format!("{DELTA_ID}\t6.0\t20000"),
        format!("{SHORT_ID}\t8.0\t10000"),
        format!("{ADULT_ID}\t8.0\t10000"),
        format!("{EPSILON_ID}\t8.8\t250000"),
        String::new(),
    ]
    .join("\n")
}

fn standard_principals() -> String {
    [
        "tconst\tnconst\tcategory".to_string(),
        format!("{ALPHA_ID}\t{JANE_ID}\tactress"),
        format!("{BETA_ID}\t{JOHN_ID}\tactor"),
        format!("{BETA_ID}\t{MARY_ID}\tactress"),
        format!("{GAMMA_ID}\t{JANE_ID}\tactress"),
        format!("{DELTA_ID}\t{JOHN_ID}\tactor"),
        format!("{EPSILON_ID}\t{DIRECTOR_ID}\tdirector"),
        format!("{EPSILON_ID}\t{GHOST_ID}\tactor"),
        String::new(),
    ]
    .join("\n")
}

fn standard_names() -> String {
    [
        "nconst\tprimaryName".to_string(),
        format!("{JANE_ID}\t{JANE_NAME}"),
        format!("{JOHN_ID}\t{JOHN_NAME}"),
        format!("{MARY_ID}\t{MARY_NAME}"),
        format!("{DIRECTOR_ID}\tDan Director"),
        String::new(),
    ]
    .join("\n")
}
