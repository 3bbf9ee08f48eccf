/// One catalog row: a (movie, credited actor) pair.
///
/// A movie with three credited actors appears as three rows. This
/// duplication is intentional: the quiz engine samples a row, so an
/// actor-facet question always carries one specific actor without a second
/// lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub year: i32,
    /// Genre tokens in source order; never empty for a surviving row.
    pub genres: Vec<String>,
    /// Always at or above the configured rating threshold.
    pub rating: f64,
    pub votes: u64,
    pub actor: String,
}
