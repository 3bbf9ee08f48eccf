//! Question generation over the read-only catalog.
//!
//! Every call is independent: the engine keeps no state between questions,
//! so repeated calls may resample the same row or facet. All randomness
//! flows through the caller-supplied rng.

use super::difficulty::Difficulty;
use super::question::Question;
use crate::catalog::{Catalog, MovieRecord};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// The attribute a question asks about.
#[derive(Debug, Clone, Copy)]
enum Facet {
    Year,
    Genre,
    Actor,
}

const FACETS: [Facet; 3] = [Facet::Year, Facet::Genre, Facet::Actor];

/// Generate one multiple-choice question from the catalog.
///
/// A difficulty tier with no eligible rows silently falls back to the whole
/// catalog; only a genuinely empty catalog yields `None`. Never panics.
pub fn generate_question<R: Rng>(
    catalog: &Catalog,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Question> {
    let mut pool: Vec<&MovieRecord> = catalog
        .records()
        .iter()
        .filter(|r| difficulty.admits(r.votes))
        .collect();
    if pool.is_empty() {
        pool = catalog.records().iter().collect();
    }
    // A row with no genre information cannot back a genre question.
    pool.retain(|r| !r.genres.is_empty());

    let row = pool.choose(rng)?;
    let facet = FACETS.choose(rng).copied()?;

    let (prompt, correct_answer, universe) = match facet {
        Facet::Year => (
            format!("In what year was the movie '{}' released?", row.title),
            row.year.to_string(),
            catalog
                .distinct_years()
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>(),
        ),
        Facet::Genre => (
            format!(
                "Which of the following is a genre of the movie '{}'?",
                row.title
            ),
            row.genres[0].clone(),
            catalog.distinct_genres(),
        ),
        Facet::Actor => (
            format!("Which actor starred in the movie '{}'?", row.title),
            row.actor.clone(),
            catalog.distinct_actors(),
        ),
    };

    // Distractors: sampled without replacement from the universe minus the
    // correct value. Fewer than three alternatives just means a shorter
    // option list.
    let candidates: Vec<String> = universe
        .into_iter()
        .filter(|value| value != &correct_answer)
        .collect();
    let wanted = candidates.len().min(3);
    let mut options: Vec<String> = candidates
        .choose_multiple(rng, wanted)
        .cloned()
        .collect();
    options.push(correct_answer.clone());
    options.shuffle(rng);

    Some(Question {
        prompt,
        options,
        correct_answer,
    })
}
