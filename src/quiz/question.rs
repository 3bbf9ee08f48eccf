/// A generated multiple-choice question.
///
/// `options` always contains `correct_answer` exactly once and holds at most
/// four entries; it can be shorter when the catalog cannot supply three
/// distinct distractors.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}
