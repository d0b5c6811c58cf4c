//! Core data model types for teamfit.
//!
//! Categories are a closed enum with a static descriptor each; questions,
//! choices and answers are plain owned data. A [`QuestionBank`] can only be
//! built through [`QuestionBank::new`], which rejects empty or ambiguous banks.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::QuizError;

/// One of the fixed outcome classifications the quiz can recommend.
///
/// Declaration order is meaningful: it is the iteration order of every
/// tally and the tie-break order of every ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blue,
    Red,
    Purple,
    Yellow,
    Green,
    Orange,
    White,
    Black,
}

// Ranking always has a best entry.
const _: () = assert!(!Category::ALL.is_empty());

impl Category {
    /// Every category, in declared order.
    pub const ALL: [Category; 8] = [
        Category::Blue,
        Category::Red,
        Category::Purple,
        Category::Yellow,
        Category::Green,
        Category::Orange,
        Category::White,
        Category::Black,
    ];

    /// The lowercase key used in bank files and JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Category::Blue => "blue",
            Category::Red => "red",
            Category::Purple => "purple",
            Category::Yellow => "yellow",
            Category::Green => "green",
            Category::Orange => "orange",
            Category::White => "white",
            Category::Black => "black",
        }
    }

    /// Category for an exact lowercase key, as written in bank files.
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }

    /// The descriptive payload for this category.
    pub fn info(self) -> &'static CategoryInfo {
        catalog::category_info(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let wanted = wanted.strip_suffix(" team").unwrap_or(&wanted);
        Category::from_key(wanted).ok_or_else(|| format!("unknown team: {s}"))
    }
}

/// Static description of a category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    /// Display name, e.g. "Blue Team".
    pub name: &'static str,
    /// One-line tagline.
    pub tagline: &'static str,
    /// Longer summary paragraph.
    pub summary: &'static str,
    /// Representative role titles.
    pub roles: &'static [&'static str],
    /// Core responsibility statements.
    pub core: &'static [&'static str],
    /// What day-to-day work in this area feels like.
    pub cadence: &'static str,
}

/// Sparse per-category weights carried by a choice.
///
/// Categories absent from the map weigh 0; use [`Weights::get`] rather than
/// indexing the map directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weights(BTreeMap<Category, u32>);

impl Weights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight for `category`, 0 when absent.
    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// Set the weight for `category`. A zero weight removes the entry.
    pub fn set(&mut self, category: Category, weight: u32) {
        if weight == 0 {
            self.0.remove(&category);
        } else {
            self.0.insert(category, weight);
        }
    }

    /// Builder-style [`Weights::set`].
    pub fn with(mut self, category: Category, weight: u32) -> Self {
        self.set(category, weight);
        self
    }

    /// Explicit (non-zero) entries in declared category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(c, w)| (*c, *w))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Category, u32)> for Weights {
    fn from_iter<T: IntoIterator<Item = (Category, u32)>>(iter: T) -> Self {
        let mut weights = Weights::new();
        for (category, weight) in iter {
            weights.set(category, weight);
        }
        weights
    }
}

/// A selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown to the user.
    pub label: String,
    /// Score contributed per category when this choice is selected.
    #[serde(default)]
    pub weights: Weights,
}

impl Choice {
    pub fn new(label: impl Into<String>, weights: Weights) -> Self {
        Self {
            label: label.into(),
            weights,
        }
    }
}

/// A multiple-choice question. Choices are addressed by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique within a bank.
    pub id: String,
    /// Question text.
    pub text: String,
    /// Ordered choices.
    pub choices: Vec<Choice>,
}

/// A validated, non-empty ordered collection of questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionBank {
    id: String,
    title: String,
    description: String,
    questions: Vec<Question>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl QuestionBank {
    /// Build a bank, rejecting empty banks, empty questions and duplicate ids.
    ///
    /// Also rejects banks whose highest reachable score for some category
    /// overflows `u32`. Every tally over an accepted bank is bounded by those
    /// totals, so scoring never overflows.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        let mut index = HashMap::with_capacity(questions.len());
        for (i, question) in questions.iter().enumerate() {
            if question.choices.is_empty() {
                return Err(QuizError::EmptyQuestion(question.id.clone()));
            }
            if index.insert(question.id.clone(), i).is_some() {
                return Err(QuizError::DuplicateQuestion(question.id.clone()));
            }
        }

        for category in Category::ALL {
            questions.iter().try_fold(0u32, |total, question| {
                let best = question
                    .choices
                    .iter()
                    .map(|c| c.weights.get(category))
                    .max()
                    .unwrap_or(0);
                total
                    .checked_add(best)
                    .ok_or(QuizError::WeightOverflow(category))
            })?;
        }

        Ok(Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            questions,
            index,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// All questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions. Never zero.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; an empty bank cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at position `step`, if in range.
    pub fn question_at(&self, step: usize) -> Option<&Question> {
        self.questions.get(step)
    }

    /// Look up a question by id.
    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.index.get(question_id).map(|&i| &self.questions[i])
    }

    /// Position of a question in the bank.
    pub fn position(&self, question_id: &str) -> Option<usize> {
        self.index.get(question_id).copied()
    }

    /// Resolve an answer to its choice, failing on unknown ids or indices.
    pub fn resolve(&self, question_id: &str, choice_index: usize) -> Result<&Choice, QuizError> {
        let question = self
            .get(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_string()))?;
        question
            .choices
            .get(choice_index)
            .ok_or_else(|| QuizError::ChoiceOutOfRange {
                question_id: question_id.to_string(),
                index: choice_index,
                len: question.choices.len(),
            })
    }
}

/// A single recorded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub choice_index: usize,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, choice_index: usize) -> Self {
        Self {
            question_id: question_id.into(),
            choice_index,
        }
    }

    /// Borrowed `(question_id, choice_index)` view, the shape the scorer consumes.
    pub fn as_pair(&self) -> (&str, usize) {
        (&self.question_id, self.choice_index)
    }
}

impl FromStr for Answer {
    type Err = String;

    /// Parses `question_id=choice_index`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, idx) = s
            .split_once('=')
            .ok_or_else(|| format!("expected question=index, got '{s}'"))?;
        let id = id.trim();
        if id.is_empty() {
            return Err(format!("missing question id in '{s}'"));
        }
        let idx = idx
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid choice index in '{s}'"))?;
        Ok(Answer::new(id, idx))
    }
}

/// Chosen choice index per question id. At most one answer per question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, usize>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous one for the same question.
    /// Returns the previously selected index.
    pub fn upsert(&mut self, question_id: impl Into<String>, choice_index: usize) -> Option<usize> {
        self.0.insert(question_id.into(), choice_index)
    }

    pub fn get(&self, question_id: &str) -> Option<usize> {
        self.0.get(question_id).copied()
    }

    pub fn remove(&mut self, question_id: &str) -> Option<usize> {
        self.0.remove(question_id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.0.iter().map(|(id, idx)| (id.as_str(), *idx))
    }
}

impl FromIterator<Answer> for Answers {
    /// Later answers for the same question replace earlier ones.
    fn from_iter<T: IntoIterator<Item = Answer>>(iter: T) -> Self {
        let mut answers = Answers::new();
        for answer in iter {
            answers.upsert(answer.question_id, answer.choice_index);
        }
        answers
    }
}
