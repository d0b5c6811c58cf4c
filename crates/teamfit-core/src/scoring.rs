//! Tally, ranking and normalization.
//!
//! A [`Tally`] always holds every [`Category`], zero-initialised, so teams no
//! answer touched still show up in rankings and tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::QuizError;
use crate::model::{Category, QuestionBank};

/// Accumulated score per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<Category, u32>);

impl Tally {
    /// A tally with every category at zero.
    pub fn new() -> Self {
        Self(Category::ALL.into_iter().map(|c| (c, 0)).collect())
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// Add `weight` to `category`, saturating at `u32::MAX`.
    ///
    /// Banks reject weights whose maximum total overflows, so tallies over
    /// an accepted bank never reach the cap.
    pub fn add(&mut self, category: Category, weight: u32) {
        let value = self.0.entry(category).or_insert(0);
        *value = value.saturating_add(weight);
    }

    /// Scores in declared category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }

    pub fn is_zero(&self) -> bool {
        self.0.values().all(|&v| v == 0)
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<Category, u32>> for Tally {
    /// Missing categories are filled with zero.
    fn from(scores: BTreeMap<Category, u32>) -> Self {
        let mut tally = Tally::new();
        for (category, value) in scores {
            tally.add(category, value);
        }
        tally
    }
}

impl<'de> Deserialize<'de> for Tally {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<Category, u32>::deserialize(deserializer).map(Tally::from)
    }
}

/// Sum the weights of every answered choice.
///
/// Fails on the first answer whose question id is not in `bank` or whose
/// choice index is out of range. Answer order does not matter.
pub fn compute_tally<'a, I>(answers: I, bank: &QuestionBank) -> Result<Tally, QuizError>
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    let mut tally = Tally::new();
    for (question_id, choice_index) in answers {
        let choice = bank.resolve(question_id, choice_index)?;
        for (category, weight) in choice.weights.iter() {
            tally.add(category, weight);
        }
    }
    Ok(tally)
}

/// A category and its score within a [`Ranking`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub category: Category,
    pub score: u32,
}

/// Categories sorted by score, highest first.
///
/// Equal scores keep declared category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ranking(Vec<RankedCategory>);

impl Ranking {
    /// The top-scoring category.
    pub fn best(&self) -> RankedCategory {
        // rank_tally emits one entry per category and Category::ALL is non-empty.
        self.0[0]
    }

    /// The second entry, if any.
    pub fn runner_up(&self) -> Option<RankedCategory> {
        self.0.get(1).copied()
    }

    pub fn entries(&self) -> &[RankedCategory] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 1-based position of `category`.
    pub fn position(&self, category: Category) -> Option<usize> {
        self.0
            .iter()
            .position(|r| r.category == category)
            .map(|i| i + 1)
    }
}

/// Sort a tally into a ranking.
pub fn rank_tally(tally: &Tally) -> Ranking {
    let mut entries: Vec<RankedCategory> = tally
        .iter()
        .map(|(category, score)| RankedCategory { category, score })
        .collect();
    // Stable, so ties stay in declared order.
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    Ranking(entries)
}

/// Highest score each category can reach in one pass through `bank`.
///
/// For every question, takes the largest weight the category gets from any
/// one choice, then sums over questions. This is exact only because each
/// question takes exactly one choice; multi-select questions would break it.
pub fn max_possible(bank: &QuestionBank) -> Tally {
    let mut max = Tally::new();
    for question in bank.questions() {
        for category in Category::ALL {
            let best = question
                .choices
                .iter()
                .map(|c| c.weights.get(category))
                .max()
                .unwrap_or(0);
            max.add(category, best);
        }
    }
    max
}

/// `value` as a whole percentage of `max`, clamped to 0..=100.
///
/// A zero `max` is treated as 1.
pub fn percent(value: u32, max: u32) -> u32 {
    let ratio = f64::from(value) / f64::from(max.max(1));
    (ratio * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, Answers, Choice, Question, Weights};

    fn choice(label: &str, weights: &[(Category, u32)]) -> Choice {
        Choice::new(label, weights.iter().copied().collect())
    }

    fn bank(questions: Vec<Question>) -> QuestionBank {
        QuestionBank::new("test", "Test", "", questions).unwrap()
    }

    fn x_or_y() -> QuestionBank {
        bank(vec![Question {
            id: "q1".into(),
            text: "X or Y?".into(),
            choices: vec![
                choice("A", &[(Category::Blue, 3)]),
                choice("B", &[(Category::Red, 5)]),
            ],
        }])
    }

    fn pairs(answers: &[Answer]) -> impl Iterator<Item = (&str, usize)> {
        answers.iter().map(Answer::as_pair)
    }

    #[test]
    fn empty_answers_give_all_zero_tally() {
        let tally = compute_tally(Answers::new().iter(), &x_or_y()).unwrap();
        assert!(tally.is_zero());
        assert_eq!(tally.iter().count(), Category::ALL.len());
    }

    #[test]
    fn every_category_present() {
        let answers = [Answer::new("q1", 1)];
        let tally = compute_tally(pairs(&answers), &x_or_y()).unwrap();
        let keys: Vec<Category> = tally.iter().map(|(c, _)| c).collect();
        assert_eq!(keys, Category::ALL.to_vec());
        assert_eq!(tally.get(Category::Blue), 0);
        assert_eq!(tally.get(Category::Red), 5);
    }

    #[test]
    fn unknown_question_fails() {
        let answers = [Answer::new("missing", 0)];
        let err = compute_tally(pairs(&answers), &x_or_y()).unwrap_err();
        assert_eq!(err, QuizError::UnknownQuestion("missing".into()));
    }

    #[test]
    fn out_of_range_choice_fails() {
        let answers = [Answer::new("q1", 2)];
        let err = compute_tally(pairs(&answers), &x_or_y()).unwrap_err();
        assert!(err.is_lookup_failure());
    }

    #[test]
    fn tally_is_order_independent() {
        let bank = crate::catalog::builtin_bank().unwrap();
        let answers = vec![
            Answer::new("interest", 0),
            Answer::new("design", 1),
            Answer::new("infra", 1),
            Answer::new("learning", 0),
            Answer::new("automation", 0),
        ];
        let forward = compute_tally(pairs(&answers), &bank).unwrap();
        let mut reversed = answers.clone();
        reversed.reverse();
        let backward = compute_tally(pairs(&reversed), &bank).unwrap();
        let mut rotated = answers.clone();
        rotated.rotate_left(2);
        let rotated = compute_tally(pairs(&rotated), &bank).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward, rotated);
        assert_eq!(forward.get(Category::Blue), 3 + 2 + 2);
        assert_eq!(forward.get(Category::Red), 2 + 2);
        assert_eq!(forward.get(Category::Orange), 2);
        assert_eq!(forward.get(Category::White), 2);
        assert_eq!(forward.get(Category::Green), 3);
    }

    #[test]
    fn ranking_orders_by_score_then_declared_order() {
        let mut tally = Tally::new();
        tally.add(Category::White, 4);
        tally.add(Category::Red, 4);
        tally.add(Category::Black, 7);

        let ranking = rank_tally(&tally);
        let order: Vec<Category> = ranking.entries().iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Black,
                Category::Red,
                Category::White,
                Category::Blue,
                Category::Purple,
                Category::Yellow,
                Category::Green,
                Category::Orange,
            ]
        );
        assert_eq!(ranking.best().category, Category::Black);
        assert_eq!(ranking.runner_up().unwrap().category, Category::Red);
        assert_eq!(ranking.position(Category::White), Some(3));
    }

    #[test]
    fn ranking_of_zero_tally_is_declared_order() {
        let ranking = rank_tally(&Tally::new());
        assert_eq!(ranking.len(), Category::ALL.len());
        assert_eq!(ranking.best().category, Category::Blue);
        assert_eq!(ranking.best().score, 0);
        let order: Vec<Category> = ranking.entries().iter().map(|r| r.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn best_is_at_least_every_other_score() {
        let bank = crate::catalog::builtin_bank().unwrap();
        for pick in 0..2 {
            let answers: Vec<Answer> = bank
                .questions()
                .iter()
                .map(|q| Answer::new(q.id.clone(), pick.min(q.choices.len() - 1)))
                .collect();
            let ranking = rank_tally(&compute_tally(pairs(&answers), &bank).unwrap());
            let best = ranking.best().score;
            assert!(ranking.entries().iter().all(|r| r.score <= best));
            assert_eq!(ranking.len(), 8);
        }
    }

    #[test]
    fn max_possible_for_builtin_bank() {
        let bank = crate::catalog::builtin_bank().unwrap();
        let max = max_possible(&bank);
        assert_eq!(max.get(Category::Blue), 37);
        assert_eq!(max.get(Category::Red), 37);
        assert_eq!(max.get(Category::Purple), 6);
        assert_eq!(max.get(Category::Yellow), 21);
        assert_eq!(max.get(Category::Green), 3);
        assert_eq!(max.get(Category::Orange), 8);
        assert_eq!(max.get(Category::White), 26);
        assert_eq!(max.get(Category::Black), 9);
    }

    #[test]
    fn achieved_never_exceeds_max() {
        let bank = crate::catalog::builtin_bank().unwrap();
        let max = max_possible(&bank);
        // Walk a spread of assignments: question i picks choice (i + shift) mod len.
        for shift in 0..4 {
            let answers: Vec<Answer> = bank
                .questions()
                .iter()
                .enumerate()
                .map(|(i, q)| Answer::new(q.id.clone(), (i + shift) % q.choices.len()))
                .collect();
            let tally = compute_tally(pairs(&answers), &bank).unwrap();
            for (category, value) in tally.iter() {
                assert!(value <= max.get(category), "{category}: {value} > max");
            }
        }
    }

    #[test]
    fn two_questions_reach_max() {
        let q = |id: &str| Question {
            id: id.into(),
            text: "Pick".into(),
            choices: vec![
                choice("X", &[(Category::Blue, 3)]),
                choice("Other", &[(Category::Red, 1)]),
            ],
        };
        let bank = bank(vec![q("q1"), q("q2")]);
        let answers = [Answer::new("q1", 0), Answer::new("q2", 0)];
        let tally = compute_tally(pairs(&answers), &bank).unwrap();
        let max = max_possible(&bank);
        assert_eq!(tally.get(Category::Blue), 6);
        assert_eq!(max.get(Category::Blue), 6);
        assert_eq!(max.get(Category::Red), 2);
    }

    #[test]
    fn weightless_choices_score_nothing() {
        let bank = bank(vec![Question {
            id: "q1".into(),
            text: "Pick".into(),
            choices: vec![Choice::new("Nothing", Weights::new())],
        }]);
        let answers = [Answer::new("q1", 0)];
        assert!(compute_tally(pairs(&answers), &bank).unwrap().is_zero());
        assert!(max_possible(&bank).is_zero());
    }

    #[test]
    fn tally_add_saturates() {
        let mut tally = Tally::new();
        tally.add(Category::Blue, u32::MAX - 1);
        tally.add(Category::Blue, 5);
        assert_eq!(tally.get(Category::Blue), u32::MAX);
    }

    #[test]
    fn percent_matches_progress_bar() {
        assert_eq!(percent(0, 37), 0);
        assert_eq!(percent(37, 37), 100);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(5, 0), 100);
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(9, 6), 100);
    }

    #[test]
    fn tally_json_fills_missing_categories() {
        let tally: Tally = serde_json::from_str(r#"{"red":4}"#).unwrap();
        assert_eq!(tally.get(Category::Red), 4);
        assert_eq!(tally.iter().count(), 8);
        let json = serde_json::to_string(&tally).unwrap();
        assert!(json.starts_with(r#"{"blue":0,"red":4"#));
    }
}
