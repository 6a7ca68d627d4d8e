//! Keyword and lexicon driven conversion of free-text reviews into food and service scores.
//!
//! Each review is split into clauses. A clause is about food and/or service when it contains
//! one of the topic keywords, and every lexicon adjective found in it overwrites the score of
//! the matching axis. The lexicon is scanned in declaration order, so the last adjective found
//! in the last relevant clause wins.

use crate::domain::rating::{ReviewScores, ScorePair};

pub const FOOD_KEYWORDS: &[&str] = &["comida", "prato", "sabor", "qualidade", "ingredientes"];

pub const SERVICE_KEYWORDS: &[&str] =
    &["atendimento", "serviço", "garçom", "equipe", "funcionário"];

pub const SENTIMENT_LEXICON: &[(&str, u8)] = &[
    ("horrível", 1),
    ("nojento", 1),
    ("terrível", 1),
    ("ruim", 2),
    ("desagradável", 2),
    ("ofensivo", 2),
    ("mediano", 3),
    ("sem graça", 3),
    ("irrelevante", 3),
    ("bom", 4),
    ("agradável", 4),
    ("satisfatório", 4),
    ("incrível", 5),
    ("impressionante", 5),
    ("surpreendente", 5),
];

const CLAUSE_DELIMITERS: &[char] = &['.', ',', ';', '!', '?'];

#[derive(Clone, Copy, Debug, Default)]
pub struct ReviewScorer;

impl ReviewScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze<S>(&self, reviews: &[S]) -> ReviewScores
    where
        S: AsRef<str>,
    {
        let mut scores = ReviewScores::default();
        for review in reviews {
            scores.push(self.score_review(review.as_ref()));
        }
        scores
    }

    pub fn score_review(&self, review: &str) -> ScorePair {
        let normalized = review.to_lowercase();
        let mut pair = ScorePair::default();

        for clause in normalized.split(CLAUSE_DELIMITERS).map(str::trim) {
            if clause.is_empty() {
                continue;
            }
            let is_food = mentions_any(clause, FOOD_KEYWORDS);
            let is_service = mentions_any(clause, SERVICE_KEYWORDS);
            if !is_food && !is_service {
                continue;
            }

            for (adjective, score) in SENTIMENT_LEXICON {
                if !clause.contains(adjective) {
                    continue;
                }
                if is_food {
                    pair.food = *score;
                }
                if is_service {
                    pair.service = *score;
                }
            }
        }

        pair
    }
}

fn mentions_any(clause: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| clause.contains(keyword))
}
