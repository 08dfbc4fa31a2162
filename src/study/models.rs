// src/study/models.rs
use serde::{Deserialize, Serialize};

/// Universal part-of-speech tag carried by each token. Produced by the
/// upstream parser; only `Num` matters to extraction, the rest are kept so
/// documents round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    #[serde(other)]
    X,
}

/// Dependency-relation label linking a token to its parent. Only `Amod` and
/// `Nummod` mark numeric modifiers; unknown labels collapse to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dep {
    Acl,
    Advcl,
    Advmod,
    Amod,
    Appos,
    Aux,
    Case,
    Cc,
    Ccomp,
    Compound,
    Conj,
    Det,
    Dobj,
    Mark,
    Nmod,
    Nsubj,
    Nummod,
    Obj,
    Obl,
    Pobj,
    Prep,
    Punct,
    Root,
    Xcomp,
    #[serde(other)]
    Other,
}

/// A dependency-parse node. Trees are built once by the loader and read-only
/// afterwards; each token is owned by exactly one parent (or the section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: Pos,
    pub dep: Dep,
    /// Syntactic dependents, in sentence order.
    #[serde(default)]
    pub children: Vec<Token>,
    /// Tokens immediately preceding this one and attached to it, in sentence
    /// order (farthest first). Used for numeric-prefix lookahead.
    #[serde(default)]
    pub lefts: Vec<Token>,
}

impl Token {
    pub fn new(text: &str, pos: Pos, dep: Dep) -> Self {
        Self {
            text: text.to_string(),
            pos,
            dep,
            children: Vec::new(),
            lefts: Vec::new(),
        }
    }

    /// True if the token text is one or more ASCII digits and nothing else.
    pub fn is_all_digits(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c.is_ascii_digit())
    }
}

/// A named, pre-segmented unit of study text with its dependency-parsed
/// token sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// Categories scored by the external attribute classifier, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    NoMatch = 0,
    Statistic = 1,
    SampleMethod = 2,
    SampleSize = 3,
}

/// Per-section attribute predictions: one row of four scores per section,
/// rows in the same order as the section list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeScores {
    rows: Vec<[f64; 4]>,
}

impl AttributeScores {
    pub fn new(rows: Vec<[f64; 4]>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[[f64; 4]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stable argmax over one category column. The first section achieving
    /// the maximum wins ties.
    pub fn best(&self, attribute: Attribute) -> Option<(usize, f64)> {
        let column = attribute as usize;

        let mut best_index = None;
        let mut best_score = f64::NEG_INFINITY;
        for (index, row) in self.rows.iter().enumerate() {
            if row[column] > best_score {
                best_index = Some(index);
                best_score = row[column];
            }
        }

        best_index.map(|index| (index, best_score))
    }
}

/// A fully annotated study document as produced by the upstream pipeline:
/// segmented sections, parsed tokens and classifier scores.
#[derive(Debug, Clone, Deserialize)]
pub struct StudyDocument {
    pub id: String,
    pub sections: Vec<Section>,
    pub attributes: AttributeScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_is_stable_on_ties() {
        let scores = AttributeScores::new(vec![
            [0.0, 0.0, 0.0, 0.5],
            [0.0, 0.0, 0.0, 0.3],
            [0.0, 0.0, 0.0, 0.5],
        ]);

        // First index achieving the maximum wins, not the last
        assert_eq!(scores.best(Attribute::SampleSize), Some((0, 0.5)));
    }

    #[test]
    fn test_best_per_column() {
        let scores = AttributeScores::new(vec![
            [0.9, 0.1, 0.1, 0.05],
            [0.1, 0.2, 0.35, 0.1],
            [0.1, 0.8, 0.2, 0.6],
        ]);

        assert_eq!(scores.best(Attribute::NoMatch), Some((0, 0.9)));
        assert_eq!(scores.best(Attribute::Statistic), Some((2, 0.8)));
        assert_eq!(scores.best(Attribute::SampleMethod), Some((1, 0.35)));
        assert_eq!(scores.best(Attribute::SampleSize), Some((2, 0.6)));
    }

    #[test]
    fn test_best_empty_matrix() {
        let scores = AttributeScores::new(Vec::new());
        assert_eq!(scores.best(Attribute::SampleSize), None);
    }

    #[test]
    fn test_pos_and_dep_unknown_tags_degrade() {
        let token: Token =
            serde_json::from_str(r#"{"text": "with", "pos": "WEIRD", "dep": "dative"}"#).unwrap();
        assert_eq!(token.pos, Pos::X);
        assert_eq!(token.dep, Dep::Other);
        assert!(token.children.is_empty());
        assert!(token.lefts.is_empty());
    }

    #[test]
    fn test_is_all_digits() {
        assert!(Token::new("1000", Pos::Num, Dep::Nummod).is_all_digits());
        assert!(!Token::new("1,000", Pos::Num, Dep::Nummod).is_all_digits());
        assert!(!Token::new("ten", Pos::Num, Dep::Nummod).is_all_digits());
        assert!(!Token::new("", Pos::X, Dep::Other).is_all_digits());
    }
}
