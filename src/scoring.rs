//! Content scoring and candidate selection.
//!
//! Every paragraph long enough to matter earns a content score from its
//! commas and length. That score flows up to the paragraph's nearest three
//! element ancestors with decaying weight; each ancestor becomes a
//! [`Candidate`] the first time it receives credit. After all paragraphs are
//! scored, candidates are discounted by their link density and the best one
//! is the article container.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use dom_query::{Document, NodeId, NodeRef, Selection};
use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::link_density::link_density;
use crate::patterns::Patterns;
use crate::text::{char_len, count_commas, normalize_text};
use crate::weight;

/// Paragraphs with fewer normalized characters are ignored.
pub const MIN_PARAGRAPH_LENGTH: usize = 25;

/// How many ancestor levels receive a share of a paragraph's score.
pub const ANCESTOR_DEPTH: usize = 3;

/// Cap on the length bonus (one point per 100 characters).
const MAX_LENGTH_BONUS: f64 = 3.0;

/// An element considered as the article container.
#[derive(Clone, Copy)]
pub struct Candidate<'a> {
    pub score: f64,
    pub node: NodeRef<'a>,
}

impl<'a> Candidate<'a> {
    /// The candidate as a selection.
    #[must_use]
    pub fn selection(&self) -> Selection<'a> {
        Selection::from(self.node)
    }
}

/// Candidates keyed by node identity, iterated in registration order.
#[derive(Default)]
pub struct CandidateMap<'a> {
    order: Vec<NodeId>,
    entries: HashMap<NodeId, Candidate<'a>>,
}

impl<'a> CandidateMap<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Add `delta` to the node's score, registering it first if needed.
    ///
    /// Registration seeds the score with the node's tag and class/id weight.
    pub fn credit(&mut self, node: NodeRef<'a>, delta: f64, patterns: &Patterns) {
        let candidate = match self.entries.entry(node.id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(node.id);
                entry.insert(Candidate {
                    score: weight::initial_score(&Selection::from(node), patterns),
                    node,
                })
            }
        };
        candidate.score += delta;
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Candidate<'a>> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Candidates in the order they were first credited.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate<'a>> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Discount every score by link density and return the best candidate.
    ///
    /// Ties keep the earliest registered candidate.
    pub fn select_top(&mut self) -> Option<Candidate<'a>> {
        let mut top: Option<Candidate<'a>> = None;

        for id in &self.order {
            let Some(candidate) = self.entries.get_mut(id) else {
                continue;
            };
            candidate.score *= 1.0 - link_density(&candidate.selection());

            if top.is_none_or(|best| candidate.score > best.score) {
                top = Some(*candidate);
            }
        }

        top
    }
}

/// Content score of a paragraph's normalized text.
///
/// 1 for the paragraph itself, 1 per comma, and 1 per 100 characters up to 3.
#[must_use]
pub fn paragraph_score(text: &str) -> f64 {
    let length_bonus = ((char_len(text) / 100) as f64).min(MAX_LENGTH_BONUS);
    1.0 + count_commas(text) as f64 + length_bonus
}

/// Share of a paragraph's score given to the ancestor at `level`.
///
/// Parent (0) gets everything, grandparent (1) half, deeper levels a
/// `level * 3` fraction.
#[must_use]
pub fn score_divider(level: usize) -> f64 {
    match level {
        0 => 1.0,
        1 => 2.0,
        _ => (level * 3) as f64,
    }
}

/// Score every qualifying paragraph in the document into a candidate map.
#[must_use]
pub fn score_paragraphs<'a>(doc: &'a Document, patterns: &Patterns) -> CandidateMap<'a> {
    let mut candidates = CandidateMap::new();

    for paragraph in doc.select("p").nodes() {
        let text = normalize_text(&paragraph.text());
        if char_len(&text) < MIN_PARAGRAPH_LENGTH {
            continue;
        }

        let ancestors = dom::element_ancestors(paragraph, ANCESTOR_DEPTH);
        if ancestors.is_empty() {
            continue;
        }

        let content_score = paragraph_score(&text);
        for (level, ancestor) in ancestors.into_iter().enumerate() {
            candidates.credit(ancestor, content_score / score_divider(level), patterns);
        }
    }

    candidates
}

/// Find the element most likely to hold the article body.
///
/// Returns [`Error::NoContent`] when no paragraph qualified.
pub fn find_top_candidate<'a>(doc: &'a Document, patterns: &Patterns) -> Result<Candidate<'a>> {
    let mut candidates = score_paragraphs(doc, patterns);
    debug!(candidates = candidates.len(), "scored paragraphs");

    let top = candidates.select_top().ok_or(Error::NoContent)?;
    debug!(
        score = top.score,
        tag = dom::node_tag(&top.node).unwrap_or_default(),
        "selected top candidate"
    );
    Ok(top)
}
