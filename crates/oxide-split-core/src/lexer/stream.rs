//! Index-addressable token sequence with tombstones.

use super::span::Span;

/// Tokens of one `split` call, addressed by slot index.
///
/// A merge pass tombstones the slots it absorbs instead of removing them, so
/// neighbouring slots keep their index for the rest of the pass. Call
/// [`TokenSequence::compact`] once the pass is over.
#[derive(Debug)]
pub struct TokenSequence<'a> {
    input: &'a str,
    slots: Vec<Option<Span>>,
}

impl<'a> TokenSequence<'a> {
    pub fn new(input: &'a str, spans: Vec<Span>) -> Self {
        Self {
            input,
            slots: spans.into_iter().map(Some).collect(),
        }
    }

    /// Number of slots, tombstones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Text of the token at `index`, or `None` for a tombstone.
    pub fn text(&self, index: usize) -> Option<&'a str> {
        let input = self.input;
        self.slots
            .get(index)
            .copied()
            .flatten()
            .map(|span| span.text(input))
    }

    /// Nearest live slot before `index`.
    pub fn prev_live(&self, index: usize) -> Option<usize> {
        (0..index).rev().find(|&k| self.slots[k].is_some())
    }

    /// Nearest live slot after `index`.
    pub fn next_live(&self, index: usize) -> Option<usize> {
        (index + 1..self.slots.len()).find(|&k| self.slots[k].is_some())
    }

    /// Merges the token at `other` into the token at `target` and tombstones
    /// `other`. Both must be live and adjacent.
    pub fn absorb(&mut self, target: usize, other: usize) {
        debug_assert!(
            self.slots[target].is_some() && self.slots[other].is_some(),
            "absorb on a tombstone: {target} <- {other}"
        );
        if let (Some(kept), Some(taken)) = (self.slots[target], self.slots[other]) {
            self.slots[target] = Some(kept.join(taken));
            self.slots[other] = None;
        }
    }

    /// Drops tombstones and renumbers the remaining slots.
    pub fn compact(&mut self) {
        self.slots.retain(Option::is_some);
    }

    /// Number of live tokens.
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn into_tokens(self) -> Vec<&'a str> {
        let input = self.input;
        self.slots
            .into_iter()
            .flatten()
            .map(|span| span.text(input))
            .collect()
    }
}
