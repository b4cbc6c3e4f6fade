//! Comment selection for the shared result panel.
//!
//! Templates are fixed and ordered; which one is shown comes from an injected
//! [`IndexSource`] so callers decide between entropy-seeded and scripted picks.

use crate::numbers::CountFormat;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of uniformly distributed template indices.
pub trait IndexSource {
    /// Return an index in `0..upper`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Adapts any `rand` generator into an [`IndexSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha20Rng> {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> IndexSource for RngSource<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Replays a scripted list of indices, cycling when exhausted.
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    values: Vec<usize>,
    cursor: usize,
}

impl FixedSequence {
    #[must_use]
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl IndexSource for FixedSequence {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value % upper
    }
}

type Template = fn(&str, &str, &str) -> String;

const TEMPLATES: [Template; 8] = [
    |winner, loser, diff| {
        format!("{winner}님이 {diff} 그릇을 더 드셨네요! {loser}님, 분발하셔야겠어요! 😄")
    },
    |winner, loser, diff| {
        format!("{loser}님! {winner}님보다 {diff} 그릇이나 적게 드셨어요. 더 드시고 오세요! 🍚")
    },
    |winner, loser, diff| {
        format!("우와! {winner}님이 {loser}님보다 {diff} 그릇이나 더 드셨네요! 대단해요! 🎉")
    },
    |winner, loser, diff| {
        format!(
            "{loser}님, {diff} 그릇 차이가 나네요! {winner}님을 따라잡으려면 열심히 드셔야겠어요! 💪"
        )
    },
    |winner, loser, diff| {
        format!("{winner}님이 {diff} 그릇 앞서고 계시네요! {loser}님, 식사 더하러 가실까요? 😋")
    },
    |winner, loser, diff| {
        format!("{winner}님의 대승리! {loser}님과 무려 {diff} 그릇이나 차이가 나네요! 🏆")
    },
    // The winner is not named in this one.
    |_winner, loser, diff| format!("{loser}님, 아직 {diff} 그릇이나 남았어요! 맛있게 드시고 오세요~ 🍜"),
    |winner, loser, diff| {
        format!("{winner}님이 {diff} 그릇 앞서가고 있어요! {loser}님, 따라잡을 수 있죠? 💫")
    },
];

/// Number of available comment templates.
pub const MESSAGE_COUNT: usize = TEMPLATES.len();

/// Render template `index` (taken modulo [`MESSAGE_COUNT`]).
#[must_use]
pub fn render_template(
    index: usize,
    winner: &str,
    loser: &str,
    difference: u64,
    format: &impl CountFormat,
) -> String {
    let diff = format.format_count(difference);
    TEMPLATES[index % MESSAGE_COUNT](winner, loser, &diff)
}

/// Draw one template from `source` and render it.
///
/// A zero difference still produces a winner-framed message.
pub fn select_message(
    source: &mut impl IndexSource,
    winner: &str,
    loser: &str,
    difference: u64,
    format: &impl CountFormat,
) -> String {
    let index = source.next_index(MESSAGE_COUNT);
    log::debug!("comment template {index} selected");
    render_template(index, winner, loser, difference, format)
}
