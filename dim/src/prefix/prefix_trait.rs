/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub trait Prefix: Sized + Copy + 'static {
    const BASE: u64;
    const SCALE: &'static [Self];

    fn power(&self) -> i64;
    fn prefix(&self) -> &'static str;

    /// Every spelling accepted on input, canonical one first.
    fn symbols(&self) -> &'static [&'static str];

    fn multiplier(&self) -> f64 {
        (Self::BASE as f64).powi(self.power() as i32)
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::SCALE
            .iter()
            .find(|p| p.symbols().contains(&symbol))
            .copied()
    }

    /// Split a prefixed word into its prefix and the remainder. The
    /// longest matching prefix wins, so "dam" reads as deca-metre. The
    /// remainder is never empty.
    fn split(word: &str) -> Option<(Self, &str)> {
        Self::SCALE
            .iter()
            .flat_map(|p| p.symbols().iter().map(move |s| (*p, *s)))
            .filter(|(_, s)| word.len() > s.len() && word.starts_with(s))
            .max_by_key(|(_, s)| s.chars().count())
            .map(|(p, s)| (p, &word[s.len()..]))
    }
}
