//! Equal-weight price indices over instrument baskets.

use crate::domain::Instrument;

/// Mean price of the instruments whose symbol is in `filter`, or of every
/// instrument when `filter` is `None`. An empty match yields `0.0`.
pub fn compute_index<S: AsRef<str>>(instruments: &[Instrument], filter: Option<&[S]>) -> f64 {
    mean(basket(instruments, filter).map(|i| i.price))
}

/// Index level today versus the previous day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexDelta {
    pub current: f64,
    pub previous: f64,
    pub diff: f64,
    /// Percent change; 0 when the previous level is 0.
    pub pct: f64,
}

/// Day-over-day move of an index, using each instrument's previous price.
pub fn index_delta<S: AsRef<str>>(instruments: &[Instrument], filter: Option<&[S]>) -> IndexDelta {
    let current = compute_index(instruments, filter);
    let previous = mean(basket(instruments, filter).map(|i| i.previous_price()));
    let diff = current - previous;
    let pct = if previous != 0.0 { diff / previous * 100.0 } else { 0.0 };
    IndexDelta {
        current,
        previous,
        diff,
        pct,
    }
}

fn basket<'a, S: AsRef<str>>(
    instruments: &'a [Instrument],
    filter: Option<&'a [S]>,
) -> impl Iterator<Item = &'a Instrument> + 'a {
    instruments.iter().filter(move |inst| match filter {
        Some(symbols) => symbols.iter().any(|s| s.as_ref() == inst.symbol),
        None => true,
    })
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
