//! Range aggregate functions (`SUM`, `AVG`, `MIN`, `MAX`).
//!
//! A range is iterated row-major, inclusive of both corners. Corners are
//! signed so that references such as `A0` (which lex but name no cell) keep
//! their place in the rectangle and contribute 0. An inverted rectangle is
//! empty: `MIN` stays at `+inf`, `MAX` at `-inf`, `SUM` and `AVG` at 0.
//!
//! Only the part of a rectangle inside the lookup's extent is visited. The
//! cells outside it all resolve to 0, so they are folded in once and counted
//! toward `AVG`'s divisor without being iterated.

use crate::engine::{CellRef, ValueLookup};

/// The aggregate applied by a range function call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeFn {
    Sum,
    Avg,
    Min,
    Max,
}

impl RangeFn {
    /// Map a function name to its aggregate. Names are case-sensitive; any
    /// name other than `AVG`, `MIN` or `MAX` adds like `SUM`.
    pub fn from_name(name: &str) -> RangeFn {
        match name {
            "AVG" => RangeFn::Avg,
            "MIN" => RangeFn::Min,
            "MAX" => RangeFn::Max,
            _ => RangeFn::Sum,
        }
    }

    fn initial(self) -> f64 {
        match self {
            RangeFn::Min => f64::INFINITY,
            RangeFn::Max => f64::NEG_INFINITY,
            RangeFn::Sum | RangeFn::Avg => 0.0,
        }
    }

    fn fold(self, acc: f64, v: f64) -> f64 {
        match self {
            RangeFn::Min if v < acc => v,
            RangeFn::Max if v > acc => v,
            RangeFn::Min | RangeFn::Max => acc,
            RangeFn::Sum | RangeFn::Avg => acc + v,
        }
    }
}

/// Rectangle between two signed zero-based (col, row) corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    pub start: (i64, i64),
    pub end: (i64, i64),
}

impl Range {
    pub fn new(start: (i64, i64), end: (i64, i64)) -> Range {
        Range { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.end.0 < self.start.0 || self.end.1 < self.start.1
    }

    /// Number of cells in the rectangle. A float, since the span of two
    /// `i64` corners need not fit any integer type.
    pub fn cell_count(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let span = |a: i64, b: i64| (i128::from(b) - i128::from(a) + 1) as f64;
        span(self.start.0, self.end.0) * span(self.start.1, self.end.1)
    }

    /// The part of the rectangle with non-negative coordinates inside
    /// `extent` (`(rows, cols)`), or `None` if nothing is left.
    pub fn clamp_to(&self, extent: Option<(usize, usize)>) -> Option<Range> {
        let last = |n: usize| i64::try_from(n).unwrap_or(i64::MAX) - 1;
        let (max_col, max_row) = match extent {
            Some((rows, cols)) => (last(cols), last(rows)),
            None => (i64::MAX, i64::MAX),
        };
        let clamped = Range {
            start: (self.start.0.max(0), self.start.1.max(0)),
            end: (self.end.0.min(max_col), self.end.1.min(max_row)),
        };
        (!clamped.is_empty()).then_some(clamped)
    }

    fn resolve<L: ValueLookup + ?Sized>(lookup: &L, col: i64, row: i64) -> f64 {
        let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
            return 0.0;
        };
        lookup.value(&CellRef::new(col, row)).unwrap_or(0.0)
    }
}

/// Apply `func` over `range`, reading values through `lookup`.
pub fn eval_range<L: ValueLookup + ?Sized>(func: RangeFn, range: Range, lookup: &L) -> f64 {
    let mut result = func.initial();
    if range.is_empty() {
        return result;
    }

    let visible = range.clamp_to(lookup.extent());
    if let Some(inner) = visible {
        for row in inner.start.1..=inner.end.1 {
            for col in inner.start.0..=inner.end.0 {
                result = func.fold(result, Range::resolve(lookup, col, row));
            }
        }
    }
    if visible != Some(range) {
        // Everything outside the extent resolves to 0.
        result = func.fold(result, 0.0);
    }

    if func == RangeFn::Avg {
        result /= range.cell_count();
    }
    result
}
