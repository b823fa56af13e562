use chrono::NaiveDate;
use once_cell::unsync::OnceCell;

/// Mutable state shared by every item of one filter pass.
///
/// The `last+next` date bucket depends on the whole candidate list (the latest
/// past date) and on evaluation order (the first future date seen wins), so both
/// anchors live here instead of inside the filter tree. Create one context per
/// pass, or [`reset`](FilterContext::reset) it before reuse.
#[derive(Debug, Default, Clone)]
pub struct FilterContext {
    /// Latest past date across the candidates; `Some(None)` once resolved to "no past dates"
    last_past: OnceCell<Option<NaiveDate>>,
    /// First future date encountered during evaluation
    next_future: Option<NaiveDate>,
}

impl FilterContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized latest past date, computing it on first use
    pub fn last_past_date<F>(&self, compute: F) -> Option<NaiveDate>
    where
        F: FnOnce() -> Option<NaiveDate>,
    {
        *self.last_past.get_or_init(|| {
            let anchor = compute();
            log::debug!("last+next past anchor resolved to {:?}", anchor);
            anchor
        })
    }

    /// Claims `date` as the pass's next future date if none was claimed yet,
    /// then reports whether `date` is that claimed date.
    pub fn claim_next_future(&mut self, date: NaiveDate) -> bool {
        match self.next_future {
            Some(claimed) => claimed == date,
            None => {
                log::debug!("last+next future anchor claimed by {}", date);
                self.next_future = Some(date);
                true
            }
        }
    }

    pub fn next_future_date(&self) -> Option<NaiveDate> {
        self.next_future
    }

    /// Clears both anchors so the context can serve an unrelated pass
    pub fn reset(&mut self) {
        self.last_past = OnceCell::new();
        self.next_future = None;
    }
}
