//! Active-section and scroll-progress tracking.
//!
//! The tracker only sees numbers: the browser layer samples `scrollY`, the
//! viewport and document heights, and each section's bounding rectangle, and
//! hands them over through [`ScrollMetrics`] and a [`SectionLayout`].

use tracing::debug;

/// Distance from the top of the viewport, in CSS pixels, of the line a
/// section has to straddle to count as active.
pub const ACTIVATION_OFFSET: f64 = 100.0;

/// Back-to-top appears once the page has scrolled past this share of the
/// viewport height.
pub const BACK_TO_TOP_RATIO: f64 = 0.5;

/// Viewport-relative vertical extent of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn straddles(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Looks up where a section currently sits. `None` means the element is not
/// on the page, which is never an error.
pub trait SectionLayout {
    fn section_rect(&self, id: &str) -> Option<SectionRect>;
}

impl<F> SectionLayout for F
where
    F: Fn(&str) -> Option<SectionRect>,
{
    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        self(id)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub active_section: Option<String>,
    pub progress: f64,
    pub show_back_to_top: bool,
}

impl ScrollSnapshot {
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }
}

pub fn scroll_progress(metrics: &ScrollMetrics) -> f64 {
    let total = metrics.document_height - metrics.viewport_height;
    if !total.is_finite() || total <= 0.0 || !metrics.scroll_y.is_finite() {
        return 0.0;
    }

    (metrics.scroll_y / total).clamp(0.0, 1.0)
}

pub fn should_show_back_to_top(metrics: &ScrollMetrics) -> bool {
    metrics.scroll_y > metrics.viewport_height * BACK_TO_TOP_RATIO
}

/// First section in `ids` order whose rectangle straddles the activation
/// offset. Declared order wins over how much of a section is visible.
pub fn active_section<'a, L>(ids: &'a [String], layout: &L) -> Option<&'a str>
where
    L: SectionLayout + ?Sized,
{
    ids.iter()
        .map(String::as_str)
        .find(|id| {
            layout
                .section_rect(id)
                .is_some_and(|rect| rect.straddles(ACTIVATION_OFFSET))
        })
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    section_ids: Vec<String>,
    snapshot: ScrollSnapshot,
}

impl ScrollTracker {
    pub fn new<I, S>(section_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            section_ids: section_ids.into_iter().map(Into::into).collect(),
            snapshot: ScrollSnapshot::default(),
        }
    }

    pub fn snapshot(&self) -> &ScrollSnapshot {
        &self.snapshot
    }

    pub fn compute<L>(&self, metrics: &ScrollMetrics, layout: &L) -> ScrollSnapshot
    where
        L: SectionLayout + ?Sized,
    {
        ScrollSnapshot {
            active_section: active_section(&self.section_ids, layout).map(str::to_string),
            progress: scroll_progress(metrics),
            show_back_to_top: should_show_back_to_top(metrics),
        }
    }

    /// Recomputes the snapshot. Returns `true` when anything changed.
    pub fn update<L>(&mut self, metrics: &ScrollMetrics, layout: &L) -> bool
    where
        L: SectionLayout + ?Sized,
    {
        let next = self.compute(metrics, layout);
        if next == self.snapshot {
            return false;
        }

        if next.active_section != self.snapshot.active_section {
            debug!(
                from = ?self.snapshot.active_section,
                to = ?next.active_section,
                "active section changed"
            );
        }

        self.snapshot = next;
        true
    }
}
