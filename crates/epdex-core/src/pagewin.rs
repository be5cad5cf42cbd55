//! Visible page window for pagination UIs.
//!
//! [`visible_window`] is a pure projection of `(current, total, delta)` into
//! the ordered token sequence a pager renders: the first and last pages are
//! always shown, a contiguous window of width `2 * delta + 1` surrounds the
//! current page, and a gap collapses to an ellipsis only when it hides more
//! than one page (a single hidden page is cheaper to show than to elide).

/// One pager slot: a concrete page number or a collapsed gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A navigable page number.
    Page(u32),
    /// A gap hiding two or more pages.
    Ellipsis,
}

/// Compute the pager token sequence.
///
/// Deterministic and side-effect-free. `current` is clamped into
/// `[1, total]`; a `total` of zero is treated as one page (an empty result
/// set still renders page 1).
#[must_use]
pub fn visible_window(current: u32, total: u32, delta: u32) -> Vec<PageToken> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let window_lo = current.saturating_sub(delta).max(1);
    let window_hi = current.saturating_add(delta).min(total);

    let mut kept: Vec<u32> = Vec::with_capacity(2 * delta as usize + 3);
    for page in 1..=total {
        if page == 1 || page == total || (window_lo..=window_hi).contains(&page) {
            kept.push(page);
        }
    }

    let mut tokens = Vec::with_capacity(kept.len() + 2);
    for (i, &page) in kept.iter().enumerate() {
        if i > 0 {
            let prev = kept[i - 1];
            match page - prev {
                1 => {}
                // A single hidden page is rendered, not elided.
                2 => tokens.push(PageToken::Page(prev + 1)),
                _ => tokens.push(PageToken::Ellipsis),
            }
        }
        tokens.push(PageToken::Page(page));
    }
    tokens
}
