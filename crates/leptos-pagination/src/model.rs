//! Pagination Model
//!
//! Pure page arithmetic behind the pagination components.

/// Which side of the current page an ellipsis stands for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EllipsisSide {
    Start,
    End,
}

/// One rendered position in the page list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageSlot {
    /// A clickable 1-based page number
    Page(u32),
    /// A gap of hidden pages
    Ellipsis(EllipsisSide),
}

/// Current page and page count, both 1-based
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    pub current: u32,
    pub total: u32,
}

impl PaginationState {
    pub fn new(current: u32, total: u32) -> Self {
        Self { current, total }
    }

    pub fn prev_disabled(&self) -> bool {
        self.current <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current >= self.total
    }

    /// Page reached by "previous", if it is enabled
    pub fn prev_target(&self) -> Option<u32> {
        (!self.prev_disabled()).then(|| self.current - 1)
    }

    /// Page reached by "next", if it is enabled
    pub fn next_target(&self) -> Option<u32> {
        (!self.next_disabled()).then(|| self.current + 1)
    }

    pub fn is_current(&self, page: u32) -> bool {
        self.current == page
    }

    /// Slots to render.
    ///
    /// With no `window`, or when every page fits inside it, this is simply
    /// `1..=total`. Otherwise the first and last pages are always kept,
    /// `window` pages are shown around the current one, and each gap
    /// becomes a single ellipsis.
    pub fn slots(&self, window: Option<u32>) -> Vec<PageSlot> {
        let total = self.total;
        let window = match window {
            Some(w) if total > w.saturating_add(2) => w.max(1),
            _ => return (1..=total).map(PageSlot::Page).collect(),
        };

        // Keep the window inside 2..=total-1 so first/last are never repeated
        let current = self.current.clamp(1, total);
        let half = window / 2;
        let mut start = current.saturating_sub(half).max(2);
        let mut end = start + window - 1;
        if end > total - 1 {
            end = total - 1;
            start = end + 1 - window;
        }

        let mut slots = Vec::with_capacity(window as usize + 4);
        slots.push(PageSlot::Page(1));
        if start > 2 {
            slots.push(PageSlot::Ellipsis(EllipsisSide::Start));
        }
        slots.extend((start..=end).map(PageSlot::Page));
        if end < total - 1 {
            slots.push(PageSlot::Ellipsis(EllipsisSide::End));
        }
        slots.push(PageSlot::Page(total));
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(slots: &[PageSlot]) -> Vec<u32> {
        slots
            .iter()
            .filter_map(|s| match s {
                PageSlot::Page(n) => Some(*n),
                PageSlot::Ellipsis(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_first_page_disables_previous_only() {
        let state = PaginationState::new(1, 3);
        assert!(state.prev_disabled());
        assert!(!state.next_disabled());
        assert_eq!(state.prev_target(), None);
        assert_eq!(state.next_target(), Some(2));
    }

    #[test]
    fn test_last_page_disables_next_only() {
        let state = PaginationState::new(3, 3);
        assert!(!state.prev_disabled());
        assert!(state.next_disabled());
        assert_eq!(state.prev_target(), Some(2));
        assert_eq!(state.next_target(), None);
    }

    #[test]
    fn test_single_page_disables_both() {
        let state = PaginationState::new(1, 1);
        assert!(state.prev_disabled());
        assert!(state.next_disabled());
        assert_eq!(state.slots(None), vec![PageSlot::Page(1)]);
    }

    #[test]
    fn test_disabled_iff_at_boundary() {
        for total in 1..=10 {
            for current in 1..=total {
                let state = PaginationState::new(current, total);
                assert_eq!(state.prev_disabled(), current == 1);
                assert_eq!(state.next_disabled(), current == total);
            }
        }
    }

    #[test]
    fn test_slots_without_window_lists_every_page() {
        let state = PaginationState::new(4, 10);
        assert_eq!(pages(&state.slots(None)), (1..=10).collect::<Vec<_>>());
        assert!(state.slots(None).iter().all(|s| matches!(s, PageSlot::Page(_))));
    }

    #[test]
    fn test_slots_window_larger_than_total() {
        let state = PaginationState::new(2, 5);
        assert_eq!(pages(&state.slots(Some(5))), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_slots_window_in_middle() {
        let state = PaginationState::new(10, 20);
        assert_eq!(
            state.slots(Some(3)),
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis(EllipsisSide::Start),
                PageSlot::Page(9),
                PageSlot::Page(10),
                PageSlot::Page(11),
                PageSlot::Ellipsis(EllipsisSide::End),
                PageSlot::Page(20),
            ]
        );
    }

    #[test]
    fn test_slots_window_at_edges() {
        let first = PaginationState::new(1, 20).slots(Some(3));
        assert_eq!(
            first,
            vec![
                PageSlot::Page(1),
                PageSlot::Page(2),
                PageSlot::Page(3),
                PageSlot::Page(4),
                PageSlot::Ellipsis(EllipsisSide::End),
                PageSlot::Page(20),
            ]
        );

        let last = PaginationState::new(20, 20).slots(Some(3));
        assert_eq!(
            last,
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis(EllipsisSide::Start),
                PageSlot::Page(17),
                PageSlot::Page(18),
                PageSlot::Page(19),
                PageSlot::Page(20),
            ]
        );
    }
}
