//! Compact page-number display window.

/// One entry in the pagination control: a page number or an ellipsis gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// Compute the page labels to display, 1-based.
///
/// Four pages or fewer are listed in full. Beyond that: the first and last
/// page, a window of one page either side of `current_page`, and an
/// ellipsis wherever a gap remains. Entries the window shares with the
/// edges collapse, so nothing repeats.
pub fn page_labels(page_count: usize, current_page: usize) -> Vec<PageLabel> {
    if page_count == 0 {
        return Vec::new();
    }
    if page_count <= 4 {
        return (1..=page_count).map(PageLabel::Page).collect();
    }

    let current = current_page.clamp(1, page_count);
    let mut pages: Vec<usize> = vec![1, page_count];
    pages.extend((current.saturating_sub(1)..=current + 1).filter(|p| (1..=page_count).contains(p)));
    pages.sort_unstable();
    pages.dedup();

    let mut labels = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<usize> = None;
    for page in pages {
        if let Some(prev) = previous {
            if page > prev + 1 {
                labels.push(PageLabel::Ellipsis);
            }
        }
        labels.push(PageLabel::Page(page));
        previous = Some(page);
    }
    labels
}
