use crate::core::ConfigProvider;
use crate::utils::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// 1-based.
    pub current_page: usize,
    pub total_pages: usize,
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Number of listing pages. An empty listing still has one (empty) page.
pub fn page_count(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total_items.div_ceil(per_page).max(1)
}

pub fn page_numbers(total_items: usize, per_page: usize) -> impl Iterator<Item = usize> {
    1..=page_count(total_items, per_page)
}

pub fn paginate<T>(items: &[T], per_page: usize, page: usize) -> Result<Page<'_, T>> {
    let total_pages = page_count(items.len(), per_page);
    if page == 0 || page > total_pages {
        return Err(ConfigError::PaginationError { page, total_pages });
    }

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());

    Ok(Page {
        current_page: page,
        total_pages,
        items: &items[start.min(end)..end],
    })
}

/// Paginates with the site's `posts_per_page`.
pub fn paginate_posts<'a, T>(
    config: &impl ConfigProvider,
    items: &'a [T],
    page: usize,
) -> Result<Page<'a, T>> {
    paginate(items, config.site().posts_per_page, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(7, 3), 3);
        assert_eq!(page_count(6, 3), 2);
        assert_eq!(page_count(1, 3), 1);
        assert_eq!(page_count(0, 3), 1);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items: Vec<u32> = (1..=7).collect();
        let page = paginate(&items, 3, 3).unwrap();
        assert_eq!(page.items, &[7]);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn out_of_range_pages_are_errors() {
        let items: Vec<u32> = (1..=7).collect();
        assert!(paginate(&items, 3, 0).is_err());
        assert!(matches!(
            paginate(&items, 3, 4),
            Err(ConfigError::PaginationError { page: 4, total_pages: 3 })
        ));
    }

    #[test]
    fn empty_listing_has_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 3, 1).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page_numbers(0, 3).collect::<Vec<_>>(), vec![1]);
    }
}
