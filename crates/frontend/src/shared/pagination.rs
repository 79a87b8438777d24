//! Клиентская пагинация списка в памяти.
//!
//! Страницы нумеруются с 1. Страница вне `[1, total_pages]` даёт пустой срез,
//! а не ошибку.

/// Максимум кнопок страниц одновременно
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Всё, что нужно таблице и панели пагинации для одного рендера
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub visible_pages: Vec<usize>,
    pub total_items: usize,
    /// Номер первого видимого элемента (с 1), 0 если список пуст
    pub first_item: usize,
    /// Номер последнего видимого элемента (с 1)
    pub last_item: usize,
}

impl<T> PageView<T> {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// "Mostrando 1 - 10 de 12"
    pub fn range_label(&self) -> String {
        format!(
            "Mostrando {} - {} de {}",
            self.first_item, self.last_item, self.total_items
        )
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Slice `[(page-1)*size, page*size)` of `items`, clamped to the available range
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// До пяти номеров страниц вокруг `current`, со сдвигом внутрь
/// `[1, total_pages]`.
pub fn visible_pages(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let half = MAX_VISIBLE_PAGES / 2;
    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(half).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    if end - start < MAX_VISIBLE_PAGES - 1 {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }
    (start..=end).collect()
}

pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageView<T> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let slice = page_slice(items, page, page_size);
    let first_item = if slice.is_empty() {
        0
    } else {
        (page - 1) * page_size + 1
    };
    let last_item = if slice.is_empty() {
        0
    } else {
        first_item + slice.len() - 1
    };

    PageView {
        items: slice.to_vec(),
        current_page: page,
        total_pages,
        visible_pages: visible_pages(page, total_pages),
        total_items,
        first_item,
        last_item,
    }
}

/// Шаг на `direction` (±1), только если результат остаётся в `[1, total_pages]`
pub fn step_page(current: usize, direction: i32, total_pages: usize) -> usize {
    let target = current as i64 + direction as i64;
    if target >= 1 && target <= total_pages as i64 {
        target as usize
    } else {
        current
    }
}

/// Переход сразу на `page` с ограничением `[1, max(1, total_pages)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_twelve_items_two_pages() {
        let items = numbers(12);
        let first = paginate(&items, 1, 10);
        assert_eq!(first.items.len(), 10);
        assert!(first.has_next());
        assert!(!first.has_prev());
        assert_eq!(first.range_label(), "Mostrando 1 - 10 de 12");

        let second = paginate(&items, 2, 10);
        assert_eq!(second.items, vec![11, 12]);
        assert!(!second.has_next());
        assert!(second.has_prev());
        assert_eq!(second.range_label(), "Mostrando 11 - 12 de 12");
    }

    #[test]
    fn test_pages_reconstruct_input() {
        for len in [0usize, 1, 9, 10, 11, 37] {
            for size in [1usize, 3, 10] {
                let items = numbers(len);
                let pages = total_pages(len, size);
                let mut rebuilt = Vec::new();
                for page in 1..=pages {
                    let view = paginate(&items, page, size);
                    assert!(view.items.len() <= size);
                    rebuilt.extend(view.items);
                }
                assert_eq!(rebuilt, items, "len={} size={}", len, size);
            }
        }
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items = numbers(3);
        assert!(paginate(&items, 5, 10).items.is_empty());
        assert!(paginate(&items, 0, 10).items.is_empty());
        let empty: Vec<usize> = Vec::new();
        let view = paginate(&empty, 1, 10);
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.range_label(), "Mostrando 0 - 0 de 0");
        assert!(!view.has_next());
    }

    #[test]
    fn test_visible_pages_window() {
        assert_eq!(visible_pages(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(visible_pages(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(visible_pages(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(visible_pages(2, 3), vec![1, 2, 3]);
        assert!(visible_pages(1, 0).is_empty());
    }

    #[test]
    fn test_visible_pages_length() {
        for total in 1..=12 {
            for current in 1..=total {
                assert_eq!(visible_pages(current, total).len(), total.min(MAX_VISIBLE_PAGES));
            }
        }
    }

    #[test]
    fn test_step_page() {
        assert_eq!(step_page(1, -1, 3), 1);
        assert_eq!(step_page(1, 1, 3), 2);
        assert_eq!(step_page(3, 1, 3), 3);
        assert_eq!(step_page(1, 1, 0), 1);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(3, 0), 1);
    }
}
