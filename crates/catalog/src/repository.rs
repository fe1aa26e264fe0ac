use async_trait::async_trait;
use contracts::domain::product::Product;
use thiserror::Error;

use crate::slug::generate_slug;

// ============================================================================
// Product source
// ============================================================================

/// Окно постраничной выборки у хостируемой таблицы (серверный потолок строк)
pub const FETCH_WINDOW: usize = 1000;

/// Ошибка удалённого источника. «Не найдено» ошибкой не считается —
/// это нормальный результат (`Ok(None)`).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Удалённый источник товаров: range-пагинация и точный поиск по slug.
/// Футуры не `Send` — реализация живёт в wasm.
#[async_trait(?Send)]
pub trait ProductSource {
    /// Вернуть до `limit` строк начиная с `offset`, в серверном порядке
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Product>, SourceError>;

    /// Точный поиск по сохранённому в таблице slug
    async fn fetch_by_slug(&self, slug: &str) -> Result<Option<Product>, SourceError>;
}

// ============================================================================
// Repository adapter
// ============================================================================

/// Адаптер над удалённым источником: собирает полный набор через окна
/// пагинации, отбрасывает архив, досоздаёт slug и нормализует порядок.
pub struct ProductRepository<S: ProductSource> {
    source: S,
    window: usize,
}

impl<S: ProductSource> ProductRepository<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            window: FETCH_WINDOW,
        }
    }

    /// Нестандартное окно выборки (в тестах — маленькое)
    pub fn with_window(source: S, window: usize) -> Self {
        assert!(window > 0, "fetch window must be positive");
        Self { source, window }
    }

    /// Загрузить все неархивные товары.
    ///
    /// Источник опрашивается окнами по `window` строк до первой неполной
    /// страницы. Любая ошибка источника прерывает выборку целиком — частичный
    /// результат наружу не отдаётся. После сборки: архив отбрасывается,
    /// отсутствующий slug синтезируется, набор сортируется по `sort_order`
    /// по возрастанию (None — в конец), на равных сохраняется порядок выдачи.
    pub async fn fetch_all(&self) -> Result<Vec<Product>, SourceError> {
        let mut rows = Vec::new();
        let mut offset = 0;
        loop {
            let page = self.source.fetch_page(offset, self.window).await?;
            let fetched = page.len();
            rows.extend(page);
            if fetched < self.window {
                break;
            }
            offset += self.window;
        }

        log::debug!("источник вернул {} строк", rows.len());

        let mut products: Vec<Product> = rows.into_iter().filter(|p| !p.archived).collect();
        for p in &mut products {
            if p.slug.is_empty() {
                p.slug = generate_slug(&p.name, &p.id);
            }
        }

        // стабильная сортировка: ничья сохраняет серверный порядок
        products.sort_by_key(|p| p.sort_order.unwrap_or(i64::MAX));
        Ok(products)
    }

    /// Найти товар по slug.
    ///
    /// Сначала точный поиск по сохранённому полю. Если таблица slug не
    /// хранит, повторно выводим синтетический slug для каждого неархивного
    /// товара и берём первое совпадение. `Ok(None)` — валидный итог,
    /// а не ошибка.
    pub async fn fetch_by_slug(&self, slug: &str) -> Result<Option<Product>, SourceError> {
        if let Some(mut product) = self.source.fetch_by_slug(slug).await? {
            if product.archived {
                return Ok(None);
            }
            if product.slug.is_empty() {
                product.slug = generate_slug(&product.name, &product.id);
            }
            return Ok(Some(product));
        }

        let mut found: Option<Product> = None;
        for product in self.fetch_all().await? {
            if product.slug == slug {
                if let Some(first) = &found {
                    // коллизия синтетических slug: побеждает первое совпадение
                    log::warn!(
                        "slug collision: '{}' у товаров {} и {}",
                        slug,
                        first.id,
                        product.id
                    );
                    break;
                }
                found = Some(product);
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct MockSource {
        products: Vec<Product>,
        fail_from_offset: Option<usize>,
        page_calls: Cell<usize>,
    }

    impl MockSource {
        fn new(products: Vec<Product>) -> Self {
            Self {
                products,
                fail_from_offset: None,
                page_calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl ProductSource for MockSource {
        async fn fetch_page(
            &self,
            offset: usize,
            limit: usize,
        ) -> Result<Vec<Product>, SourceError> {
            self.page_calls.set(self.page_calls.get() + 1);
            if let Some(fail_at) = self.fail_from_offset {
                if offset >= fail_at {
                    return Err(SourceError::Transport("connection reset".into()));
                }
            }
            Ok(self
                .products
                .iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect())
        }

        async fn fetch_by_slug(&self, slug: &str) -> Result<Option<Product>, SourceError> {
            Ok(self
                .products
                .iter()
                .find(|p| !p.slug.is_empty() && p.slug == slug)
                .cloned())
        }
    }

    fn product(id: &str, name: &str) -> Product {
        let mut p = Product::empty(id);
        p.name = name.to_string();
        p
    }

    #[tokio::test]
    async fn test_assembles_across_windows() {
        let products: Vec<Product> = (0..5)
            .map(|i| product(&format!("id-{}", i), &format!("Товар {}", i)))
            .collect();
        let source = MockSource::new(products);
        let repo = ProductRepository::with_window(source, 2);

        let all = repo.fetch_all().await.unwrap();
        assert_eq!(all.len(), 5);
        // 2 + 2 + 1: третья страница неполная, четвёртого запроса нет
        assert_eq!(repo.source.page_calls.get(), 3);
    }

    #[tokio::test]
    async fn test_exact_window_multiple_needs_trailing_empty_page() {
        let products: Vec<Product> = (0..4)
            .map(|i| product(&format!("id-{}", i), "Товар"))
            .collect();
        let source = MockSource::new(products);
        let repo = ProductRepository::with_window(source, 2);

        let all = repo.fetch_all().await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(repo.source.page_calls.get(), 3);
    }

    #[tokio::test]
    async fn test_archived_never_appear() {
        let mut archived = product("id-a", "Архивный");
        archived.archived = true;
        let source = MockSource::new(vec![product("id-1", "Живой"), archived]);
        let repo = ProductRepository::new(source);

        let all = repo.fetch_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all.iter().all(|p| !p.archived));
    }

    #[tokio::test]
    async fn test_missing_slug_is_synthesized_persisted_kept() {
        let mut with_slug = product("id-1", "Перчатки");
        with_slug.slug = "custom-slug".to_string();
        let without_slug = product("id-2", "Перчатки");

        let source = MockSource::new(vec![with_slug, without_slug]);
        let repo = ProductRepository::new(source);

        let all = repo.fetch_all().await.unwrap();
        assert_eq!(all[0].slug, "custom-slug");
        assert_eq!(all[1].slug, generate_slug("Перчатки", "id-2"));
    }

    #[tokio::test]
    async fn test_sort_order_ascending_nulls_last_stable() {
        let mut a = product("a", "A");
        a.sort_order = Some(10);
        let b = product("b", "B"); // без приоритета
        let mut c = product("c", "C");
        c.sort_order = Some(1);
        let d = product("d", "D"); // без приоритета, после b

        let source = MockSource::new(vec![a, b, c, d]);
        let repo = ProductRepository::new(source);

        let ids: Vec<String> = repo
            .fetch_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["c", "a", "b", "d"]);
    }

    #[tokio::test]
    async fn test_error_aborts_whole_fetch() {
        let products: Vec<Product> = (0..5)
            .map(|i| product(&format!("id-{}", i), "Товар"))
            .collect();
        let mut source = MockSource::new(products);
        source.fail_from_offset = Some(2);
        let repo = ProductRepository::with_window(source, 2);

        let result = repo.fetch_all().await;
        assert!(matches!(result, Err(SourceError::Transport(_))));
    }

    #[tokio::test]
    async fn test_fetch_by_slug_direct_hit() {
        let mut p = product("id-1", "Перчатки");
        p.slug = "perchatki".to_string();
        let source = MockSource::new(vec![p]);
        let repo = ProductRepository::new(source);

        let found = repo.fetch_by_slug("perchatki").await.unwrap();
        assert_eq!(found.unwrap().id, "id-1");
    }

    #[tokio::test]
    async fn test_fetch_by_slug_fallback_to_synthetic() {
        // slug в таблице не сохранён: ищем по выведенному значению
        let p = product("abcd1234-ef", "Салфетки влажные");
        let expected = generate_slug("Салфетки влажные", "abcd1234-ef");

        let source = MockSource::new(vec![p]);
        let repo = ProductRepository::new(source);

        let found = repo.fetch_by_slug(&expected).await.unwrap();
        assert_eq!(found.unwrap().id, "abcd1234-ef");
    }

    #[tokio::test]
    async fn test_fetch_by_slug_not_found_is_ok_none() {
        let source = MockSource::new(vec![product("id-1", "Товар")]);
        let repo = ProductRepository::new(source);

        let found = repo.fetch_by_slug("нет-такого").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_fetch_by_slug_hides_archived() {
        let mut p = product("id-1", "Архивный");
        p.slug = "arhivnyy".to_string();
        p.archived = true;
        let source = MockSource::new(vec![p]);
        let repo = ProductRepository::new(source);

        let found = repo.fetch_by_slug("arhivnyy").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_collision_first_match_wins() {
        // два товара с одинаковым названием и намеренно одинаковым
        // синтетическим slug (совпадают первые 8 символов id)
        let first = product("same-id-1", "Губка");
        let second = product("same-id-2", "Губка");
        let expected = generate_slug("Губка", "same-id-1");
        assert_eq!(expected, generate_slug("Губка", "same-id-2"));

        let source = MockSource::new(vec![first, second]);
        let repo = ProductRepository::new(source);

        let found = repo.fetch_by_slug(&expected).await.unwrap().unwrap();
        assert_eq!(found.id, "same-id-1");
    }
}
