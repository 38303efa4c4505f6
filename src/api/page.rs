use crate::api::types::Page;
use crate::error::Result;
use std::marker::PhantomData;

/// Lazy traversal of a cursor-paginated endpoint, yielding one batch of
/// items per page. Ends when a page carries no `next` cursor. A failed fetch
/// yields exactly one `Err` and then the iterator is exhausted; traversals
/// are not restartable.
pub struct Paginator<T, F> {
    next: Option<String>,
    fetch: F,
    _items: PhantomData<fn() -> T>,
}

impl<T, F> Paginator<T, F>
where
    F: FnMut(&str) -> Result<Page<T>>,
{
    pub fn new(start: impl Into<String>, fetch: F) -> Self {
        Self {
            next: Some(start.into()),
            fetch,
            _items: PhantomData,
        }
    }
}

impl<T, F> Iterator for Paginator<T, F>
where
    F: FnMut(&str) -> Result<Page<T>>,
{
    type Item = Result<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let url = self.next.take()?;
        match (self.fetch)(&url) {
            Ok(page) => {
                self.next = page.next;
                Some(Ok(page.values))
            }
            // `next` is already cleared, so the error is terminal.
            Err(e) => Some(Err(e)),
        }
    }
}
