//! Catalog home page

use crate::{
    error::AppResult,
    render::{Outcome, ViewModel},
    repository::Repository,
};

#[derive(Clone)]
pub struct HomeService {
    repository: Repository,
}

impl HomeService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Probe store connectivity for the readiness endpoint.
    pub async fn ready(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.repository.pool)
            .await?;
        Ok(())
    }

    /// Collection counts for the home page, fetched concurrently.
    pub async fn index(&self) -> AppResult<Outcome> {
        let (book_count, book_instance_count, book_instance_available_count, author_count, genre_count) =
            tokio::try_join!(
                self.repository.books.count(),
                self.repository.book_instances.count(),
                self.repository.book_instances.count_by_status("Available"),
                self.repository.authors.count(),
                self.repository.genres.count(),
            )?;

        let mut model = ViewModel::new();
        model.insert("title", "Library Home");
        model.insert("book_count", book_count);
        model.insert("book_instance_count", book_instance_count);
        model.insert("book_instance_available_count", book_instance_available_count);
        model.insert("author_count", author_count);
        model.insert("genre_count", genre_count);
        Ok(Outcome::view("index", model))
    }
}
