//! Books repository.
//!
//! Reference expansion (author, genre set) is done with joins; the genre
//! many-to-many goes through the book_genres junction table.

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, Book, BookListRow, BookTitle, Genre},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All books with the author expanded to a display name, sorted by
    /// case-folded title.
    pub async fn list_with_authors(&self) -> AppResult<Vec<BookListRow>> {
        let books = sqlx::query_as::<_, BookListRow>(
            r#"
            SELECT b.id, b.title, a.family_name || ', ' || a.first_name AS author_name
            FROM books b
            JOIN authors a ON a.id = b.author_id
            ORDER BY UPPER(b.title) ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Minimal id/title list for selection fields, in title order.
    pub async fn reference_list(&self) -> AppResult<Vec<BookTitle>> {
        let books = sqlx::query_as::<_, BookTitle>(
            "SELECT id, title FROM books ORDER BY UPPER(title) ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Find by identifier without reference expansion.
    pub async fn find(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, title, author_id, summary, isbn FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Find by identifier with author and genre set expanded.
    pub async fn find_with_refs(&self, id: i32) -> AppResult<Option<Book>> {
        let Some(mut book) = self.find(id).await? else {
            return Ok(None);
        };

        book.author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, family_name, date_of_birth, date_of_death
            FROM authors WHERE id = $1
            "#,
        )
        .bind(book.author_id)
        .fetch_optional(&self.pool)
        .await?;

        book.genres = self.genres_for_book(id).await?;

        Ok(Some(book))
    }

    /// Genres linked to a book, in name order.
    pub async fn genres_for_book(&self, book_id: i32) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            WHERE bg.book_id = $1
            ORDER BY g.name ASC
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(genres)
    }

    /// Books written by an author, in title order.
    pub async fn find_by_author(&self, author_id: i32) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author_id, summary, isbn
            FROM books
            WHERE author_id = $1
            ORDER BY UPPER(title) ASC
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Books carrying a genre, in title order.
    pub async fn find_by_genre(&self, genre_id: i32) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.id, b.title, b.author_id, b.summary, b.isbn
            FROM books b
            JOIN book_genres bg ON bg.book_id = b.id
            WHERE bg.genre_id = $1
            ORDER BY UPPER(b.title) ASC
            "#,
        )
        .bind(genre_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    pub async fn insert(
        &self,
        title: &str,
        author_id: i32,
        summary: &str,
        isbn: &str,
        genre_ids: &[i32],
    ) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, author_id, summary, isbn)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(author_id)
        .bind(summary)
        .bind(isbn)
        .fetch_one(&self.pool)
        .await?;

        self.sync_book_genres(id, genre_ids).await?;

        Ok(id)
    }

    pub async fn update(
        &self,
        id: i32,
        title: &str,
        author_id: i32,
        summary: &str,
        isbn: &str,
        genre_ids: &[i32],
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, author_id = $2, summary = $3, isbn = $4
            WHERE id = $5
            "#,
        )
        .bind(title)
        .bind(author_id)
        .bind(summary)
        .bind(isbn)
        .bind(id)
        .execute(&self.pool)
        .await?;

        // A vanished book must not get junction rows re-inserted against it.
        if result.rows_affected() == 0 {
            return Ok(false);
        }

        self.sync_book_genres(id, genre_ids).await?;

        Ok(true)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Replace the genre set for a book: delete existing junction rows, then
    /// insert the new set.
    async fn sync_book_genres(&self, book_id: i32, genre_ids: &[i32]) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        for genre_id in genre_ids {
            sqlx::query(
                r#"
                INSERT INTO book_genres (book_id, genre_id)
                VALUES ($1, $2)
                ON CONFLICT (book_id, genre_id) DO NOTHING
                "#,
            )
            .bind(book_id)
            .bind(genre_id)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }
}
