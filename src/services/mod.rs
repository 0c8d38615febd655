//! Catalog services

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod home;

use crate::{config::CatalogConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub home: home::HomeService,
    pub authors: authors::AuthorsService,
    pub genres: genres::GenresService,
    pub books: books::BooksService,
    pub book_instances: book_instances::BookInstancesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, catalog: CatalogConfig) -> Self {
        Self {
            home: home::HomeService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone(), catalog.clone()),
            genres: genres::GenresService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            book_instances: book_instances::BookInstancesService::new(repository, catalog),
        }
    }
}
