pub mod postgres_repositories;
pub mod repository;
pub mod unit_of_work;
pub mod utils;

pub use postgres_repositories::{ActivityRepositories, PostgresRepositories};
pub use unit_of_work::{Executor, TransactionAware, TransactionResult, UnitOfWork};

#[cfg(test)]
pub mod test_helper;
