use clients_crm::db::{DbPool, establish_connection_pool, run_migrations};
use clients_crm::repository::DieselRepository;
use tempfile::TempDir;

/// SQLite database in a temporary directory with all migrations applied.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"), 4)
            .expect("failed to create pool");
        run_migrations(&pool).expect("failed to run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[allow(dead_code)]
    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}
