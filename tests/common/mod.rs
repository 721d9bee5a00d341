use std::sync::Arc;

use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use products_api::{config, config::AppConfig, db, Category, ProductRecord, ProductService};

/// Helper harness backed by an in-memory SQLite database.
///
/// A single-connection pool keeps every statement on the same in-memory
/// database for the lifetime of the harness.
pub struct TestDb {
    pub db: Arc<DatabaseConnection>,
}

impl TestDb {
    /// Construct a fresh database with the products schema applied.
    pub async fn new() -> Self {
        config::init_tracing("info");

        let mut cfg = AppConfig::new("sqlite::memory:".to_string(), "test".to_string());
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        Self { db: Arc::new(pool) }
    }

    pub fn product_service(&self) -> ProductService {
        ProductService::new(self.db.clone())
    }
}

const PRODUCT_NAMES: [&str; 11] = [
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

const CATEGORIES: [Category; 6] = [
    Category::Unknown,
    Category::Cloths,
    Category::Food,
    Category::Housewares,
    Category::Automotive,
    Category::Tools,
];

/// Deterministic generator of valid transient products.
///
/// Identical seeds produce identical sequences, keeping randomized test
/// populations reproducible.
pub struct ProductFactory {
    rng: StdRng,
}

impl ProductFactory {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One transient product: pooled name, faker description, 2-dp price in
    /// [0.50, 2000.00], random availability and category.
    pub fn build(&mut self) -> ProductRecord {
        let name = PRODUCT_NAMES[self.rng.gen_range(0..PRODUCT_NAMES.len())];
        let description: String = Sentence(3..8).fake_with_rng(&mut self.rng);
        let cents: i64 = self.rng.gen_range(50..=200_000);
        let price = Decimal::new(cents, 2);
        let available = self.rng.gen_bool(0.5);
        let category = CATEGORIES[self.rng.gen_range(0..CATEGORIES.len())];

        ProductRecord::new(name, description, price, available, category)
    }

    #[allow(dead_code)]
    pub fn build_many(&mut self, count: usize) -> Vec<ProductRecord> {
        (0..count).map(|_| self.build()).collect()
    }
}
