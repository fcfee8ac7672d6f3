//! Shared fixtures for the HTTP test suite.
//!
//! With `TEST_DATABASE_URL` set, every test runs against that Postgres
//! database: the schema is recreated before the test and dropped after it.
//! Otherwise each test gets its own in-memory store.

#![allow(dead_code)]

use std::sync::Arc;

use blog_core::domain::{Author, BlogPost, BlogPostDraft};
use blog_infra::InMemoryPostRepository;
use blog_server::AppState;
use tokio::sync::{Mutex, MutexGuard};

#[cfg(feature = "postgres")]
use blog_infra::{DatabasePool, PostgresPostRepository};
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};

pub const SEEDED_POSTS: usize = 10;

/// Live-database tests share one schema, so they run one at a time.
static LIVE_DB: Mutex<()> = Mutex::const_new(());

const FIRST_NAMES: [&str; 6] = ["Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald"];
const LAST_NAMES: [&str; 6] = ["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth"];
const WORDS: [&str; 8] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit",
];

/// Build an actix test service over `$state` with the production routes.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(blog_server::observability::RequestIdMiddleware)
                .app_data(actix_web::web::Data::new($state))
                .configure(blog_server::handlers::configure_routes),
        )
        .await
    };
}

pub struct TestContext {
    pub state: AppState,
    #[cfg(feature = "postgres")]
    pool: Option<DatabasePool>,
    _guard: Option<MutexGuard<'static, ()>>,
}

impl TestContext {
    /// Fresh store seeded with [`SEEDED_POSTS`] synthetic posts.
    pub async fn seeded() -> Self {
        let ctx = Self::empty().await;
        for n in 0..SEEDED_POSTS {
            ctx.state
                .posts
                .create(fake_draft(n))
                .await
                .expect("seeding post");
        }
        ctx
    }

    pub async fn empty() -> Self {
        #[cfg(feature = "postgres")]
        if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
            let guard = LIVE_DB.lock().await;
            let config = blog_server::AppConfig::database_config(url);
            let pool = DatabasePool::connect(&config)
                .await
                .expect("connecting to TEST_DATABASE_URL");
            Migrator::fresh(pool.conn())
                .await
                .expect("recreating schema");

            let repo = Arc::new(PostgresPostRepository::new(pool.conn().clone()));
            return Self {
                state: AppState::new(repo),
                pool: Some(pool),
                _guard: Some(guard),
            };
        }

        Self {
            state: AppState::new(Arc::new(InMemoryPostRepository::new())),
            #[cfg(feature = "postgres")]
            pool: None,
            _guard: None,
        }
    }

    pub async fn count(&self) -> usize {
        self.state.posts.list_all().await.expect("listing posts").len()
    }

    pub async fn any_post(&self) -> BlogPost {
        self.state
            .posts
            .list_all()
            .await
            .expect("listing posts")
            .into_iter()
            .next()
            .expect("store is seeded")
    }

    /// Drop the schema and release the pool. In-memory stores just go out of scope.
    pub async fn teardown(self) {
        #[cfg(feature = "postgres")]
        if let Some(pool) = self.pool {
            Migrator::down(pool.conn(), None)
                .await
                .expect("dropping schema");
            pool.close().await.expect("closing pool");
        }
    }
}

/// Deterministic but varied synthetic post input.
pub fn fake_draft(n: usize) -> BlogPostDraft {
    let sentence: Vec<&str> = (0..5).map(|i| WORDS[(n + i * 3) % WORDS.len()]).collect();
    BlogPostDraft {
        title: Some(format!("{} #{}", sentence[..3].join(" "), n)),
        author: Some(Author::new(
            FIRST_NAMES[n % FIRST_NAMES.len()],
            LAST_NAMES[(n / 2) % LAST_NAMES.len()],
        )),
        content: Some(sentence.join(" ").repeat(3)),
    }
}
