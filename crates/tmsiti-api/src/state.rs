//! Shared application state passed to every handler.

use std::sync::Arc;

use tracing::warn;

use tmsiti_auth::{
    CredentialIssuer, CredentialValidator, PasswordHasher, RevocationLedger, RevocationSweeper,
    SessionGuard, TokenEncoder, TokenVerifier,
};
use tmsiti_core::config::AppConfig;
use tmsiti_core::result::AppResult;
use tmsiti_core::traits::storage::StorageProvider;
use tmsiti_database::DatabasePool;
use tmsiti_database::repositories::{
    AdminRepository, LegalActRepository, MenuRepository, NewsRepository, RevokedTokenRepository,
    StaffRepository, StandardRepository, VacancyRepository,
};
use tmsiti_service::{
    LegalActService, MenuService, NewsService, StaffService, StandardService, VacancyService,
};
use tmsiti_storage::{FileStore, LocalStorageProvider};

/// Application state shared across all request handlers.
///
/// Built once at startup; cloning is cheap since every member is behind an
/// `Arc` or is itself a pool handle.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database connection pool.
    pub db: DatabasePool,
    /// Local upload storage.
    pub storage: Arc<LocalStorageProvider>,

    // ── Auth ──
    /// Login and admin registration.
    pub issuer: Arc<CredentialIssuer>,
    /// Per-request bearer token checks.
    pub guard: Arc<SessionGuard>,
    /// Revoked token denylist.
    pub ledger: Arc<RevocationLedger>,
    /// Expired ledger entry pruning.
    pub sweeper: Arc<RevocationSweeper>,

    // ── Services ──
    /// News articles.
    pub news: Arc<NewsService>,
    /// Vacancies.
    pub vacancies: Arc<VacancyService>,
    /// Laws, resolutions, and decrees.
    pub legal_acts: Arc<LegalActService>,
    /// Menus and submenus.
    pub menus: Arc<MenuService>,
    /// Standards with PDF documents.
    pub standards: Arc<StandardService>,
    /// Leadership directory.
    pub staff: Arc<StaffService>,
}

impl AppState {
    /// Wires repositories, auth components, and services over `db`.
    ///
    /// Creates the storage root if it does not exist yet, and warns when
    /// the staff placeholder portrait is missing from it.
    pub async fn new(config: AppConfig, db: DatabasePool) -> AppResult<Self> {
        let pool = db.pool().clone();

        // ── Repositories ──
        let admin_repo = AdminRepository::new(pool.clone());
        let revoked_repo = RevokedTokenRepository::new(pool.clone());
        let news_repo = NewsRepository::new(pool.clone());
        let vacancy_repo = VacancyRepository::new(pool.clone());
        let legal_repo = LegalActRepository::new(pool.clone());
        let menu_repo = MenuRepository::new(pool.clone());
        let standard_repo = StandardRepository::new(pool.clone());
        let staff_repo = StaffRepository::new(pool);

        // ── Auth ──
        let ledger = Arc::new(RevocationLedger::new(revoked_repo));
        let verifier = Arc::new(TokenVerifier::new(&config.auth));
        let encoder = Arc::new(TokenEncoder::new(&config.auth)?);
        let guard = Arc::new(SessionGuard::new(
            Arc::clone(&ledger),
            verifier,
            admin_repo.clone(),
        ));
        let issuer = Arc::new(CredentialIssuer::new(
            admin_repo,
            PasswordHasher::new(),
            encoder,
            CredentialValidator::new(&config.auth),
        ));
        let sweeper = Arc::new(RevocationSweeper::new(Arc::clone(&ledger)));

        // ── Storage ──
        let storage = Arc::new(LocalStorageProvider::new(&config.storage.root_path).await?);
        let images = FileStore::images(storage.clone(), &config.storage);
        let documents = FileStore::documents(storage.clone(), &config.storage);

        let placeholder = &config.storage.placeholder_image;
        if !storage.exists(placeholder).await? {
            warn!(
                path = %placeholder,
                "Placeholder portrait not found; staff without a photo will link to a missing file"
            );
        }

        // ── Services ──
        let news = Arc::new(NewsService::new(news_repo, images.clone()));
        let vacancies = Arc::new(VacancyService::new(vacancy_repo));
        let legal_acts = Arc::new(LegalActService::new(legal_repo));
        let menus = Arc::new(MenuService::new(menu_repo));
        let standards = Arc::new(StandardService::new(standard_repo, documents));
        let staff = Arc::new(StaffService::new(
            staff_repo,
            images,
            config.storage.public_path(placeholder),
        ));

        Ok(Self {
            config: Arc::new(config),
            db,
            storage,
            issuer,
            guard,
            ledger,
            sweeper,
            news,
            vacancies,
            legal_acts,
            menus,
            standards,
            staff,
        })
    }
}
