pub mod modules;
pub use modules::{auth, calculation};

pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::build_password_hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::incoming::PasswordPolicy;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
};
use crate::calculation::adapter::outgoing::{CalculationQueryPostgres, CalculationRepositoryPostgres};
use crate::calculation::application::service::{
    CreateCalculationService, DeleteCalculationService, GetCalculationsService,
    GetSingleCalculationService, PatchCalculationService,
};
use crate::calculation::application::CalculationUseCases;
use crate::config::{load_dotenv, AppConfig};
use crate::shared::api::custom_json_config;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub calculation: CalculationUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_dotenv();
    let config = AppConfig::from_env().context("invalid server configuration")?;
    let jwt_config = JwtConfig::from_env().context("invalid JWT configuration")?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("failed to run database migrations")?;
    info!("Database migrations applied");

    let db_arc = Arc::new(conn);

    // Auth components
    let password_hasher =
        build_password_hasher(&config.hasher).context("invalid password hasher settings")?;
    let password_policy: Arc<dyn PasswordPolicy> = Arc::new(BasicPasswordPolicy);
    let jwt_service = JwtTokenService::new(jwt_config);

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let create_user_use_case = CreateUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&password_hasher),
        password_policy,
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query,
        user_repo,
        password_hasher,
        Arc::new(jwt_service.clone()),
    );

    // Calculation components
    let calculation_query = CalculationQueryPostgres::new(Arc::clone(&db_arc));
    let calculation_repo = CalculationRepositoryPostgres::new(Arc::clone(&db_arc));

    let calculation = CalculationUseCases {
        create: Arc::new(CreateCalculationService::new(calculation_repo.clone())),
        get_list: Arc::new(GetCalculationsService::new(calculation_query.clone())),
        get_single: Arc::new(GetSingleCalculationService::new(calculation_query.clone())),
        patch: Arc::new(PatchCalculationService::new(
            calculation_query,
            calculation_repo.clone(),
        )),
        delete: Arc::new(DeleteCalculationService::new(calculation_repo)),
    };

    let state = AppState {
        register_user_use_case: Arc::new(create_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        calculation,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Calculations
    cfg.service(crate::calculation::adapter::incoming::web::routes::create_calculation_handler);
    cfg.service(crate::calculation::adapter::incoming::web::routes::get_calculations_handler);
    cfg.service(
        crate::calculation::adapter::incoming::web::routes::get_single_calculation_handler,
    );
    cfg.service(crate::calculation::adapter::incoming::web::routes::patch_calculation_handler);
    cfg.service(crate::calculation::adapter::incoming::web::routes::delete_calculation_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
