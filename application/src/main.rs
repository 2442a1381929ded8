use std::{
    future::IntoFuture as _,
    io,
    sync::{Arc, OnceLock},
    time,
};

use application::{api, config, graphql, subscriptions, Args, Config};
use axum::{
    extract::MatchedPath,
    routing::{get, on, MethodFilter},
    Extension, Router,
};
use axum_client_ip::InsecureClientIp;
use common::{
    operations::{By, Insert, Select, Update},
    DateTime,
};
use futures::{future, TryFutureExt as _};
use service::{
    domain::{
        admin, house,
        site_settings::{Localized, SocialLinks},
        user, Admin, SiteSettings,
    },
    infra::{Database as _, Json},
    Service,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        server,
        service,
        storage,
        bootstrap,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let json = Json::new(storage.file).await.map_err(|e| {
        log::error!("failed to initialize `Json` store: {e}");
    })?;

    seed(&json, bootstrap).await?;

    let (service, background) = Service::new(service.into(), json);

    let schema = api::Schema::new(api::Query, api::Mutation, api::Subscription);

    let mut cors = CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::OPTIONS,
            http::Method::POST,
        ])
        .allow_headers([
            http::header::AUTHORIZATION,
            http::header::CONTENT_TYPE,
        ]);
    for origin in server.cors.origins {
        cors = cors.allow_origin(
            origin.parse::<http::header::HeaderValue>().map_err(|e| {
                log::error!("`{origin}` is not current CORS origin: {e}");
            })?,
        );
    }

    let app = Router::new()
        .route(
            "/graphql",
            on(MethodFilter::GET.or(MethodFilter::POST), graphql),
        )
        .route("/subscriptions", get(subscriptions))
        .layer(Extension(Arc::new(schema)))
        .layer(Extension(service))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|r: &http::Request<_>| {
                    tracing::info_span!(
                        "HTTP request",
                        http.client_ip = InsecureClientIp::from(
                            r.headers(),
                            r.extensions()
                        )
                            .map(|ip| ip.0.to_string())
                            .ok(),
                        http.flavor = ?r.version(),
                        http.host = r.uri().host(),
                        http.method = r.method().as_str(),
                        http.route = r
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str),
                        http.scheme = r
                            .uri()
                            .scheme()
                            .map(http::uri::Scheme::as_str),
                        http.target = r
                            .uri()
                            .path_and_query()
                            .map(http::uri::PathAndQuery::as_str),
                        http.user_agent = r
                            .headers()
                            .get("User-Agent")
                            .and_then(|h| h.to_str().ok()),
                        http.status_code = tracing::field::Empty,
                    )
                })
                .on_response(
                    |r: &http::Response<_>,
                     dur: time::Duration,
                     span: &tracing::Span| {
                        span.record(
                            "http.status_code",
                            tracing::field::display(r.status().as_u16()),
                        );

                        if r.status().is_server_error()
                            || r.status().is_client_error()
                        {
                            tracing::error!(
                                duration = format!("{}ms", dur.as_millis()),
                            );
                        } else {
                            tracing::info!(
                                duration = format!("{}ms", dur.as_millis()),
                            );
                        }
                    },
                ),
        );

    let listener = TcpListener::bind((server.host.clone(), server.port))
        .await
        .map_err(|e| {
            log::error!(
                "failed to listen on `{}:{}`: {e}",
                server.host,
                server.port,
            );
        })?;

    log::info!("listening on `{}:{}`", server.host, server.port);

    let serve = axum::serve(listener, app);

    future::try_join(
        serve
            .into_future()
            .map_err(|e| log::error!("webserver failed: {e}")),
        background.into_future().map_err(|e| {
            log::error!("background task failed: {e}");
        }),
    )
    .await
    .map(drop)
}

/// Seeds the store with the default `Admin` account and `SiteSettings`, if
/// they are missing.
async fn seed(json: &Json, bootstrap: config::Bootstrap) -> Result<(), ()> {
    let username =
        admin::Username::new(&bootstrap.admin.username).ok_or_else(|| {
            log::error!(
                "`{}` is not a valid bootstrap `Admin` username",
                bootstrap.admin.username,
            );
        })?;

    let existing = json
        .execute(Select(By::<Option<Admin>, _>::new(&username)))
        .await
        .map_err(|e| log::error!("failed to look up the bootstrap `Admin`: {e}"))?;
    if existing.is_none() {
        let password =
            user::Password::new(bootstrap.admin.password).ok_or_else(|| {
                log::error!("bootstrap `Admin` password is not valid");
            })?;
        let password_hash = user::PasswordHash::new(&password).map_err(|e| {
            log::error!("failed to hash the bootstrap `Admin` password: {e}");
        })?;
        let email =
            user::Email::new(&bootstrap.admin.email).ok_or_else(|| {
                log::error!(
                    "`{}` is not a valid bootstrap `Admin` email",
                    bootstrap.admin.email,
                );
            })?;

        json.execute(Insert(Admin {
            id: admin::Id::new(),
            username,
            email,
            password_hash,
            role: admin::Role::SuperAdmin,
            created_at: DateTime::now().coerce(),
        }))
        .await
        .map_err(|e| {
            log::error!("failed to insert the bootstrap `Admin`: {e}");
        })?;

        log::info!(
            "created the bootstrap `Admin(username: {})`",
            bootstrap.admin.username,
        );
    }

    let settings = json
        .execute(Select(By::<Option<SiteSettings>, _>::new(())))
        .await
        .map_err(|e| log::error!("failed to look up `SiteSettings`: {e}"))?;
    if settings.is_none() {
        let defaults = default_site_settings().ok_or_else(|| {
            log::error!("default `SiteSettings` are malformed");
        })?;

        json.execute(Update(defaults)).await.map_err(|e| {
            log::error!("failed to seed the default `SiteSettings`: {e}");
        })?;

        log::info!("seeded the default `SiteSettings`");
    }

    Ok(())
}

/// Default [`SiteSettings`] seeded into an empty store.
fn default_site_settings() -> Option<SiteSettings> {
    let phone = user::Phone::new("+964 750 000 0000")?;

    Some(SiteSettings {
        site_name: Localized {
            en: "Safr Kurdistan".to_owned(),
            ar: "سافر كوردستان".to_owned(),
            ku: "گەشتی کوردستان".to_owned(),
        },
        header_description: Localized {
            en: "Perfect for Iraqi families visiting Kurdistan".to_owned(),
            ar: "مثالي للعائلات العراقية التي تزور كردستان".to_owned(),
            ku: "تەواو بۆ خێزانە عێراقییەکان کە سەردانی کوردستان دەکەن"
                .to_owned(),
        },
        hero_title: Localized {
            en: "Find Your Perfect Summer House in Kurdistan".to_owned(),
            ar: "اعثر على بيت الصيف المثالي في كردستان".to_owned(),
            ku: "خانووی هاوینی تەواوی خۆت لە کوردستان بدۆزەرەوە".to_owned(),
        },
        hero_subtitle: Localized {
            en: "Escape the Iraqi summer heat in the cool mountains of \
                 Kurdistan"
                .to_owned(),
            ar: "اهرب من حر الصيف العراقي في جبال كردستان الباردة".to_owned(),
            ku: "لە گەرمی هاوینی عێراق دەرباز ببە لە چیا ساردەکانی کوردستان"
                .to_owned(),
        },
        footer_description: Localized {
            en: "Your gateway to cool, comfortable summer vacations in the \
                 beautiful mountains of Kurdistan."
                .to_owned(),
            ar: "بوابتك إلى عطلات صيفية باردة ومريحة في جبال كردستان الجميلة."
                .to_owned(),
            ku: "دەرگاکەت بۆ پشووی هاوینی سارد و ئاسوودە لە چیا جوانەکانی \
                 کوردستان."
                .to_owned(),
        },
        logo_url: None,
        video_url: house::Url::new(
            "https://videos.pexels.com/video-files/4009409/\
             4009409-uhd_2560_1440_25fps.mp4",
        )
        .map(Some)?,
        contact_phone: phone.clone(),
        whatsapp_number: phone,
        contact_email: user::Email::new("info@kurdistanhouses.com")?,
        social_links: SocialLinks::default(),
        updated_at: DateTime::now().coerce(),
        updated_by: None,
    })
}
