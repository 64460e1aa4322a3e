use crate::configuration::{DatabaseSettings, Settings, StoreBackend};
use crate::routes;
use crate::store::{InMemoryStore, PgStore, RecordStore};
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = match configuration.database.backend {
            StoreBackend::Postgres => {
                let store = PgStore::new(get_connection_pool(&configuration.database)?);
                if configuration.database.run_migrations {
                    store.migrate().await?;
                    tracing::info!("Database migrations applied");
                }
                run(listener, store)?
            }
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory store, records will not survive a restart");
                run(listener, InMemoryStore::new())?
            }
        };

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    Ok(PgPoolOptions::new().connect_lazy_with(configuration.connect_options()?))
}

fn run<S>(listener: TcpListener, store: S) -> Result<Server, anyhow::Error>
where
    S: RecordStore + Send + Sync + 'static,
{
    let store = Data::new(store);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(routes::configure::<S>)
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
