// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, sync::Arc, time::Duration};

use crate::db::{PgStore, Store};

// O estado compartilhado que será acessível em toda a aplicação.
// Guarda apenas o handle de acesso a dados, construído no arranque e
// injetado aqui (nada de singleton global).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Arc::new(PgStore::new(pool)),
        }
    }
}

/// Abre a pool de conexões a partir da DATABASE_URL (.env ou ambiente).
pub async fn connect_pool() -> anyhow::Result<PgPool> {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

    // Conecta ao banco de dados, usando '?' para propagar erros
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&database_url)
        .await?;

    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

    Ok(db_pool)
}
