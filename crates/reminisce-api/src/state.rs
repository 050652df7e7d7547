//! Application state wiring all services together.
//!
//! AppState holds the memory writer and reader used by both CLI commands and
//! HTTP handlers. Services are built once at start-up over type-erased
//! collaborators, so tests can swap in doubles through [`AppState::new`].

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use reminisce_core::image::box_generator::BoxImageGenerator;
use reminisce_core::llm::box_provider::BoxChatModel;
use reminisce_core::memory::box_embedder::BoxEmbedder;
use reminisce_core::memory::box_vector::BoxVectorStore;
use reminisce_core::memory::chunker::Chunker;
use reminisce_core::memory::reader::MemoryReader;
use reminisce_core::memory::writer::MemoryWriter;
use reminisce_infra::credentials::Credentials;
use reminisce_infra::groclake::client::GroclakeClient;
use reminisce_infra::groclake::{ModelLakeClient, VectorLakeClient};
use reminisce_infra::image::FluxImageClient;
use reminisce_types::config::ServiceConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub writer: Arc<MemoryWriter>,
    pub reader: Arc<MemoryReader>,
}

impl AppState {
    pub fn new(writer: MemoryWriter, reader: MemoryReader) -> Self {
        Self {
            writer: Arc::new(writer),
            reader: Arc::new(reader),
        }
    }

    /// Resolve credentials from the environment and wire the upstream clients.
    pub fn init(config: &ServiceConfig) -> anyhow::Result<Self> {
        config.retrieval.validate()?;
        let credentials = Credentials::from_env()?;
        let owner_id = credentials.groclake_account_id.clone();

        let vector_lake = VectorLakeClient::new(GroclakeClient::new(
            &config.vector_lake,
            copy_secret(&credentials.groclake_api_key),
            owner_id.clone(),
        )?);
        let model_lake = ModelLakeClient::new(GroclakeClient::new(
            &config.model_lake,
            copy_secret(&credentials.groclake_api_key),
            owner_id.clone(),
        )?);

        // FLUX_API_URL wins over the config file.
        let image_endpoint = credentials
            .image_endpoint
            .clone()
            .or_else(|| config.image.endpoint.clone());
        let images = FluxImageClient::new(
            &config.image,
            image_endpoint,
            credentials.image_token.as_ref().map(copy_secret),
        )?;
        if !images.is_configured() {
            warn!("No image endpoint configured, recollections will not include images");
        }

        let embedder = Arc::new(BoxEmbedder::new(vector_lake.clone()));
        let store = Arc::new(BoxVectorStore::new(vector_lake));

        let writer = MemoryWriter::new(
            Chunker::new(config.chunking)?,
            embedder.clone(),
            store.clone(),
            owner_id.clone(),
        );
        let reader = MemoryReader::new(
            embedder,
            store,
            Arc::new(BoxChatModel::new(model_lake)),
            Arc::new(BoxImageGenerator::new(images)),
            owner_id,
        )
        .with_top_k(config.retrieval.top_k)
        .with_image_parameters(config.image.parameters());

        info!(
            vector_lake = %config.vector_lake.base_url,
            model_lake = %config.model_lake.base_url,
            top_k = config.retrieval.top_k,
            "Services initialized"
        );

        Ok(Self::new(writer, reader))
    }
}

fn copy_secret(secret: &SecretString) -> SecretString {
    SecretString::from(secret.expose_secret().to_owned())
}
