use std::{io::Read, sync::Arc};

use druid::{
    im::Vector,
    image::{self, ImageFormat},
    ImageBuf,
};
use log::info;
use once_cell::sync::OnceCell;
use ureq::Agent;

use nova_core::{
    catalog::{CatalogClient, Game},
    embed::EmbedRequest,
    util,
};

use super::cache::WebApiCache;
use crate::error::Error;

pub struct WebApi {
    catalog: CatalogClient,
    agent: Agent,
    cache: WebApiCache,
}

impl WebApi {
    pub fn new(catalog_url: &str, proxy_url: Option<&str>) -> Result<Self, Error> {
        Ok(Self {
            catalog: CatalogClient::new(catalog_url, proxy_url)?,
            agent: util::default_agent_builder(proxy_url).build().into(),
            cache: WebApiCache::new(),
        })
    }

    /// One fetch of the catalog resource. Returns the full ordered list;
    /// failure handling is up to the shell.
    pub fn get_catalog(&self) -> Result<Vector<Arc<Game>>, Error> {
        let games = self.catalog.fetch()?;
        info!("loaded {} games", games.len());
        Ok(games.into_iter().map(Arc::new).collect())
    }

    pub fn get_cached_image(&self, uri: &Arc<str>) -> Option<ImageBuf> {
        self.cache.get_image(uri)
    }

    pub fn get_image(&self, uri: Arc<str>) -> Result<ImageBuf, Error> {
        if let Some(cached_image) = self.cache.get_image(&uri) {
            return Ok(cached_image);
        }

        let response = self
            .agent
            .get(uri.as_ref())
            .call()
            .map_err(|err| Error::FetchError(err.to_string()))?;
        let mut body = Vec::new();
        response
            .into_body()
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|err| Error::FetchError(err.to_string()))?;

        let format = match infer::get(body.as_slice()) {
            Some(kind) if kind.mime_type() == "image/jpeg" => Some(ImageFormat::Jpeg),
            Some(kind) if kind.mime_type() == "image/png" => Some(ImageFormat::Png),
            _ => None,
        };

        let decoded = if let Some(format) = format {
            image::load_from_memory_with_format(&body, format)
        } else {
            image::load_from_memory(&body)
        }
        .map_err(|err| Error::FetchError(err.to_string()))?;

        let image_buf = ImageBuf::from_dynamic_image(decoded);
        self.cache.set_image(uri, image_buf.clone());
        Ok(image_buf)
    }

    /// Issues the embed load for a game page. The page body is opaque
    /// and discarded; a completed response is the load-complete signal.
    pub fn load_embed(&self, request: &EmbedRequest) -> Result<(), Error> {
        log::debug!(
            "embedding {} with allow-list: {}",
            request.url,
            request.allow_attribute()
        );
        self.agent
            .get(request.url.as_ref())
            .call()
            .map_err(|err| Error::FetchError(err.to_string()))?;
        Ok(())
    }
}

static GLOBAL_WEBAPI: OnceCell<Arc<WebApi>> = OnceCell::new();

/// The global, immutable instance of `WebApi`, usable from the whole GUI.
impl WebApi {
    pub fn install_as_global(self) {
        GLOBAL_WEBAPI
            .set(Arc::new(self))
            .map_err(|_| "Cannot install more than once")
            .unwrap()
    }

    pub fn global() -> Arc<Self> {
        GLOBAL_WEBAPI.get().unwrap().clone()
    }
}
