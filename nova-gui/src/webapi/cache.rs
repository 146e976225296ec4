use std::{num::NonZeroUsize, sync::Arc};

use druid::ImageBuf;
use lru::LruCache;
use parking_lot::Mutex;

/// Bounded in-memory cache for decoded thumbnails. `ImageBuf` is
/// reference-counted, so hits are cheap clones.
pub struct WebApiCache {
    images: Mutex<LruCache<Arc<str>, ImageBuf>>,
}

impl WebApiCache {
    const MAX_IMAGES: usize = 256;

    pub fn new() -> Self {
        Self {
            images: Mutex::new(LruCache::new(
                NonZeroUsize::new(Self::MAX_IMAGES).expect("Nonzero cache size"),
            )),
        }
    }

    pub fn get_image(&self, uri: &Arc<str>) -> Option<ImageBuf> {
        self.images.lock().get(uri).cloned()
    }

    pub fn set_image(&self, uri: Arc<str>, image: ImageBuf) {
        self.images.lock().put(uri, image);
    }
}
