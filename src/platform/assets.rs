//! Image preloading

use std::collections::HashMap;

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::error::{GameError, Result};

/// Decoded images keyed by their path
pub struct AssetStore {
    images: HashMap<String, HtmlImageElement>,
}

impl AssetStore {
    /// Load and decode every path; fails on the first image that can't be
    /// fetched or decoded
    pub async fn load(paths: &[&str]) -> Result<Self> {
        let mut images = HashMap::with_capacity(paths.len());

        for &path in paths {
            let img = HtmlImageElement::new().map_err(|e| GameError::AssetLoad {
                path: path.to_string(),
                reason: format!("{:?}", e),
            })?;
            img.set_src(path);

            JsFuture::from(img.decode())
                .await
                .map_err(|e| GameError::AssetLoad {
                    path: path.to_string(),
                    reason: format!("{:?}", e),
                })?;

            log::debug!("Loaded {} ({}x{})", path, img.natural_width(), img.natural_height());
            images.insert(path.to_string(), img);
        }

        log::info!("{} assets ready", images.len());
        Ok(Self { images })
    }

    pub fn get(&self, path: &str) -> Option<&HtmlImageElement> {
        self.images.get(path)
    }
}
