use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;

use crate::error::LandscapeError;
use crate::types::LandscapeConfig;

#[derive(Asset, TypePath, Debug, Clone)]
pub struct LandscapeConfigAsset(pub LandscapeConfig);

#[derive(Default)]
pub struct LandscapeConfigAssetLoader;

impl AssetLoader for LandscapeConfigAssetLoader {
    type Asset = LandscapeConfigAsset;
    type Settings = ();
    type Error = LandscapeError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        let text = std::str::from_utf8(&bytes)?;
        let config = LandscapeConfig::from_ron_str(text)?;

        Ok(LandscapeConfigAsset(config))
    }

    fn extensions(&self) -> &[&str] {
        &["ron"]
    }
}
