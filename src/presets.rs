use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, AsyncReadExt, LoadContext};
use bevy::prelude::*;
use bevy::utils::BoxedFuture;
use bevy_revolute::prelude::*;
use thiserror::Error;

use crate::hand::hand_rig::HandRig;

pub struct HandPresetPlugin;

impl Plugin for HandPresetPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<HandPresetAsset>()
            .init_asset_loader::<HandPresetAssetLoader>()
            .add_systems(Startup, load_presets)
            .add_systems(
                Update,
                install_presets.run_if(not(resource_exists::<HandPresets>)),
            );
    }
}

/// Asset wrapper around the on-disk preset document.
#[derive(Asset, TypePath, Debug)]
pub struct HandPresetAsset(HandPresetSet);

impl HandPresetAsset {
    pub fn get(&self) -> &HandPresetSet {
        &self.0
    }
}

#[derive(Resource, Debug, Deref, DerefMut)]
pub struct PresetHandle(pub Handle<HandPresetAsset>);

/// Read-only preset set, installed once after a successful load and never
/// mutated afterwards.
#[derive(Resource, Debug, Clone)]
pub struct HandPresets(pub HandPresetSet);

fn load_presets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(PresetHandle(asset_server.load("config/hand.presets.json")));
}

/// Copy the loaded asset into the [`HandPresets`] resource, reporting
/// joint-count mismatches once.
fn install_presets(
    mut commands: Commands,
    preset_handle: Res<PresetHandle>,
    preset_assets: Res<Assets<HandPresetAsset>>,
    hand_rig: Res<HandRig>,
) {
    let Some(asset) = preset_assets.get(&**preset_handle) else {
        return;
    };
    let presets = asset.get();

    let joint_count = hand_rig.joints.len();
    for preset in presets.configurations.iter() {
        if preset.angles.len() != joint_count {
            warn!(
                "Preset '{}' carries {} angles for {} joints. The shorter of the two wins each tick.",
                preset.name,
                preset.angles.len(),
                joint_count
            );
        }
    }

    info!("Loaded {} hand presets.", presets.len());
    commands.insert_resource(HandPresets(presets.clone()));
}

fn parse_presets(bytes: &[u8]) -> Result<HandPresetSet, PresetLoaderError> {
    let presets = serde_json::from_slice::<HandPresetSet>(bytes)?;
    if presets.is_empty() {
        return Err(PresetLoaderError::Empty);
    }
    Ok(presets)
}

#[derive(Default)]
struct HandPresetAssetLoader;

impl AssetLoader for HandPresetAssetLoader {
    type Asset = HandPresetAsset;
    type Settings = ();
    type Error = PresetLoaderError;

    fn load<'a>(
        &'a self,
        reader: &'a mut Reader,
        _settings: &'a (),
        _load_context: &'a mut LoadContext,
    ) -> BoxedFuture<'a, Result<Self::Asset, Self::Error>> {
        Box::pin(async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;

            Ok(HandPresetAsset(parse_presets(&bytes)?))
        })
    }

    fn extensions(&self) -> &[&str] {
        &["presets.json"]
    }
}

/// Possible errors produced by [`HandPresetAssetLoader`].
///
/// A failed load installs nothing; the rig then refuses to switch into preset
/// mode.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PresetLoaderError {
    #[error("Could not load preset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not deserialize using serde: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Preset file holds no configurations")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_populated_document() {
        let presets = parse_presets(
            br#"{ "configurations": [ { "name": "Default", "angles": [1.0, 2.0] } ] }"#,
        )
        .unwrap();
        assert_eq!(presets.len(), 1);
    }

    #[test]
    fn empty_document_is_rejected() {
        let err = parse_presets(br#"{ "configurations": [] }"#).unwrap_err();
        assert!(matches!(err, PresetLoaderError::Empty));
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = parse_presets(b"{ not json").unwrap_err();
        assert!(matches!(err, PresetLoaderError::Serde(_)));
    }
}
