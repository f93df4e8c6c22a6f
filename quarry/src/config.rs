use log::LevelFilter;
use palette::LinSrgba;
use quartz::{Control, Scene, StateColors};
use serde::{Deserialize, Serialize};

use crate::{
    asset::{self, AssetError},
    input::{MouseButton, PointerTracker},
};

/// RGBA color stored as four linear components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorConfig([f32; 4]);

impl From<LinSrgba> for ColorConfig {
    fn from(color: LinSrgba) -> Self {
        ColorConfig([color.red, color.green, color.blue, color.alpha])
    }
}
impl From<ColorConfig> for LinSrgba {
    fn from(color: ColorConfig) -> Self {
        let [red, green, blue, alpha] = color.0;
        LinSrgba::new(red, green, blue, alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorsConfig {
    pub normal: ColorConfig,
    pub highlighted: ColorConfig,
    pub selected: ColorConfig,
    pub disabled: ColorConfig,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        let colors = StateColors::default();
        ColorsConfig {
            normal: colors.normal.into(),
            highlighted: colors.highlighted.into(),
            selected: colors.selected.into(),
            disabled: colors.disabled.into(),
        }
    }
}

impl From<ColorsConfig> for StateColors {
    fn from(colors: ColorsConfig) -> Self {
        StateColors {
            normal: colors.normal.into(),
            highlighted: colors.highlighted.into(),
            selected: colors.selected.into(),
            disabled: colors.disabled.into(),
        }
    }
}

/// Settings read from `config/controls.yaml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub primary_button: MouseButton,
    pub drag_threshold: f32,
    pub ui_scale: f32,
    pub log_level: LevelFilter,
    pub colors: ColorsConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            primary_button: MouseButton::Left,
            drag_threshold: 0.,
            ui_scale: 1.,
            log_level: LevelFilter::Info,
            colors: ColorsConfig::default(),
        }
    }
}

impl EngineConfig {
    const PREFIX: &'static str = "config";
    const FILENAME: &'static str = "controls.yaml";

    pub fn create_default_config_if_missing() -> asset::Result<()> {
        let path = asset::get_path(Self::PREFIX, Self::FILENAME);
        if path.exists() {
            return Ok(());
        }
        if let Some(dir) = path.parent() {
            asset::create_dir(dir)?;
        }
        log::info!("Creating default file {}", path.display());
        EngineConfig::default().save_config()
    }
    pub fn load_config() -> Result<Self, AssetError> {
        asset::load_yaml_file_or_default(Self::PREFIX, Self::FILENAME)
    }
    pub fn save_config(&self) -> Result<(), AssetError> {
        asset::save_yaml_file(Self::PREFIX, Self::FILENAME, self)
    }

    pub fn state_colors(&self) -> StateColors {
        self.colors.into()
    }
    pub fn pointer_tracker(&self) -> PointerTracker {
        PointerTracker::new(self.primary_button)
    }
    pub fn configure_control(&self, control: &mut Control) {
        control.set_drag_threshold(self.drag_threshold);
    }
    pub fn configure_scene(&self, scene: &mut Scene) {
        scene.set_ui_scale(self.ui_scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: EngineConfig =
            serde_yml::from_str("primary_button: Right\ndrag_threshold: 4.0\n").unwrap();
        assert_eq!(config.primary_button, MouseButton::Right);
        assert_eq!(config.drag_threshold, 4.);
        assert_eq!(config.ui_scale, 1.);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.state_colors(), StateColors::default());
    }

    #[test]
    fn colors_and_level_parse() {
        let yaml = "log_level: Debug\ncolors:\n  normal: [1.0, 0.0, 0.0, 1.0]\n  highlighted: [0.0, 1.0, 0.0, 1.0]\n  selected: [0.0, 0.0, 1.0, 1.0]\n  disabled: [0.5, 0.5, 0.5, 0.5]\n";
        let config: EngineConfig = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
        let colors = config.state_colors();
        assert_eq!(colors.normal, LinSrgba::new(1., 0., 0., 1.));
        assert_eq!(colors.disabled, LinSrgba::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn configure_applies_threshold_and_scale() {
        let config = EngineConfig {
            drag_threshold: 3.,
            ui_scale: 2.,
            ..Default::default()
        };
        let mut control = Control::new();
        config.configure_control(&mut control);
        assert_eq!(control.drag_threshold(), 3.);

        let mut scene = Scene::new().unwrap();
        config.configure_scene(&mut scene);
        assert_eq!(scene.ui_scale(), 2.);
    }
}
