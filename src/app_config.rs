use gloo::console;
use stagefit_core::StageConfig;

fn design_width_override() -> Option<&'static str> {
    option_env!("STAGEFIT_DESIGN_WIDTH").or(option_env!("TRUNK_PUBLIC_STAGEFIT_DESIGN_WIDTH"))
}

fn design_height_override() -> Option<&'static str> {
    option_env!("STAGEFIT_DESIGN_HEIGHT").or(option_env!("TRUNK_PUBLIC_STAGEFIT_DESIGN_HEIGHT"))
}

pub(crate) fn load_stage_config() -> StageConfig {
    let config = StageConfig::default()
        .with_design_overrides(design_width_override(), design_height_override());
    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            console::warn!("invalid stage config, using defaults", err.to_string());
            StageConfig::default()
        }
    }
}
