use crate::error::BackdropError;
use fnv::FnvHashSet;
use serde::Deserialize;

/// Requested quality level. `Auto` picks the default preset, or the
/// constrained one on low-end devices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    #[default]
    Auto,
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Options record supplied by the host page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct BackdropOptions {
    /// Section requesting the backdrop.
    pub section: String,
    /// Sections allowed to show it; any other section mounts as disabled.
    pub enabled_sections: FnvHashSet<String>,
    pub performance: Performance,
    /// Overlay a measured frames-per-second counter.
    pub debug: bool,
    pub theme: Theme,
    /// Fixed seed for a reproducible particle batch.
    pub seed: Option<u64>,
}

impl Default for BackdropOptions {
    fn default() -> Self {
        let mut enabled_sections = FnvHashSet::default();
        enabled_sections.insert("home".to_string());
        Self {
            section: "home".to_string(),
            enabled_sections,
            performance: Performance::Auto,
            debug: false,
            theme: Theme::Light,
            seed: None,
        }
    }
}

impl BackdropOptions {
    pub fn from_json(json: &str) -> Result<Self, BackdropError> {
        let options: Self = serde_json::from_str(json)?;
        Ok(options)
    }

    pub fn section_enabled(&self) -> bool {
        self.enabled_sections.contains(&self.section)
    }
}

/// Frame rate, particle count and link distance for one quality level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub fps: u32,
    pub particles: usize,
    /// Maximum CSS px distance for proximity links; 0 disables links.
    pub link_distance: f32,
}

impl Preset {
    pub const CONSTRAINED: Preset = Preset {
        fps: 12,
        particles: 30,
        link_distance: 0.0,
    };
    pub const LOW: Preset = Preset {
        fps: 12,
        particles: 30,
        link_distance: 0.0,
    };
    pub const AUTO: Preset = Preset {
        fps: 24,
        particles: 60,
        link_distance: 90.0,
    };
    pub const MEDIUM: Preset = Preset {
        fps: 36,
        particles: 90,
        link_distance: 110.0,
    };
    pub const HIGH: Preset = Preset {
        fps: 60,
        particles: 140,
        link_distance: 120.0,
    };

    /// Constrained devices always get the reduced preset, whatever was asked.
    pub fn resolve(performance: Performance, constrained: bool) -> Preset {
        if constrained {
            return Preset::CONSTRAINED;
        }
        match performance {
            Performance::Auto => Preset::AUTO,
            Performance::Low => Preset::LOW,
            Performance::Medium => Preset::MEDIUM,
            Performance::High => Preset::HIGH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_options() {
        let json = r#"{
            "section": "skills",
            "enabledSections": ["home", "skills"],
            "performance": "high",
            "debug": true,
            "theme": "dark",
            "seed": 7
        }"#;
        let opts = BackdropOptions::from_json(json).unwrap();
        assert_eq!(opts.section, "skills");
        assert!(opts.section_enabled());
        assert_eq!(opts.performance, Performance::High);
        assert!(opts.debug);
        assert_eq!(opts.theme, Theme::Dark);
        assert_eq!(opts.seed, Some(7));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let opts = BackdropOptions::from_json("{}").unwrap();
        assert_eq!(opts, BackdropOptions::default());
        assert!(opts.section_enabled());
    }

    #[test]
    fn unknown_fields_and_values_are_rejected() {
        assert!(BackdropOptions::from_json(r#"{"particles": 10}"#).is_err());
        assert!(BackdropOptions::from_json(r#"{"performance": "ultra"}"#).is_err());
    }

    #[test]
    fn section_outside_enabled_set_is_not_enabled() {
        let opts = BackdropOptions {
            section: "contact".into(),
            ..BackdropOptions::default()
        };
        assert!(!opts.section_enabled());
    }

    #[test]
    fn constrained_devices_override_requested_preset() {
        assert_eq!(Preset::resolve(Performance::High, true), Preset::CONSTRAINED);
        assert_eq!(Preset::resolve(Performance::High, false), Preset::HIGH);
        assert_eq!(Preset::resolve(Performance::Auto, false), Preset::AUTO);
        assert_eq!(Preset::resolve(Performance::Low, false), Preset::LOW);
    }
}
