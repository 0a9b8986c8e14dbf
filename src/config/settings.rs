//! Operator-facing settings boundary.
//!
//! Command layers hand string key/value pairs to [`apply_setting`], which
//! parses and validates them here. Malformed or out-of-range input is
//! rejected with an error; the core never sees an invalid value.

use super::PurgeConfig;
use crate::core::{PurgeError, Result};
use std::fmt;

/// One runtime-adjustable setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    EnablePurge,
    PurgeInterval,
    Debug,
    ProximityRadius,
    KeepAliveRadius,
    OriginRadius,
    EnableSaveHandling,
    SaveHighWaterMark,
}

impl Setting {
    pub const ALL: [Setting; 8] = [
        Setting::EnablePurge,
        Setting::PurgeInterval,
        Setting::Debug,
        Setting::ProximityRadius,
        Setting::KeepAliveRadius,
        Setting::OriginRadius,
        Setting::EnableSaveHandling,
        Setting::SaveHighWaterMark,
    ];

    /// The key accepted by [`apply_setting`].
    pub fn name(&self) -> &'static str {
        match self {
            Setting::EnablePurge => "enablepurge",
            Setting::PurgeInterval => "purgeinterval",
            Setting::Debug => "debug",
            Setting::ProximityRadius => "pradius",
            Setting::KeepAliveRadius => "kradius",
            Setting::OriginRadius => "oradius",
            Setting::EnableSaveHandling => "enablesave",
            Setting::SaveHighWaterMark => "highwater",
        }
    }

    /// Placeholder shown in usage listings.
    pub fn usage_hint(&self) -> &'static str {
        match self {
            Setting::EnablePurge | Setting::Debug | Setting::EnableSaveHandling => "[true|false]",
            Setting::PurgeInterval => "[ticks]",
            Setting::ProximityRadius | Setting::KeepAliveRadius | Setting::OriginRadius => {
                "[cells]"
            }
            Setting::SaveHighWaterMark => "[cells]",
        }
    }

    /// Look a setting up by key.
    pub fn from_name(name: &str) -> Option<Setting> {
        Setting::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of applying one setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingUpdate {
    Changed {
        setting: Setting,
        old: String,
        new: String,
    },
    Unchanged {
        setting: Setting,
        value: String,
    },
}

impl fmt::Display for SettingUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingUpdate::Changed { setting, old, new } => {
                write!(f, "Updated {setting} from {old} to {new}")
            }
            SettingUpdate::Unchanged { setting, value } => {
                write!(f, "No change; {setting} is already {value}")
            }
        }
    }
}

/// Parse and apply one operator-supplied setting to the configuration.
pub fn apply_setting(config: &mut PurgeConfig, name: &str, value: &str) -> Result<SettingUpdate> {
    let setting =
        Setting::from_name(name).ok_or_else(|| PurgeError::UnknownSetting(name.to_string()))?;

    match setting {
        Setting::EnablePurge => {
            let new = parse_bool(setting, value)?;
            Ok(update_field(setting, &mut config.auto_purge_enabled, new))
        }
        Setting::PurgeInterval => {
            let new = parse_int::<u32>(setting, value)?;
            if new < 1 {
                return Err(invalid(setting, value, "must be >= 1"));
            }
            Ok(update_field(setting, &mut config.purge_interval_ticks, new))
        }
        Setting::Debug => {
            let new = parse_bool(setting, value)?;
            Ok(update_field(setting, &mut config.debug, new))
        }
        Setting::ProximityRadius => {
            let new = parse_int::<i32>(setting, value)?;
            Ok(update_field(setting, &mut config.proximity_ignore_radius, new))
        }
        Setting::KeepAliveRadius => {
            let new = parse_int::<i32>(setting, value)?;
            Ok(update_field(setting, &mut config.keepalive_ignore_radius, new))
        }
        Setting::OriginRadius => {
            let new = parse_int::<i32>(setting, value)?;
            Ok(update_field(setting, &mut config.origin_ignore_radius, new))
        }
        Setting::EnableSaveHandling => {
            let new = parse_bool(setting, value)?;
            Ok(update_field(setting, &mut config.auto_save_handling, new))
        }
        Setting::SaveHighWaterMark => {
            let new = parse_int::<usize>(setting, value)?;
            if new < 1 {
                return Err(invalid(setting, value, "must be >= 1"));
            }
            Ok(update_field(setting, &mut config.save_high_water_mark, new))
        }
    }
}

fn update_field<T: PartialEq + fmt::Display + Copy>(
    setting: Setting,
    field: &mut T,
    new: T,
) -> SettingUpdate {
    if *field == new {
        SettingUpdate::Unchanged {
            setting,
            value: new.to_string(),
        }
    } else {
        let old = field.to_string();
        *field = new;
        SettingUpdate::Changed {
            setting,
            old,
            new: new.to_string(),
        }
    }
}

fn parse_bool(setting: Setting, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(setting, value, "expected true or false")),
    }
}

fn parse_int<T: std::str::FromStr>(setting: Setting, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| invalid(setting, value, "expected an integer"))
}

fn invalid(setting: Setting, value: &str, reason: &str) -> PurgeError {
    PurgeError::InvalidValue {
        name: setting.name().to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_changes_value() {
        let mut config = PurgeConfig::default();
        let update = apply_setting(&mut config, "purgeinterval", "40").unwrap();
        assert_eq!(config.purge_interval_ticks, 40);
        assert!(matches!(update, SettingUpdate::Changed { .. }));
        assert_eq!(update.to_string(), "Updated purgeinterval from 600 to 40");
    }

    #[test]
    fn test_apply_reports_no_change() {
        let mut config = PurgeConfig::default();
        let update = apply_setting(&mut config, "debug", "false").unwrap();
        assert_eq!(
            update,
            SettingUpdate::Unchanged {
                setting: Setting::Debug,
                value: "false".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_setting_rejected() {
        let mut config = PurgeConfig::default();
        let err = apply_setting(&mut config, "bogus", "1").unwrap_err();
        assert!(matches!(err, PurgeError::UnknownSetting(_)));
    }

    #[test]
    fn test_malformed_input_rejected_before_core() {
        let mut config = PurgeConfig::default();

        assert!(apply_setting(&mut config, "purgeinterval", "soon").is_err());
        assert!(apply_setting(&mut config, "purgeinterval", "0").is_err());
        assert!(apply_setting(&mut config, "enablepurge", "yes").is_err());
        assert!(apply_setting(&mut config, "highwater", "0").is_err());

        // Nothing leaked through.
        assert_eq!(config.purge_interval_ticks, 600);
        assert!(config.auto_purge_enabled);
        assert_eq!(config.save_high_water_mark, 100);
    }

    #[test]
    fn test_negative_radius_allowed_as_unbounded() {
        let mut config = PurgeConfig::default();
        apply_setting(&mut config, "kradius", "-1").unwrap();
        assert_eq!(config.keepalive_ignore_radius, -1);
    }

    #[test]
    fn test_all_names_resolve() {
        for setting in Setting::ALL {
            assert_eq!(Setting::from_name(setting.name()), Some(setting));
            assert!(!setting.usage_hint().is_empty());
        }
    }
}
