use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString, Display, VariantArray, Default, Clone, Debug, PartialEq, Deserialize, AsRefStr,
)]
pub enum ShiftType {
    #[default]
    Normal,
    Half,
}

#[derive(
    EnumString, Display, VariantArray, Default, Clone, Debug, PartialEq, Deserialize, AsRefStr,
)]
pub enum StaffStatus {
    #[default]
    Permanent,
    Casual,
}

/// The shift type a (staff, date) pair resolves to once overrides and the
/// rotation pattern have been applied.
#[derive(
    EnumString, Display, VariantArray, Default, Clone, Debug, PartialEq, Deserialize, AsRefStr,
)]
pub enum EffectiveShift {
    Normal,
    Half,
    #[default]
    Off,
}

impl EffectiveShift {
    pub fn as_shift_type(&self) -> Option<ShiftType> {
        match self {
            EffectiveShift::Normal => Some(ShiftType::Normal),
            EffectiveShift::Half => Some(ShiftType::Half),
            EffectiveShift::Off => None,
        }
    }
}

/// Rendering category consumed by the presentation layer.
#[derive(
    EnumString, Display, VariantArray, Default, Clone, Debug, PartialEq, Deserialize, AsRefStr,
)]
pub enum VisualType {
    Solid,
    Hollow,
    Dash,
    #[default]
    None,
}

impl VisualType {
    pub fn css_class(&self) -> &'static str {
        match self {
            VisualType::Solid => "cell-solid",
            VisualType::Hollow => "cell-hollow",
            VisualType::Dash => "cell-dash",
            VisualType::None => "cell-none",
        }
    }
}
