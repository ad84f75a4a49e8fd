/// Visual transform derived for one panel on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub translate_y: f64,
    pub scale: f64,
    pub rotation: f64,
    pub blur: f64,
}

fn round_to(value: f64, factor: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        return fallback;
    }
    let rounded = (value * factor).round() / factor;
    // normalise -0.0 so identical inputs render identical strings
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translate_y: 0.0,
        scale: 1.0,
        rotation: 0.0,
        blur: 0.0,
    };

    /// Rounds to the precision the presentation layer receives. Non-finite
    /// fields fall back to the identity value.
    pub fn rounded(self) -> Self {
        Self {
            translate_y: round_to(self.translate_y, 100.0, 0.0),
            scale: round_to(self.scale, 1000.0, 1.0),
            rotation: round_to(self.rotation, 100.0, 0.0),
            blur: round_to(self.blur, 100.0, 0.0),
        }
    }

    pub fn differs_from(&self, other: &Self, tolerance: &Tolerance) -> bool {
        (self.translate_y - other.translate_y).abs() > tolerance.translate
            || (self.scale - other.scale).abs() > tolerance.scale
            || (self.rotation - other.rotation).abs() > tolerance.rotation
            || (self.blur - other.blur).abs() > tolerance.blur
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate3d(0, {}px, 0) scale3d({}, {}, 1) rotate({}deg)",
            self.translate_y, self.scale, self.scale, self.rotation
        )
    }

    pub fn css_filter(&self) -> String {
        if self.blur > 0.0 {
            format!("blur({}px)", self.blur)
        } else {
            String::new()
        }
    }
}

/// Per-field thresholds below which a new transform is not re-applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub translate: f64,
    pub scale: f64,
    pub rotation: f64,
    pub blur: f64,
}

impl Tolerance {
    pub const FINE: Self = Self {
        translate: 0.1,
        scale: 0.001,
        rotation: 0.1,
        blur: 0.1,
    };

    /// Used for coarse pointers (touch), where updates arrive in bigger
    /// steps and layout work is more expensive.
    pub const COARSE: Self = Self {
        translate: 1.0,
        scale: 0.005,
        rotation: 0.5,
        blur: 0.5,
    };

    pub fn for_pointer(coarse: bool) -> Self {
        if coarse {
            Self::COARSE
        } else {
            Self::FINE
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::FINE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Jump straight to the new transform.
    Snap,
    EaseForward,
    EaseBackward,
}

impl Transition {
    pub fn css(&self) -> &'static str {
        match self {
            Self::Snap => "none",
            Self::EaseForward => {
                "transform 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94), filter 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94)"
            }
            Self::EaseBackward => {
                "transform 0.4s cubic-bezier(0.25, 0.1, 0.25, 1), filter 0.4s cubic-bezier(0.25, 0.1, 0.25, 1)"
            }
        }
    }
}
