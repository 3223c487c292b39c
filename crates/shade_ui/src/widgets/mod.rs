//! Widget components and the shared variant, size, and orientation tokens.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::class::merge_class;
#[cfg(target_arch = "wasm32")]
use crate::projection::{adopt_children, ChildProjection};

mod controls;
mod data_display;
mod navigation;
mod overlays;

pub use controls::{Button, Checkbox, Field, Input, Slider, Switch, Textarea};
pub use data_display::{
    Badge, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Label, Progress,
    Separator, Skeleton,
};
pub use navigation::{TabsContent, TabsList, TabsTrigger};
pub use overlays::{
    Dialog, DialogContent, DialogDescription, DialogFooter, DialogHeader, DialogTitle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button styling variants.
pub enum ButtonVariant {
    /// Primary emphasized action.
    Default,
    /// Muted secondary action.
    Secondary,
    /// Destructive/danger action.
    Destructive,
    /// Bordered low-emphasis action.
    Outline,
    /// Borderless quiet action.
    Ghost,
    /// Inline link-styled action.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    pub(crate) fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground shadow hover:bg-primary/90",
            Self::Secondary => {
                "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80"
            }
            Self::Destructive => {
                "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90"
            }
            Self::Outline => {
                "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground"
            }
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }

    /// Resolves a variant token; unknown tokens fall back to [`Self::Default`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "secondary" => Self::Secondary,
            "destructive" => Self::Destructive,
            "outline" => Self::Outline,
            "ghost" => Self::Ghost,
            "link" => Self::Link,
            _ => Self::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Default,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Default => "default",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }

    pub(crate) fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 rounded-md px-3 text-xs",
            Self::Default => "h-9 px-4 py-2",
            Self::Lg => "h-10 rounded-md px-8",
            Self::Icon => "h-9 w-9",
        }
    }

    /// Resolves a size token; unknown tokens fall back to [`Self::Default`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            "icon" => Self::Icon,
            _ => Self::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge styling variants.
pub enum BadgeVariant {
    /// Primary badge.
    Default,
    /// Muted secondary badge.
    Secondary,
    /// Destructive/danger badge.
    Destructive,
    /// Border-only badge.
    Outline,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl BadgeVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }

    pub(crate) fn classes(self) -> &'static str {
        match self {
            Self::Default => {
                "border-transparent bg-primary text-primary-foreground shadow hover:bg-primary/80"
            }
            Self::Secondary => {
                "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            Self::Destructive => {
                "border-transparent bg-destructive text-destructive-foreground shadow hover:bg-destructive/80"
            }
            Self::Outline => "text-foreground",
        }
    }

    /// Resolves a variant token; unknown tokens fall back to [`Self::Default`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "secondary" => Self::Secondary,
            "destructive" => Self::Destructive,
            "outline" => Self::Outline,
            _ => Self::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Axis orientation for separators and sliders.
pub enum Orientation {
    /// Left-to-right layout.
    Horizontal,
    /// Top-to-bottom layout.
    Vertical,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl Orientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

pub(crate) fn checked_state(checked: bool) -> &'static str {
    if checked {
        "checked"
    } else {
        "unchecked"
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Keyboard focusability mirror: disabled widgets leave the tab order.
pub(crate) fn focus_tabindex(disabled: bool) -> i32 {
    if disabled {
        -1
    } else {
        0
    }
}

/// Clamps `value` into `[min, max]`; a degenerate range clamps to `min`.
pub fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    value.clamp(min, max)
}

/// Linear position of `value` in `[min, max]`, as a percentage in `[0, 100]`.
pub fn percent_of(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    (clamp_value(value, min, max) - min) / (max - min) * 100.0
}
