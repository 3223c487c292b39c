//! Presentational widget library mirroring a utility-class design system.
//!
//! Every widget maps a handful of typed properties to a canonical class
//! string plus a set of mirrored DOM attributes (`data-slot`, ARIA state,
//! `disabled`, `tabindex`). Class composition is ordered — base fragment,
//! variant fragments, caller classes — and merged with later-wins semantics
//! per conflicting utility, so caller classes always override variant
//! defaults. Apps should compose these widgets instead of emitting ad hoc
//! control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class;
mod projection;
mod widgets;

pub use class::merge_class;
pub use projection::{adopt_children, ChildProjection, NodeKind};
pub use widgets::{
    clamp_value, percent_of, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card,
    CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Checkbox, Dialog,
    DialogContent, DialogDescription, DialogFooter, DialogHeader, DialogTitle, Field, Input,
    Label, Orientation, Progress, Separator, Skeleton, Slider, Switch, TabsContent, TabsList,
    TabsTrigger, Textarea,
};

/// Convenience imports for application crates consuming the widget set.
pub mod prelude {
    pub use crate::{
        clamp_value, merge_class, percent_of, Badge, BadgeVariant, Button, ButtonSize,
        ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
        Checkbox, Dialog, DialogContent, DialogDescription, DialogFooter, DialogHeader,
        DialogTitle, Field, Input, Label, Orientation, Progress, Separator, Skeleton, Slider,
        Switch, TabsContent, TabsList, TabsTrigger, Textarea,
    };
}
