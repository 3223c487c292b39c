use super::*;

const BADGE_CLASS: &str = "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";

const CARD_CLASS: &str = "rounded-xl border bg-card text-card-foreground shadow";

const LABEL_CLASS: &str =
    "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70";

const PROGRESS_CLASS: &str = "relative h-2 w-full overflow-hidden rounded-full bg-primary/20";

const PROGRESS_INDICATOR_CLASS: &str = "h-full w-full flex-1 bg-primary transition-all";

const SEPARATOR_CLASS: &str = "shrink-0 bg-border";

const SKELETON_CLASS: &str = "animate-pulse rounded-md bg-primary/10";

#[component]
/// Compact status badge.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&[BADGE_CLASS, variant.classes(), class.as_deref().unwrap_or("")]);
    view! {
        <span class=class data-slot="badge" data-variant=variant.token()>
            {children()}
        </span>
    }
}

#[component]
/// Card surface for summaries and document-like regions.
pub fn Card(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let class = merge_class(&[CARD_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <div class=class data-slot="card">
            {children()}
        </div>
    }
}

#[component]
/// Card header region.
pub fn CardHeader(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&["flex flex-col gap-1.5 p-6", class.as_deref().unwrap_or("")]);
    view! {
        <div class=class data-slot="card-header">
            {children()}
        </div>
    }
}

#[component]
/// Card title line.
pub fn CardTitle(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&[
        "font-semibold leading-none tracking-tight",
        class.as_deref().unwrap_or(""),
    ]);
    view! {
        <div class=class data-slot="card-title">
            {children()}
        </div>
    }
}

#[component]
/// Card supporting copy.
pub fn CardDescription(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&["text-sm text-muted-foreground", class.as_deref().unwrap_or("")]);
    view! {
        <div class=class data-slot="card-description">
            {children()}
        </div>
    }
}

#[component]
/// Card body region.
pub fn CardContent(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&["p-6 pt-0", class.as_deref().unwrap_or("")]);
    view! {
        <div class=class data-slot="card-content">
            {children()}
        </div>
    }
}

#[component]
/// Card footer region.
pub fn CardFooter(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&["flex items-center p-6 pt-0", class.as_deref().unwrap_or("")]);
    view! {
        <div class=class data-slot="card-footer">
            {children()}
        </div>
    }
}

#[component]
/// Form label associated with a control via `html_for`.
pub fn Label(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] html_for: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&[LABEL_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <label class=class for=html_for data-slot="label">
            {children()}
        </label>
    }
}

#[component]
/// Linear progress indicator. The value is clamped to `[min, max]` before it
/// drives both the indicator geometry and the `aria-value*` mirrors.
pub fn Progress(
    #[prop(optional, into)] value: MaybeSignal<f64>,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let clamped = Signal::derive(move || clamp_value(value.get(), min, max));
    let percent = Signal::derive(move || percent_of(value.get(), min, max));

    let class = merge_class(&[PROGRESS_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <div
            class=class
            role="progressbar"
            aria-label=aria_label
            aria-valuemin=min.to_string()
            aria-valuemax=max.to_string()
            aria-valuenow=move || clamped.get().to_string()
            data-slot="progress"
        >
            <div
                data-slot="progress-indicator"
                class=PROGRESS_INDICATOR_CLASS
                style=move || format!("transform: translateX(-{}%)", 100.0 - percent.get())
            ></div>
        </div>
    }
}

#[component]
/// Visual divider between content regions.
pub fn Separator(
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(default = true)] decorative: bool,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let axis_class = match orientation {
        Orientation::Horizontal => "h-px w-full",
        Orientation::Vertical => "h-full w-px",
    };
    let class = merge_class(&[SEPARATOR_CLASS, axis_class, class.as_deref().unwrap_or("")]);
    let role = if decorative { "none" } else { "separator" };
    let aria_orientation = (!decorative).then(|| orientation.token());
    view! {
        <div
            class=class
            role=role
            aria-orientation=aria_orientation
            data-slot="separator"
            data-orientation=orientation.token()
        ></div>
    }
}

#[component]
/// Loading placeholder block.
pub fn Skeleton(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let class = merge_class(&[SKELETON_CLASS, class.as_deref().unwrap_or("")]);
    view! { <div class=class data-slot="skeleton"></div> }
}
