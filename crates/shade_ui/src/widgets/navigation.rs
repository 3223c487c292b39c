use super::*;

const TABS_LIST_CLASS: &str =
    "inline-flex h-9 items-center justify-center rounded-lg bg-muted p-1 text-muted-foreground";

const TABS_TRIGGER_CLASS: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md px-3 py-1 text-sm font-medium transition-all focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50 data-[state=active]:bg-background data-[state=active]:text-foreground data-[state=active]:shadow";

const TABS_CONTENT_CLASS: &str = "mt-2 focus-visible:outline-none";

fn active_state(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        "inactive"
    }
}

#[component]
/// Container for tab triggers.
pub fn TabsList(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&[TABS_LIST_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <div class=class role="tablist" aria-label=aria_label data-slot="tabs-list">
            {children()}
        </div>
    }
}

#[component]
/// Tab trigger button with roving tab order: only the selected trigger keeps
/// keyboard focusability.
pub fn TabsTrigger(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] controls: Option<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&[TABS_TRIGGER_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <button
            type="button"
            class=class
            id=id
            role="tab"
            aria-selected=move || bool_token(selected.get())
            aria-controls=controls
            aria-disabled=move || bool_token(disabled.get())
            tabindex=move || {
                if selected.get() && !disabled.get() {
                    0
                } else {
                    -1
                }
            }
            disabled=move || disabled.get()
            data-slot="tabs-trigger"
            data-state=move || active_state(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Tab panel shown while its trigger is selected.
pub fn TabsContent(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] labelled_by: Option<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = merge_class(&[TABS_CONTENT_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <div
            class=class
            id=id
            role="tabpanel"
            aria-labelledby=labelled_by
            tabindex=0
            data-slot="tabs-content"
            data-state=move || active_state(active.get())
        >
            <Show when=move || active.get() fallback=|| ()>{children()}</Show>
        </div>
    }
}
