use super::*;

const DIALOG_OVERLAY_CLASS: &str = "fixed inset-0 z-50 bg-black/80";

const DIALOG_CONTENT_CLASS: &str = "fixed left-1/2 top-1/2 z-50 grid w-full max-w-lg -translate-x-1/2 -translate-y-1/2 gap-4 rounded-lg border bg-background p-6 shadow-lg";

const DIALOG_CLOSE_CLASS: &str = "absolute right-4 top-4 rounded-sm opacity-70 transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";

#[component]
/// Modal dialog root: renders the overlay and caller content while `open`.
///
/// Escape and overlay clicks request dismissal through `on_close`; the open
/// state itself stays with the caller.
pub fn Dialog(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let request_close = move || {
        if let Some(on_close) = on_close.as_ref() {
            on_close.call(());
        }
    };

    #[cfg(target_arch = "wasm32")]
    {
        let escape_listener = window_event_listener(ev::keydown, move |ev| {
            if ev.default_prevented() || ev.key() != "Escape" {
                return;
            }
            if open.get_untracked() {
                ev.prevent_default();
                request_close();
            }
        });
        on_cleanup(move || escape_listener.remove());
    }

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class=DIALOG_OVERLAY_CLASS
                data-slot="dialog-overlay"
                data-state="open"
                on:click=move |_| request_close()
            ></div>
            {children()}
        </Show>
    }
}

#[component]
/// Dialog panel with `role="dialog"` semantics and an optional close action.
pub fn DialogContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&[DIALOG_CONTENT_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <div
            class=class
            id=id
            role="dialog"
            aria-modal="true"
            aria-label=aria_label
            tabindex=(-1)
            data-slot="dialog-content"
            data-state="open"
        >
            {children()}
            {on_close.map(|on_close| view! {
                <button
                    type="button"
                    class=DIALOG_CLOSE_CLASS
                    aria-label="Close"
                    data-slot="dialog-close"
                    on:click=move |_| on_close.call(())
                >
                    <svg
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        aria-hidden="true"
                    >
                        <path d="M18 6 6 18"></path>
                        <path d="m6 6 12 12"></path>
                    </svg>
                </button>
            })}
        </div>
    }
}

#[component]
/// Dialog header region.
pub fn DialogHeader(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&["flex flex-col gap-1.5", class.as_deref().unwrap_or("")]);
    view! {
        <div class=class data-slot="dialog-header">
            {children()}
        </div>
    }
}

#[component]
/// Dialog footer region for actions.
pub fn DialogFooter(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&["flex justify-end gap-2", class.as_deref().unwrap_or("")]);
    view! {
        <div class=class data-slot="dialog-footer">
            {children()}
        </div>
    }
}

#[component]
/// Dialog title line.
pub fn DialogTitle(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&[
        "text-lg font-semibold leading-none tracking-tight",
        class.as_deref().unwrap_or(""),
    ]);
    view! {
        <h2 class=class data-slot="dialog-title">
            {children()}
        </h2>
    }
}

#[component]
/// Dialog supporting copy.
pub fn DialogDescription(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&["text-sm text-muted-foreground", class.as_deref().unwrap_or("")]);
    view! {
        <p class=class data-slot="dialog-description">
            {children()}
        </p>
    }
}
