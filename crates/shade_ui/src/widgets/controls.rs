use wasm_bindgen::JsCast;

use super::*;

const BUTTON_CLASS: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";

const CHECKBOX_CLASS: &str = "peer h-4 w-4 shrink-0 rounded-sm border border-primary shadow focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50 data-[state=checked]:bg-primary data-[state=checked]:text-primary-foreground";

const INPUT_CLASS: &str = "flex h-9 w-full rounded-md border border-input bg-transparent px-3 py-1 text-sm shadow-sm transition-colors placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50";

const TEXTAREA_CLASS: &str = "flex min-h-16 w-full rounded-md border border-input bg-transparent px-3 py-2 text-sm shadow-sm placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50";

const SWITCH_CLASS: &str = "peer inline-flex h-5 w-9 shrink-0 cursor-pointer items-center rounded-full border-2 border-transparent shadow-sm transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50 data-[state=checked]:bg-primary data-[state=unchecked]:bg-input";

const SWITCH_THUMB_CLASS: &str = "pointer-events-none block h-4 w-4 rounded-full bg-background shadow-lg ring-0 transition-transform data-[state=checked]:translate-x-4 data-[state=unchecked]:translate-x-0";

const SLIDER_CLASS: &str = "relative flex w-full touch-none select-none items-center";

const SLIDER_TRACK_CLASS: &str =
    "relative h-1.5 w-full grow overflow-hidden rounded-full bg-primary/20";

const SLIDER_RANGE_CLASS: &str = "absolute h-full bg-primary";

const SLIDER_THUMB_CLASS: &str = "absolute top-1/2 -translate-y-1/2 block h-4 w-4 rounded-full border border-primary/50 bg-background shadow transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring";

const FIELD_CLASS: &str = "flex flex-col gap-2";

#[component]
/// Action button with standardized variants, sizes, and disabled mirrors.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Default)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_class(&[
        BUTTON_CLASS,
        variant.classes(),
        size.classes(),
        class.as_deref().unwrap_or(""),
    ]);
    view! {
        <button
            type="button"
            class=class
            id=id
            aria-label=aria_label
            aria-disabled=move || bool_token(disabled.get())
            tabindex=move || focus_tabindex(disabled.get())
            disabled=move || disabled.get()
            data-slot="button"
            data-variant=variant.token()
            data-size=size.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Binary checkbox with `role="checkbox"` semantics and a check indicator.
pub fn Checkbox(
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(!checked.get_untracked());
        }
    };
    let class = merge_class(&[CHECKBOX_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <button
            type="button"
            class=class
            id=id
            role="checkbox"
            aria-checked=move || bool_token(checked.get())
            aria-label=aria_label
            aria-disabled=move || bool_token(disabled.get())
            tabindex=move || focus_tabindex(disabled.get())
            disabled=move || disabled.get()
            data-slot="checkbox"
            data-state=move || checked_state(checked.get())
            on:click=move |_| handle_toggle()
        >
            <span data-slot="checkbox-indicator" class="flex items-center justify-center text-current">
                <Show when=move || checked.get() fallback=|| ()>
                    <svg
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="3"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        aria-hidden="true"
                    >
                        <path d="M20 6 9 17l-5-5"></path>
                    </svg>
                </Show>
            </span>
        </button>
    }
}

#[component]
/// Single-line text input emitting the current value on entry.
pub fn Input(
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let class = merge_class(&[INPUT_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <input
            class=class
            id=id
            type=input_type.unwrap_or("text")
            placeholder=placeholder
            aria-label=aria_label
            aria-disabled=move || bool_token(disabled.get())
            tabindex=move || focus_tabindex(disabled.get())
            disabled=move || disabled.get()
            node_ref=node_ref
            prop:value=move || value.get()
            data-slot="input"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(event_target_value(&ev));
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        />
    }
}

#[component]
/// Multiline text area emitting the current value on entry.
pub fn Textarea(
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let class = merge_class(&[TEXTAREA_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <textarea
            class=class
            id=id
            placeholder=placeholder
            aria-label=aria_label
            aria-disabled=move || bool_token(disabled.get())
            tabindex=move || focus_tabindex(disabled.get())
            disabled=move || disabled.get()
            prop:value=move || value.get()
            data-slot="textarea"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        ></textarea>
    }
}

#[component]
/// Toggle switch with explicit `role="switch"` semantics.
pub fn Switch(
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(!checked.get_untracked());
        }
    };
    let class = merge_class(&[SWITCH_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <button
            type="button"
            class=class
            id=id
            role="switch"
            aria-checked=move || bool_token(checked.get())
            aria-label=aria_label
            aria-disabled=move || bool_token(disabled.get())
            tabindex=move || focus_tabindex(disabled.get())
            disabled=move || disabled.get()
            data-slot="switch"
            data-state=move || checked_state(checked.get())
            on:click=move |_| handle_toggle()
            on:keydown=move |ev| match ev.key().as_str() {
                " " | "Enter" => {
                    ev.prevent_default();
                    handle_toggle();
                }
                _ => {}
            }
        >
            <span
                data-slot="switch-thumb"
                class=SWITCH_THUMB_CLASS
                data-state=move || checked_state(checked.get())
            ></span>
        </button>
    }
}

#[component]
/// Horizontal slider with press-to-set on the track and keyboard stepping on
/// the thumb. The value is clamped to `[min, max]` before it drives either
/// the range geometry or the `aria-value*` mirrors.
pub fn Slider(
    #[prop(optional, into)] value: MaybeSignal<f64>,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<f64>>,
) -> impl IntoView {
    let clamped = Signal::derive(move || clamp_value(value.get(), min, max));
    let percent = Signal::derive(move || percent_of(value.get(), min, max));

    let emit = move |next: f64| {
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(clamp_value(next, min, max));
        }
    };

    let pointer_value = move |ev: &web_sys::PointerEvent| -> Option<f64> {
        let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
        let rect = element.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return None;
        }
        let ratio = ((ev.client_x() as f64 - rect.left()) / rect.width()).clamp(0.0, 1.0);
        let raw = min + ratio * (max - min);
        let snapped = if step > 0.0 {
            ((raw - min) / step).round() * step + min
        } else {
            raw
        };
        Some(clamp_value(snapped, min, max))
    };

    let class = merge_class(&[SLIDER_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <div
            class=class
            data-slot="slider"
            data-orientation=Orientation::Horizontal.token()
            data-disabled=move || bool_token(disabled.get())
            on:pointerdown=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(next) = pointer_value(&ev) {
                    emit(next);
                }
            }
        >
            <div data-slot="slider-track" class=SLIDER_TRACK_CLASS>
                <div
                    data-slot="slider-range"
                    class=SLIDER_RANGE_CLASS
                    style=move || format!("width: {}%", percent.get())
                ></div>
            </div>
            <div
                data-slot="slider-thumb"
                class=SLIDER_THUMB_CLASS
                style=move || format!("left: calc({}% - 8px)", percent.get())
                role="slider"
                aria-label=aria_label
                aria-orientation=Orientation::Horizontal.token()
                aria-valuemin=min.to_string()
                aria-valuemax=max.to_string()
                aria-valuenow=move || clamped.get().to_string()
                aria-disabled=move || bool_token(disabled.get())
                tabindex=move || focus_tabindex(disabled.get())
                on:keydown=move |ev| {
                    if disabled.get_untracked() {
                        return;
                    }
                    let current = clamped.get_untracked();
                    match ev.key().as_str() {
                        "ArrowLeft" | "ArrowDown" => {
                            ev.prevent_default();
                            emit(current - step);
                        }
                        "ArrowRight" | "ArrowUp" => {
                            ev.prevent_default();
                            emit(current + step);
                        }
                        "PageDown" => {
                            ev.prevent_default();
                            emit(current - step * 10.0);
                        }
                        "PageUp" => {
                            ev.prevent_default();
                            emit(current + step * 10.0);
                        }
                        "Home" => {
                            ev.prevent_default();
                            emit(min);
                        }
                        "End" => {
                            ev.prevent_default();
                            emit(max);
                        }
                        _ => {}
                    }
                }
            ></div>
        </div>
    }
}

#[component]
/// Labeled form row. Caller children land in a staging region and are
/// adopted into the internal `data-slot="control"` element after first
/// paint; the adoption never re-runs on later updates.
pub fn Field(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    let light_ref = create_node_ref::<html::Span>();
    let control_ref = create_node_ref::<html::Span>();

    #[cfg(target_arch = "wasm32")]
    {
        let projection = store_value(ChildProjection::new());
        create_effect(move |_| {
            let Some(light) = light_ref.get() else {
                return;
            };
            let control = control_ref.get();
            let light_el: &web_sys::Element = &light;
            let control_el: Option<&web_sys::Element> = match control.as_ref() {
                Some(element) => Some(element),
                None => None,
            };
            projection.update_value(|projection| adopt_children(projection, light_el, control_el));
        });
    }

    let class = merge_class(&[FIELD_CLASS, class.as_deref().unwrap_or("")]);
    view! {
        <label class=class data-slot="field">
            <span data-slot="field-copy" class="flex flex-col gap-1">
                {title.map(|title| view! {
                    <span data-slot="field-title" class="text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70">
                        {title}
                    </span>
                })}
                {description.map(|description| view! {
                    <span data-slot="field-description" class="text-sm text-muted-foreground">{description}</span>
                })}
            </span>
            <span data-slot="control" class="flex flex-col gap-2" node_ref=control_ref></span>
            <span data-slot="field-light" class="hidden" node_ref=light_ref>
                {children()}
            </span>
        </label>
    }
}
