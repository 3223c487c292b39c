//! Widget gallery application for the `shade_ui` component set.
//!
//! The app renders every widget family in one surface so visual refinements
//! can be reviewed together, and persists the interactive state between
//! sessions through browser storage.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use serde::{Deserialize, Serialize};
use shade_ui::prelude::*;
use thiserror::Error;

const STATE_KEY: &str = "shade_gallery.state.v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum GallerySection {
    Controls,
    Surfaces,
}

impl GallerySection {
    fn token(self) -> &'static str {
        match self {
            Self::Controls => "controls",
            Self::Surfaces => "surfaces",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Controls => "Controls",
            Self::Surfaces => "Surfaces",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct GalleryState {
    section: GallerySection,
    switch_enabled: bool,
    terms_accepted: bool,
    slider_value: f64,
    progress_value: f64,
    dialog_open: bool,
    name_value: String,
    notes_value: String,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            section: GallerySection::Controls,
            switch_enabled: true,
            terms_accepted: false,
            slider_value: 64.0,
            progress_value: 72.0,
            dialog_open: false,
            name_value: "Ada".to_string(),
            notes_value: "Every control shares one accent family.".to_string(),
        }
    }
}

/// Errors surfaced by the gallery's local persistence adapter.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Browser storage is unavailable (privacy mode or a headless host).
    #[error("browser storage unavailable")]
    StorageUnavailable,
    /// The state snapshot failed to serialize or deserialize.
    #[error("state snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Loads the persisted gallery state if present.
///
/// On non-WASM targets this returns `None`.
fn load_state() -> Result<Option<GalleryState>, PersistError> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok_or(PersistError::StorageUnavailable)?;
        let Some(raw) = storage.get_item(STATE_KEY).ok().flatten() else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Ok(None)
    }
}

fn save_state(state: &GalleryState) -> Result<(), PersistError> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok_or(PersistError::StorageUnavailable)?;
        let raw = serde_json::to_string(state)?;
        storage
            .set_item(STATE_KEY, &raw)
            .map_err(|_| PersistError::StorageUnavailable)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = state;
        Ok(())
    }
}

#[component]
/// Gallery window contents.
pub fn GalleryApp() -> impl IntoView {
    let state = create_rw_signal(GalleryState::default());
    let last_saved = create_rw_signal::<Option<String>>(None);

    match load_state() {
        Ok(Some(restored)) => {
            last_saved.set(serde_json::to_string(&restored).ok());
            state.set(restored);
        }
        Ok(None) => {}
        Err(err) => logging::warn!("gallery state restore failed: {err}"),
    }

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("gallery serialize failed: {err}");
                return;
            }
        };
        if last_saved.get().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));
        if let Err(err) = save_state(&snapshot) {
            logging::warn!("gallery state persist failed: {err}");
        }
    });

    let section = Signal::derive(move || state.get().section);
    let dialog_open = Signal::derive(move || state.get().dialog_open);

    view! {
        <div class="mx-auto flex max-w-3xl flex-col gap-6 p-6">
            <TabsList aria_label="Gallery sections".to_string()>
                {[GallerySection::Controls, GallerySection::Surfaces]
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <TabsTrigger
                                id=format!("tab-{}", entry.token())
                                controls=format!("panel-{}", entry.token())
                                selected=Signal::derive(move || section.get() == entry)
                                on_click=Callback::new(move |_| {
                                    state.update(|state| state.section = entry);
                                })
                            >
                                {entry.label()}
                            </TabsTrigger>
                        }
                    })
                    .collect_view()}
            </TabsList>

            <TabsContent
                id="panel-controls".to_string()
                labelled_by="tab-controls".to_string()
                active=Signal::derive(move || section.get() == GallerySection::Controls)
            >
                <ControlsPanel state=state/>
            </TabsContent>

            <TabsContent
                id="panel-surfaces".to_string()
                labelled_by="tab-surfaces".to_string()
                active=Signal::derive(move || section.get() == GallerySection::Surfaces)
            >
                <SurfacesPanel/>
            </TabsContent>

            <Dialog
                open=dialog_open
                on_close=Callback::new(move |_| state.update(|state| state.dialog_open = false))
            >
                <DialogContent
                    aria_label="Gallery dialog".to_string()
                    on_close=Callback::new(move |_| state.update(|state| state.dialog_open = false))
                >
                    <DialogHeader>
                        <DialogTitle>"Reset gallery state"</DialogTitle>
                        <DialogDescription>
                            "Restores every control to its default value."
                        </DialogDescription>
                    </DialogHeader>
                    <DialogFooter>
                        <Button
                            variant=ButtonVariant::Outline
                            on_click=Callback::new(move |_| {
                                state.update(|state| state.dialog_open = false);
                            })
                        >
                            "Cancel"
                        </Button>
                        <Button
                            variant=ButtonVariant::Destructive
                            on_click=Callback::new(move |_| state.set(GalleryState::default()))
                        >
                            "Reset"
                        </Button>
                    </DialogFooter>
                </DialogContent>
            </Dialog>
        </div>
    }
}

#[component]
fn ControlsPanel(state: RwSignal<GalleryState>) -> impl IntoView {
    let slider_value = Signal::derive(move || state.get().slider_value);
    let progress_value = Signal::derive(move || state.get().progress_value);

    view! {
        <div class="flex flex-col gap-6">
            <Card>
                <CardHeader>
                    <CardTitle>"Actions"</CardTitle>
                    <CardDescription>"Button variants and badges."</CardDescription>
                </CardHeader>
                <CardContent class="flex flex-wrap items-center gap-2".to_string()>
                    <Button on_click=Callback::new(move |_| {
                        state.update(|state| state.dialog_open = true);
                    })>
                        "Open dialog"
                    </Button>
                    <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                    <Button variant=ButtonVariant::Destructive>"Delete"</Button>
                    <Button variant=ButtonVariant::Outline>"Outline"</Button>
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm>"Ghost"</Button>
                    <Separator orientation=Orientation::Vertical class="h-6".to_string()/>
                    <Badge>"New"</Badge>
                    <Badge variant=BadgeVariant::Secondary>"Draft"</Badge>
                    <Badge variant=BadgeVariant::Destructive>"Failed"</Badge>
                    <Badge variant=BadgeVariant::Outline>"Archived"</Badge>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Form controls"</CardTitle>
                </CardHeader>
                <CardContent class="flex flex-col gap-4".to_string()>
                    <Field title="Name".to_string() description="Shown on the profile card.".to_string()>
                        <Input
                            value=Signal::derive(move || state.get().name_value)
                            placeholder="Full name".to_string()
                            on_input=Callback::new(move |value: String| {
                                state.update(|state| state.name_value = value);
                            })
                        />
                    </Field>
                    <Field title="Notes".to_string()>
                        <Textarea
                            value=Signal::derive(move || state.get().notes_value)
                            on_input=Callback::new(move |value: String| {
                                state.update(|state| state.notes_value = value);
                            })
                        />
                    </Field>
                    <div class="flex items-center gap-2">
                        <Checkbox
                            id="terms".to_string()
                            checked=Signal::derive(move || state.get().terms_accepted)
                            on_change=Callback::new(move |next: bool| {
                                state.update(|state| state.terms_accepted = next);
                            })
                        />
                        <Label html_for="terms".to_string()>"Accept terms"</Label>
                    </div>
                    <div class="flex items-center gap-2">
                        <Switch
                            id="notifications".to_string()
                            checked=Signal::derive(move || state.get().switch_enabled)
                            on_toggle=Callback::new(move |next: bool| {
                                state.update(|state| state.switch_enabled = next);
                            })
                        />
                        <Label html_for="notifications".to_string()>"Notifications"</Label>
                    </div>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Ranges"</CardTitle>
                    <CardDescription>"Slider input feeding a progress mirror."</CardDescription>
                </CardHeader>
                <CardContent class="flex flex-col gap-4".to_string()>
                    <Slider
                        value=slider_value
                        aria_label="Volume".to_string()
                        on_change=Callback::new(move |next: f64| {
                            state.update(|state| {
                                state.slider_value = next;
                                state.progress_value = next;
                            });
                        })
                    />
                    <Progress value=progress_value aria_label="Volume level".to_string()/>
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn SurfacesPanel() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6">
            <Card>
                <CardHeader>
                    <CardTitle>"Profile"</CardTitle>
                    <CardDescription>"Card regions with a separator."</CardDescription>
                </CardHeader>
                <CardContent>
                    <p class="text-sm">"Body copy sits inside the content region."</p>
                    <Separator class="my-4".to_string()/>
                    <p class="text-sm text-muted-foreground">"Secondary copy after the divider."</p>
                </CardContent>
                <CardFooter>
                    <Badge variant=BadgeVariant::Secondary>"Updated today"</Badge>
                </CardFooter>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Loading"</CardTitle>
                    <CardDescription>"Skeleton placeholders."</CardDescription>
                </CardHeader>
                <CardContent class="flex flex-col gap-2".to_string()>
                    <Skeleton class="h-4 w-2/3".to_string()/>
                    <Skeleton class="h-4 w-1/2".to_string()/>
                    <Skeleton class="h-24 w-full".to_string()/>
                </CardContent>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_round_trips_through_serde() {
        let state = GalleryState::default();
        let raw = serde_json::to_string(&state).expect("serialize");
        let restored: GalleryState = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(restored, state);
    }

    #[test]
    fn section_tokens_are_stable() {
        assert_eq!(GallerySection::Controls.token(), "controls");
        assert_eq!(GallerySection::Surfaces.token(), "surfaces");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn persistence_is_a_no_op_off_the_browser() {
        assert!(matches!(load_state(), Ok(None)));
        assert!(save_state(&GalleryState::default()).is_ok());
    }
}
