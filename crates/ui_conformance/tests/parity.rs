//! Rendered-markup parity between the widget library and the reference
//! oracle: class composition, variant tables, and attribute mirrors.

use leptos::*;
use shade_ui::prelude::*;
use ui_conformance::{class_set, has_slot, slot_attr, ReferenceOracle};

fn render<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}

#[test]
fn oracle_slots_match_their_kind_keys() {
    let oracle = ReferenceOracle::load();
    for kind in oracle.kinds() {
        let widget = oracle.widget(kind).expect("listed kind resolves");
        assert_eq!(widget.slot, kind);
    }
}

#[test]
fn badge_variants_match_the_reference_classes() {
    let oracle = ReferenceOracle::load();
    let badge = oracle.widget("badge").expect("badge oracle entry");

    for (variant, token) in [
        (BadgeVariant::Default, "default"),
        (BadgeVariant::Secondary, "secondary"),
        (BadgeVariant::Destructive, "destructive"),
        (BadgeVariant::Outline, "outline"),
    ] {
        let markup = render(move || {
            view! { <Badge variant=variant class="custom-class".to_string()>"Status"</Badge> }
        });
        let expected = merge_class(&[&badge.base, &badge.variants[token], "custom-class"]);
        assert_eq!(
            slot_attr(&markup, "badge", "class"),
            Some(expected.as_str()),
            "badge variant {token}"
        );
        assert_eq!(slot_attr(&markup, "badge", "data-variant"), Some(token));
    }
}

#[test]
fn button_variant_and_size_tables_match_the_reference() {
    let oracle = ReferenceOracle::load();
    let button = oracle.widget("button").expect("button oracle entry");

    let variants = [
        (ButtonVariant::Default, "default"),
        (ButtonVariant::Secondary, "secondary"),
        (ButtonVariant::Destructive, "destructive"),
        (ButtonVariant::Outline, "outline"),
        (ButtonVariant::Ghost, "ghost"),
        (ButtonVariant::Link, "link"),
    ];
    let sizes = [
        (ButtonSize::Sm, "sm"),
        (ButtonSize::Default, "default"),
        (ButtonSize::Lg, "lg"),
        (ButtonSize::Icon, "icon"),
    ];

    for (variant, variant_token) in variants {
        for (size, size_token) in sizes {
            let markup = render(move || {
                view! { <Button variant=variant size=size>"Go"</Button> }
            });
            let expected = merge_class(&[
                &button.base,
                &button.variants[variant_token],
                &button.sizes[size_token],
                "",
            ]);
            assert_eq!(
                slot_attr(&markup, "button", "class"),
                Some(expected.as_str()),
                "button {variant_token}/{size_token}"
            );
            assert_eq!(
                slot_attr(&markup, "button", "data-variant"),
                Some(variant_token)
            );
            assert_eq!(slot_attr(&markup, "button", "data-size"), Some(size_token));
        }
    }
}

#[test]
fn caller_classes_override_variant_defaults() {
    let markup = render(|| {
        view! { <Badge class="bg-muted".to_string()>"Quiet"</Badge> }
    });
    let class = slot_attr(&markup, "badge", "class").expect("badge class");
    let classes = class_set(class);
    assert!(classes.contains("bg-muted"));
    assert!(!classes.contains("bg-primary"));
}

#[test]
fn static_surfaces_render_the_reference_base_classes() {
    let oracle = ReferenceOracle::load();
    let markup = render(|| {
        view! {
            <Card>
                <CardHeader>
                    <CardTitle>"Title"</CardTitle>
                    <CardDescription>"Copy"</CardDescription>
                </CardHeader>
                <CardContent>
                    <Skeleton/>
                </CardContent>
                <CardFooter>"Footer"</CardFooter>
            </Card>
        }
    });
    for kind in [
        "card",
        "card-header",
        "card-title",
        "card-description",
        "card-content",
        "card-footer",
        "skeleton",
    ] {
        let widget = oracle.widget(kind).expect("oracle entry");
        let expected = merge_class(&[&widget.base, ""]);
        assert_eq!(
            slot_attr(&markup, kind, "class"),
            Some(expected.as_str()),
            "{kind} base classes"
        );
    }
}

#[test]
fn progress_clamps_and_mirrors_the_value() {
    let markup = render(|| view! { <Progress value=150.0/> });
    assert_eq!(slot_attr(&markup, "progress", "role"), Some("progressbar"));
    assert_eq!(slot_attr(&markup, "progress", "aria-valuemin"), Some("0"));
    assert_eq!(slot_attr(&markup, "progress", "aria-valuemax"), Some("100"));
    assert_eq!(slot_attr(&markup, "progress", "aria-valuenow"), Some("100"));
    assert_eq!(
        slot_attr(&markup, "progress-indicator", "style"),
        Some("transform: translateX(-0%)")
    );

    let markup = render(|| view! { <Progress value=25.0/> });
    assert_eq!(slot_attr(&markup, "progress", "aria-valuenow"), Some("25"));
    assert_eq!(
        slot_attr(&markup, "progress-indicator", "style"),
        Some("transform: translateX(-75%)")
    );

    let markup = render(|| view! { <Progress value=-10.0 min=0.0 max=50.0/> });
    assert_eq!(slot_attr(&markup, "progress", "aria-valuenow"), Some("0"));
    assert_eq!(slot_attr(&markup, "progress", "aria-valuemax"), Some("50"));
}

#[test]
fn slider_clamps_and_mirrors_the_value() {
    let markup = render(|| view! { <Slider value=150.0/> });
    assert_eq!(slot_attr(&markup, "slider-thumb", "role"), Some("slider"));
    assert_eq!(slot_attr(&markup, "slider-thumb", "aria-valuemin"), Some("0"));
    assert_eq!(slot_attr(&markup, "slider-thumb", "aria-valuemax"), Some("100"));
    assert_eq!(slot_attr(&markup, "slider-thumb", "aria-valuenow"), Some("100"));
    assert_eq!(
        slot_attr(&markup, "slider-range", "style"),
        Some("width: 100%")
    );
    assert_eq!(slot_attr(&markup, "slider-thumb", "tabindex"), Some("0"));
    assert_eq!(
        slot_attr(&markup, "slider", "data-orientation"),
        Some("horizontal")
    );

    let markup = render(|| view! { <Slider value=30.0 disabled=true/> });
    assert_eq!(slot_attr(&markup, "slider-thumb", "tabindex"), Some("-1"));
    assert_eq!(
        slot_attr(&markup, "slider-thumb", "aria-disabled"),
        Some("true")
    );
    assert_eq!(slot_attr(&markup, "slider", "data-disabled"), Some("true"));
    assert_eq!(slot_attr(&markup, "slider-thumb", "aria-valuenow"), Some("30"));
}

#[test]
fn disabled_widgets_mirror_state_and_leave_the_tab_order() {
    let markup = render(|| view! { <Button disabled=true>"Go"</Button> });
    assert_eq!(slot_attr(&markup, "button", "aria-disabled"), Some("true"));
    assert_eq!(slot_attr(&markup, "button", "tabindex"), Some("-1"));

    let markup = render(|| view! { <Button>"Go"</Button> });
    assert_eq!(slot_attr(&markup, "button", "aria-disabled"), Some("false"));
    assert_eq!(slot_attr(&markup, "button", "tabindex"), Some("0"));

    let markup = render(|| view! { <Input disabled=true/> });
    assert_eq!(slot_attr(&markup, "input", "aria-disabled"), Some("true"));
    assert_eq!(slot_attr(&markup, "input", "tabindex"), Some("-1"));
}

#[test]
fn checkbox_mirrors_checked_state() {
    let markup = render(|| view! { <Checkbox checked=true/> });
    assert_eq!(slot_attr(&markup, "checkbox", "role"), Some("checkbox"));
    assert_eq!(slot_attr(&markup, "checkbox", "aria-checked"), Some("true"));
    assert_eq!(slot_attr(&markup, "checkbox", "data-state"), Some("checked"));

    let markup = render(|| view! { <Checkbox/> });
    assert_eq!(slot_attr(&markup, "checkbox", "aria-checked"), Some("false"));
    assert_eq!(
        slot_attr(&markup, "checkbox", "data-state"),
        Some("unchecked")
    );
}

#[test]
fn switch_mirrors_checked_state_on_root_and_thumb() {
    let markup = render(|| view! { <Switch checked=true/> });
    assert_eq!(slot_attr(&markup, "switch", "role"), Some("switch"));
    assert_eq!(slot_attr(&markup, "switch", "aria-checked"), Some("true"));
    assert_eq!(slot_attr(&markup, "switch", "data-state"), Some("checked"));
    assert_eq!(
        slot_attr(&markup, "switch-thumb", "data-state"),
        Some("checked")
    );

    let markup = render(|| view! { <Switch/> });
    assert_eq!(slot_attr(&markup, "switch", "data-state"), Some("unchecked"));
}

#[test]
fn separator_orientation_selects_the_axis_fragment() {
    let oracle = ReferenceOracle::load();
    let separator = oracle.widget("separator").expect("separator oracle entry");

    let markup = render(|| view! { <Separator/> });
    let expected = merge_class(&[&separator.base, &separator.variants["horizontal"], ""]);
    assert_eq!(
        slot_attr(&markup, "separator", "class"),
        Some(expected.as_str())
    );
    assert_eq!(slot_attr(&markup, "separator", "role"), Some("none"));
    assert_eq!(
        slot_attr(&markup, "separator", "data-orientation"),
        Some("horizontal")
    );
    assert_eq!(slot_attr(&markup, "separator", "aria-orientation"), None);

    let markup = render(|| {
        view! { <Separator orientation=Orientation::Vertical decorative=false/> }
    });
    let expected = merge_class(&[&separator.base, &separator.variants["vertical"], ""]);
    assert_eq!(
        slot_attr(&markup, "separator", "class"),
        Some(expected.as_str())
    );
    assert_eq!(slot_attr(&markup, "separator", "role"), Some("separator"));
    assert_eq!(
        slot_attr(&markup, "separator", "aria-orientation"),
        Some("vertical")
    );
}

#[test]
fn tabs_mirror_selection_state() {
    let markup = render(|| {
        view! {
            <TabsList aria_label="Sections".to_string()>
                <TabsTrigger id="tab-a".to_string() controls="panel-a".to_string() selected=true>
                    "A"
                </TabsTrigger>
                <TabsTrigger id="tab-b".to_string() controls="panel-b".to_string()>
                    "B"
                </TabsTrigger>
            </TabsList>
        }
    });
    assert_eq!(slot_attr(&markup, "tabs-list", "role"), Some("tablist"));

    let selected = markup.find("tab-a").expect("first trigger");
    let unselected = markup.find("tab-b").expect("second trigger");
    let (first, second) = (&markup[..unselected], &markup[selected..]);
    assert!(first.contains("data-state=\"active\""));
    assert!(second.contains("data-state=\"inactive\""));
    assert!(first.contains("aria-selected=\"true\""));
    assert!(second.contains("tabindex=\"-1\""));
}

#[test]
fn inactive_tab_panels_render_no_children() {
    let markup = render(|| {
        view! {
            <TabsContent id="panel-a".to_string() active=false>
                "Panel body"
            </TabsContent>
        }
    });
    assert_eq!(slot_attr(&markup, "tabs-content", "role"), Some("tabpanel"));
    assert_eq!(
        slot_attr(&markup, "tabs-content", "data-state"),
        Some("inactive")
    );
    assert!(!markup.contains("Panel body"));

    let markup = render(|| {
        view! {
            <TabsContent id="panel-a".to_string() active=true>
                "Panel body"
            </TabsContent>
        }
    });
    assert!(markup.contains("Panel body"));
}

#[test]
fn closed_dialogs_render_nothing() {
    let markup = render(|| {
        view! {
            <Dialog open=false>
                <DialogContent>"Body"</DialogContent>
            </Dialog>
        }
    });
    assert!(!has_slot(&markup, "dialog-overlay"));
    assert!(!markup.contains("Body"));
}

#[test]
fn open_dialogs_render_overlay_and_modal_content() {
    let markup = render(|| {
        view! {
            <Dialog open=true>
                <DialogContent aria_label="Example".to_string()>
                    <DialogHeader>
                        <DialogTitle>"Title"</DialogTitle>
                        <DialogDescription>"Supporting copy"</DialogDescription>
                    </DialogHeader>
                    <DialogFooter>
                        <Button>"Confirm"</Button>
                    </DialogFooter>
                </DialogContent>
            </Dialog>
        }
    });
    assert!(has_slot(&markup, "dialog-overlay"));
    assert_eq!(slot_attr(&markup, "dialog-content", "role"), Some("dialog"));
    assert_eq!(
        slot_attr(&markup, "dialog-content", "aria-modal"),
        Some("true")
    );
    assert!(markup.contains("Supporting copy"));
}

#[test]
fn labels_carry_their_target_association() {
    let markup = render(|| {
        view! { <Label html_for="name-input".to_string()>"Name"</Label> }
    });
    assert_eq!(slot_attr(&markup, "label", "for"), Some("name-input"));
}

#[test]
fn fields_stage_children_for_adoption() {
    let markup = render(|| {
        view! {
            <Field title="Volume".to_string() description="Output level".to_string()>
                <Input/>
            </Field>
        }
    });
    assert!(has_slot(&markup, "field"));
    assert!(has_slot(&markup, "control"));
    assert!(has_slot(&markup, "field-light"));
    assert!(markup.contains("Volume"));
    assert!(has_slot(&markup, "input"));
}

#[test]
fn input_renders_placeholder_and_type() {
    let markup = render(|| {
        view! { <Input placeholder="Search".to_string()/> }
    });
    assert_eq!(slot_attr(&markup, "input", "type"), Some("text"));
    assert_eq!(slot_attr(&markup, "input", "placeholder"), Some("Search"));

    let markup = render(|| view! { <Textarea placeholder="Notes".to_string()/> });
    assert_eq!(slot_attr(&markup, "textarea", "placeholder"), Some("Notes"));
}
