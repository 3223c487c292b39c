use gallery_app::GalleryApp;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Widget Gallery" />
        <Meta name="description" content="A gallery of the shade_ui widget set." />

        <main class="site-root">
            <GalleryApp />
        </main>
    }
}
