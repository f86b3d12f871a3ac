//! Demo shell mounting a destination picker in the browser.

mod picker;

pub use picker::{DestinationPicker, DestinationPickerProps};

#[cfg(target_arch = "wasm32")]
use gloo::console;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(DestinoApp)]
fn destino_app() -> Html {
    let on_select = Callback::from(|id: &'static str| {
        console::log!("destination selected", id);
    });
    html! {
        <main class="mx-auto max-w-md p-6">
            <DestinationPicker {on_select} />
        </main>
    }
}

/// Mount the demo picker into `#root`, or the document body when absent.
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DestinoApp>::with_root(root).render();
    } else {
        yew::Renderer::<DestinoApp>::new().render();
    }
}
