use yew::prelude::*;

use crate::components::atoms::DestinationButton;
use crate::models::{Destination, demo_destinations, selected_label};

/// Props for [`DestinationPicker`].
#[derive(Properties, PartialEq)]
pub struct DestinationPickerProps {
    /// Options to offer, in display order.
    #[prop_or_else(demo_destinations)]
    pub destinations: Vec<Destination>,
    /// Destination id selected on first render.
    #[prop_or_default]
    pub initial: Option<&'static str>,
    /// Notified with the destination id after each pick.
    #[prop_or_default]
    pub on_select: Callback<&'static str>,
}

/// Parent form owning the selection state for a list of destination buttons.
#[function_component(DestinationPicker)]
pub fn destination_picker(props: &DestinationPickerProps) -> Html {
    let selected = {
        let initial = props.initial;
        use_state(move || initial)
    };

    let buttons = props.destinations.iter().map(|destination| {
        let id = destination.id;
        let onclick = {
            let selected = selected.clone();
            let on_select = props.on_select.clone();
            Callback::from(move |()| {
                selected.set(Some(id));
                on_select.emit(id);
            })
        };
        html! {
            <DestinationButton
                key={id}
                label={destination.label}
                icon={destination.glyph}
                is_selected={*selected == Some(id)}
                {onclick}
            />
        }
    });
    let caption =
        selected_label(&props.destinations, *selected).unwrap_or("Choose a destination");

    html! {
        <section class="flex flex-col gap-3">
            <h2 class="text-lg font-semibold">{"Where to?"}</h2>
            <div class="grid gap-2">
                { for buttons }
            </div>
            <p class="text-sm opacity-70">{caption}</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::atoms::glyphs;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_one_button_per_destination() {
        let html = ServerRenderer::<DestinationPicker>::with_props(|| DestinationPickerProps {
            destinations: demo_destinations(),
            initial: None,
            on_select: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert_eq!(html.matches("<button").count(), demo_destinations().len());
        for destination in demo_destinations() {
            assert!(html.contains(destination.label));
        }
        assert!(html.contains("Choose a destination"));
    }

    #[tokio::test]
    async fn initial_selection_is_reflected_in_caption() {
        let html = ServerRenderer::<DestinationPicker>::with_props(|| DestinationPickerProps {
            destinations: vec![
                Destination {
                    id: "pier",
                    label: "Pier 7",
                    glyph: glyphs::pin(),
                },
                Destination {
                    id: "clinic",
                    label: "Clinic",
                    glyph: glyphs::hospital(),
                },
            ],
            initial: Some("clinic"),
            on_select: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        assert_eq!(html.matches("<button").count(), 2);
        assert!(html.contains(r#"<p class="text-sm opacity-70">Clinic</p>"#));
    }
}
