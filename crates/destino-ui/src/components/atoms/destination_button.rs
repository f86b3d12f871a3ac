//! Button used to pick a destination option in a form.

use yew::prelude::*;

use crate::components::atoms::icons::{Glyph, IconProps};
use crate::components::daisy::{
    Button, ButtonProps, DaisyColor, DaisySize, DaisyVariant,
};

/// Text rendered between the icon and the label on every destination button.
pub const PLACEHOLDER_MARKER: &str = " - - - ";

/// Props for [`DestinationButton`].
#[derive(Properties, PartialEq)]
pub struct DestinationButtonProps {
    /// Text identifying the destination.
    pub label: AttrValue,
    /// Glyph shown at the leading edge.
    pub icon: Glyph,
    /// Selection state owned by the caller.
    ///
    /// Accepted but not reflected in the rendered output yet.
    #[prop_or_default]
    pub is_selected: bool,
    /// Invoked once per activation.
    #[prop_or_default]
    pub onclick: Callback<()>,
}

/// Adapts a zero-argument callback to any event type by discarding the event.
pub(crate) fn activation_handler<E: 'static>(
    onclick: &Callback<()>,
    label: AttrValue,
) -> Callback<E> {
    onclick.reform(move |_: E| {
        tracing::debug!(destination = %label, "destination activated");
    })
}

/// Props for the underlying [`Button`]: secondary tone, rounded layout, forwarded activation.
pub(crate) fn button_props(props: &DestinationButtonProps, children: Html) -> ButtonProps {
    ButtonProps {
        children: Children::new(vec![children]),
        tone: Some(DaisyColor::Secondary),
        size: DaisySize::Md,
        variant: DaisyVariant::Solid,
        full_width: false,
        circle: false,
        disabled: false,
        class: classes!("flex", "items-center", "justify-between", "px-4", "p-8", "rounded-xl"),
        r#type: None,
        onclick: activation_handler::<MouseEvent>(&props.onclick, props.label.clone()),
    }
}

/// Secondary DaisyUI button showing a glyph, a placeholder marker, and a label.
#[function_component(DestinationButton)]
pub fn destination_button(props: &DestinationButtonProps) -> Html {
    // TODO: style `is_selected` once product defines the selected appearance.
    let icon = props.icon.render(IconProps {
        class: classes!("w-5", "h-5"),
        ..IconProps::default()
    });
    let content = html! {
        <>
            <div class="flex items-center space-x-2">
                {icon}
                <span>{PLACEHOLDER_MARKER}</span>
            </div>
            <span class="ml-2 font-bold">{props.label.clone()}</span>
        </>
    };

    html! { <Button ..button_props(props, content) /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::atoms::icons::glyphs;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::{JsCast, JsValue};
    use yew::ServerRenderer;

    /// Stand-in for a DOM event; activation ignores the payload.
    struct Tap;

    async fn render(label: &'static str, icon: fn() -> Glyph, is_selected: bool) -> String {
        ServerRenderer::<DestinationButton>::with_props(move || DestinationButtonProps {
            label: AttrValue::from(label),
            icon: icon(),
            is_selected,
            onclick: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn counting_callback() -> (Callback<()>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let callback = Callback::from(move |()| counter.set(counter.get() + 1));
        (callback, calls)
    }

    #[tokio::test]
    async fn renders_label_glyph_and_marker() {
        let html = render("Home", glyphs::home, false).await;

        assert!(html.contains(r#"<span class="ml-2 font-bold">Home</span>"#));
        assert!(html.contains(r#"data-icon="house""#));
        assert!(html.contains(&format!("<span>{PLACEHOLDER_MARKER}</span>")));
        assert!(html.contains(r#"class="w-5 h-5""#));
    }

    #[tokio::test]
    async fn uses_secondary_rounded_button() {
        let html = render("Work", glyphs::work, false).await;

        assert!(html.starts_with("<button"));
        assert!(html.contains(
            r#"class="btn btn-md flex items-center justify-between px-4 p-8 rounded-xl btn-secondary""#
        ));
        assert!(html.contains(r#"data-icon="briefcase""#));
    }

    #[tokio::test]
    async fn every_builtin_glyph_is_rendered() {
        let expected = ["house", "briefcase", "school", "shopping-cart", "hospital", "map-pin"];
        for (glyph, svg_name) in glyphs::all().into_iter().zip(expected) {
            let html = ServerRenderer::<DestinationButton>::with_props(move || {
                DestinationButtonProps {
                    label: AttrValue::from(glyph.name()),
                    icon: glyph,
                    is_selected: false,
                    onclick: Callback::noop(),
                }
            })
            .hydratable(false)
            .render()
            .await;

            assert!(
                html.contains(&format!(r#"data-icon="{svg_name}""#)),
                "{} rendered the wrong svg",
                glyph.name()
            );
        }
    }

    #[tokio::test]
    async fn label_text_is_preserved_verbatim() {
        let html = render("Praça da Sé 42", glyphs::pin, false).await;
        assert!(html.contains("Praça da Sé 42"));
    }

    #[tokio::test]
    async fn selection_flag_does_not_change_output() {
        let unselected = render("Home", glyphs::home, false).await;
        let selected = render("Home", glyphs::home, true).await;
        assert_eq!(selected, unselected);
    }

    #[test]
    fn single_activation_invokes_callback_once() {
        let (callback, calls) = counting_callback();
        let handler = activation_handler::<Tap>(&callback, AttrValue::from("Home"));

        handler.emit(Tap);
        assert_eq!(calls.get(), 1);

        handler.emit(Tap);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn rendered_button_forwards_one_click_to_caller() {
        let (callback, calls) = counting_callback();
        let props = DestinationButtonProps {
            label: AttrValue::from("Home"),
            icon: glyphs::home(),
            is_selected: false,
            onclick: callback,
        };
        let button = button_props(&props, Html::default());

        // Null handle: the handler ignores the event, so no DOM access happens.
        button.onclick.emit(JsValue::NULL.unchecked_into::<MouseEvent>());
        assert_eq!(calls.get(), 1);
        assert_eq!(button.tone, Some(DaisyColor::Secondary));
    }

    #[test]
    fn handler_is_rebuilt_without_extra_invocations() {
        let (callback, calls) = counting_callback();
        let _first = activation_handler::<Tap>(&callback, AttrValue::from("Work"));
        let second = activation_handler::<Tap>(&callback, AttrValue::from("Work"));

        assert_eq!(calls.get(), 0);
        second.emit(Tap);
        assert_eq!(calls.get(), 1);
    }
}
