use crate::components::daisy::foundations::{DaisyColor, DaisySize, DaisyVariant, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or(DaisySize::Md)]
    pub size: DaisySize,
    #[prop_or(DaisyVariant::Solid)]
    pub variant: DaisyVariant,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub circle: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub r#type: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Composes the DaisyUI class list for a button; the tone always comes last.
pub(crate) fn button_classes(props: &ButtonProps) -> Classes {
    let mut classes = classes!(
        "btn",
        props.variant.as_class(),
        props.size.with_prefix("btn"),
        props.full_width.then_some("btn-block"),
        props.circle.then_some("btn-circle"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("btn", props.tone) {
        classes.push(tone);
    }
    classes
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            class={button_classes(props)}
            disabled={props.disabled}
            r#type={props.r#type.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    fn props() -> ButtonProps {
        ButtonProps {
            children: Children::default(),
            tone: None,
            size: DaisySize::Md,
            variant: DaisyVariant::Solid,
            full_width: false,
            circle: false,
            disabled: false,
            class: Classes::new(),
            r#type: None,
            onclick: Callback::noop(),
        }
    }

    #[test]
    fn default_button_has_base_and_size_classes() {
        assert_eq!(button_classes(&props()).to_string(), "btn btn-md");
    }

    #[test]
    fn modifiers_and_tone_are_appended_in_order() {
        let props = ButtonProps {
            tone: Some(DaisyColor::Secondary),
            variant: DaisyVariant::Outline,
            size: DaisySize::Lg,
            full_width: true,
            class: classes!("rounded-xl"),
            ..props()
        };
        assert_eq!(
            button_classes(&props).to_string(),
            "btn btn-outline btn-lg btn-block rounded-xl btn-secondary"
        );
    }

    #[tokio::test]
    async fn renders_children_inside_button_element() {
        let html = ServerRenderer::<Button>::with_props(|| ButtonProps {
            children: Children::new(vec![html! { <span>{ "Go" }</span> }]),
            r#type: Some(AttrValue::from("button")),
            ..props()
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"class="btn btn-md""#));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains("<span>Go</span>"));
        assert!(!html.contains("disabled"));
    }
}
