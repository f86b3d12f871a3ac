//! Lucide-style glyphs used by the destination controls.
//!
//! Every icon is a function component over [`IconProps`], which makes any of
//! them (or a caller-provided component with the same props) usable through a
//! [`Glyph`] handle.

use yew::prelude::*;

mod glyph;

pub use glyph::{Glyph, glyphs};

/// Stroke or fill rendering for an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IconVariant {
    /// Stroked outline (lucide default).
    #[default]
    Outline,
    /// Filled shape.
    Solid,
}

/// Props shared by every glyph component.
#[derive(Properties, PartialEq, Eq, Clone, Default)]
pub struct IconProps {
    /// Additional CSS classes for the SVG.
    #[prop_or_default]
    pub class: Classes,
    /// Optional accessible title; icons without one are hidden from assistive tech.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Tailwind size token (`5` or `size-5`).
    #[prop_or_default]
    pub size: Option<AttrValue>,
    /// Outline or solid rendering.
    #[prop_or_default]
    pub variant: IconVariant,
}

fn size_class(value: &AttrValue) -> String {
    let raw = value.as_ref();
    if raw.starts_with("size-") {
        raw.to_string()
    } else {
        format!("size-{raw}")
    }
}

fn icon_svg(props: &IconProps, name: &'static str, body: Html) -> Html {
    let mut classes = Classes::new();
    if let Some(size) = props.size.as_ref().map(size_class) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    let title_node = title
        .clone()
        .map(|text| html! { <title>{text}</title> })
        .unwrap_or_default();
    let (fill, stroke) = match props.variant {
        IconVariant::Outline => ("none", "currentColor"),
        IconVariant::Solid => ("currentColor", "currentColor"),
    };
    html! {
        <svg
            class={classes}
            data-icon={name}
            viewBox="0 0 24 24"
            fill={fill}
            stroke={stroke}
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title}
        >
            {title_node}
            {body}
        </svg>
    }
}

/// House glyph for home destinations.
#[function_component(IconHome)]
pub fn icon_home(props: &IconProps) -> Html {
    icon_svg(
        props,
        "house",
        html! { <>
            <path d="M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" />
            <path d="M3 10a2 2 0 0 1 .709-1.528l7-6a2 2 0 0 1 2.582 0l7 6A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
        </> },
    )
}

/// Briefcase glyph for work destinations.
#[function_component(IconBriefcase)]
pub fn icon_briefcase(props: &IconProps) -> Html {
    icon_svg(
        props,
        "briefcase",
        html! { <>
            <path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" />
            <rect width="20" height="14" x="2" y="6" rx="2" />
        </> },
    )
}

/// School building glyph.
#[function_component(IconSchool)]
pub fn icon_school(props: &IconProps) -> Html {
    icon_svg(
        props,
        "school",
        html! { <>
            <path d="M14 22v-4a2 2 0 1 0-4 0v4" />
            <path d="m18 10 3.447 1.724a1 1 0 0 1 .553.894V20a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-7.382a1 1 0 0 1 .553-.894L6 10" />
            <path d="M18 5v17M6 5v17" />
            <path d="m4 6 7.106-3.553a2 2 0 0 1 1.788 0L20 6" />
            <circle cx="12" cy="9" r="2" />
        </> },
    )
}

/// Shopping cart glyph for markets and stores.
#[function_component(IconShoppingCart)]
pub fn icon_shopping_cart(props: &IconProps) -> Html {
    icon_svg(
        props,
        "shopping-cart",
        html! { <>
            <circle cx="8" cy="21" r="1" />
            <circle cx="19" cy="21" r="1" />
            <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12" />
        </> },
    )
}

/// Hospital glyph.
#[function_component(IconHospital)]
pub fn icon_hospital(props: &IconProps) -> Html {
    icon_svg(
        props,
        "hospital",
        html! { <>
            <path d="M12 6v4m2 4h-4m4 4h-4m4-10h-4" />
            <path d="M18 12h2a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-9a2 2 0 0 1 2-2h2" />
            <path d="M18 22V4a2 2 0 0 0-2-2H8a2 2 0 0 0-2 2v18" />
        </> },
    )
}

/// Generic map pin, used when no better glyph fits.
#[function_component(IconMapPin)]
pub fn icon_map_pin(props: &IconProps) -> Html {
    icon_svg(
        props,
        "map-pin",
        html! { <>
            <path d="M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0" />
            <circle cx="12" cy="10" r="3" />
        </> },
    )
}
