//! Type-erased handle over any icon component.

use std::any::TypeId;
use std::fmt::{self, Debug, Formatter};

use yew::prelude::*;

use super::IconProps;

/// Reference to a renderable glyph.
///
/// Any component whose properties are [`IconProps`] can be wrapped, so callers
/// are free to bring their own icon source. Two handles are equal when they
/// wrap the same component type.
#[derive(Clone, Copy)]
pub struct Glyph {
    name: &'static str,
    component: TypeId,
    render: fn(IconProps) -> Html,
}

impl Glyph {
    /// Wrap the icon component `C` under a stable name.
    #[must_use]
    pub fn of<C>(name: &'static str) -> Self
    where
        C: BaseComponent<Properties = IconProps>,
    {
        Self {
            name,
            component: TypeId::of::<C>(),
            render: render_component::<C>,
        }
    }

    /// Stable name of the glyph, used for logging and lookups.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Render the wrapped component with the given attributes.
    #[must_use]
    pub fn render(self, props: IconProps) -> Html {
        (self.render)(props)
    }
}

fn render_component<C>(props: IconProps) -> Html
where
    C: BaseComponent<Properties = IconProps>,
{
    html! { <C ..props /> }
}

impl PartialEq for Glyph {
    fn eq(&self, other: &Self) -> bool {
        self.component == other.component
    }
}

impl Eq for Glyph {}

impl Debug for Glyph {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Glyph")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Built-in glyphs for common destinations.
pub mod glyphs {
    use super::Glyph;
    use crate::components::atoms::icons::{
        IconBriefcase, IconHome, IconHospital, IconMapPin, IconSchool, IconShoppingCart,
    };

    /// House.
    #[must_use]
    pub fn home() -> Glyph {
        Glyph::of::<IconHome>("home")
    }

    /// Briefcase.
    #[must_use]
    pub fn work() -> Glyph {
        Glyph::of::<IconBriefcase>("work")
    }

    /// School building.
    #[must_use]
    pub fn school() -> Glyph {
        Glyph::of::<IconSchool>("school")
    }

    /// Shopping cart.
    #[must_use]
    pub fn market() -> Glyph {
        Glyph::of::<IconShoppingCart>("market")
    }

    /// Hospital.
    #[must_use]
    pub fn hospital() -> Glyph {
        Glyph::of::<IconHospital>("hospital")
    }

    /// Map pin.
    #[must_use]
    pub fn pin() -> Glyph {
        Glyph::of::<IconMapPin>("pin")
    }

    /// Looks up a built-in glyph by its stable name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Glyph> {
        all().into_iter().find(|glyph| glyph.name() == name)
    }

    /// Every built-in glyph, in display order.
    #[must_use]
    pub fn all() -> [Glyph; 6] {
        [home(), work(), school(), market(), hospital(), pin()]
    }
}
