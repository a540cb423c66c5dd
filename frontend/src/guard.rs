use session_core::{Access, RouteRequirement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::use_session;
use crate::Route;

/* ---------------- redirection sans historique ----------------- */
#[derive(Properties, PartialEq)]
pub struct ReplaceProps {
    pub to: Route,
}

/// Like `Redirect`, but replaces the current history entry.
#[function_component(Replace)]
pub fn replace(props: &ReplaceProps) -> Html {
    let navigator = use_navigator();

    use_effect_with(props.to.clone(), move |to| {
        if let Some(navigator) = navigator {
            navigator.replace(to);
        }
        || ()
    });

    Html::default()
}

/* ---------------- garde des vues protégées -------------------- */
#[derive(Properties, PartialEq)]
pub struct PrivateRouteProps {
    pub allowed: RouteRequirement,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PrivateRoute)]
pub fn private_route(props: &PrivateRouteProps) -> Html {
    // relu à chaque rendu : suit la session courante, logout compris
    match use_session().check(&props.allowed) {
        Access::Granted => html! { for props.children.iter() },
        Access::Login => html!(<Replace to={Route::Login} />),
        Access::Unauthorized => html!(<Replace to={Route::Unauthorized} />),
    }
}
