use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::use_session;
use crate::Route;

#[function_component(Logout)]
pub fn logout() -> Html {
    let session   = use_session();
    let navigator = use_navigator();

    let onclick = Callback::from(move |_| {
        // purement local : l'API ne connaît pas de session à révoquer
        session.logout();

        // retour à la page de login, sans garder la vue protégée dans l'historique
        if let Some(navigator) = &navigator {
            navigator.replace(&Route::Login);
        }
    });

    html! { <button {onclick}>{ "Déconnexion" }</button> }
}
