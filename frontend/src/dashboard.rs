use gloo_net::http::Method;
use log::error;
use serde_json::Value;
use session_core::Role;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::fetch_json;
use crate::session::use_session;

/* ressource affichée en résumé sur chaque tableau de bord */
fn summary_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin/formateurs",
        Role::Formateur => "/formations",
        Role::Assistant | Role::Participant => "/participants",
    }
}

fn summary_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "formateur(s)",
        Role::Formateur => "formation(s)",
        Role::Assistant | Role::Participant => "participant(s)",
    }
}

#[derive(Clone, PartialEq)]
enum Summary {
    Loading,
    Count(usize),
    Unavailable,
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub role: Role,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let session = use_session();
    let summary = use_state(|| Summary::Loading);

    // ---- Chargement initial : passe par l'API avec le jeton de session ----
    {
        let summary = summary.clone();
        use_effect_with(props.role, move |role| {
            let path = summary_path(*role);
            spawn_local(async move {
                match fetch_json::<(), Vec<Value>>(Method::GET, path, None::<&()>).await {
                    Ok(rows) => summary.set(Summary::Count(rows.len())),
                    Err(err) => {
                        error!("{path}: {err:?}");
                        summary.set(Summary::Unavailable);
                    }
                }
            });
            || ()
        });
    }

    let username = session.profile().map(|p| p.username).unwrap_or_default();

    html! {
        <section class="dashboard">
            <h1>{ format!("Tableau de bord {}", props.role.label()) }</h1>
            <p>{ format!("Bienvenue, {username}.") }</p>
            {
                match &*summary {
                    Summary::Loading => html!(<p>{"Chargement…"}</p>),
                    Summary::Count(n) => html!(<p>{ format!("{n} {}", summary_label(props.role)) }</p>),
                    Summary::Unavailable => html!(<p class="error-message">{"Données indisponibles."}</p>),
                }
            }
        </section>
    }
}
