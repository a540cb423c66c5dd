use session_core::{Registration, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::logout::Logout;
use crate::session::use_session;
use crate::Route;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/* bandeau affiché quand une session est déjà ouverte */
fn signed_in_notice(role: Role) -> String {
    match Route::landing(role) {
        Route::Root => format!(
            "Vous êtes connecté(e) en tant que {}. Aucun tableau de bord n'est prévu pour ce rôle.",
            role.label()
        ),
        _ => format!("Vous êtes déjà connecté(e) en tant que {}.", role.label()),
    }
}

/* -------------------------------------------------------------------------- */
/*                               composant login                               */
/* -------------------------------------------------------------------------- */

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let session       = use_session();
    let navigator     = use_navigator();
    let username_ref  = use_node_ref();
    let password_ref  = use_node_ref();
    let message_state = use_state(String::new);
    let pending       = use_state(|| false);

    /* ------------------ callback du <form onsubmit=…> --------------------- */
    let onsubmit = {
        let session       = session.clone();
        let username_ref  = username_ref.clone();
        let password_ref  = password_ref.clone();
        let message_state = message_state.clone();
        let pending       = pending.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();
            // une seule connexion en vol à la fois
            if *pending {
                return;
            }

            let username = input_value(&username_ref);
            let password = input_value(&password_ref);

            message_state.set(String::new());
            pending.set(true);

            spawn_local({
                let session       = session.clone();
                let navigator     = navigator.clone();
                let message_state = message_state.clone();
                let pending       = pending.clone();

                async move {
                    match session.login(&username, &password).await {
                        Ok(profile) => {
                            let target = Route::landing(profile.role);
                            if let Some(navigator) = navigator {
                                navigator.push(&target);
                            }
                        }
                        Err(err) => message_state.set(err.message()),
                    }
                    pending.set(false);
                }
            });
        })
    };

    /* ------------------ session déjà ouverte -------------------------------- */
    let notice = match session.role() {
        Some(role) if session.is_authenticated() => {
            let landing = Route::landing(role);
            html! {
                <div class="notice">
                    <p>{ signed_in_notice(role) }</p>
                    {
                        if landing != Route::Root {
                            html!(<Link<Route> to={landing}>{"Aller au tableau de bord"}</Link<Route>>)
                        } else {
                            Html::default()
                        }
                    }
                    <Logout />
                </div>
            }
        }
        _ => Html::default(),
    };

    /* ---------------------------- rendu ---------------------------------- */
    html! {
        <div class="login-container">
            <h2>{"Connexion"}</h2>
            <p class="subtitle">{"Admin • Formateur • Assistant"}</p>
            { notice }

            <form {onsubmit}>
                <input ref={username_ref} type="text"     placeholder="Nom d'utilisateur" required=true />
                <input ref={password_ref} type="password" placeholder="Mot de passe" required=true />
                <button type="submit" disabled={*pending}>
                    { if *pending { "Connexion..." } else { "Se connecter" } }
                </button>
            </form>

            {
                if !message_state.is_empty() {
                    html!(<p class="error-message">{ &*message_state }</p>)
                } else {
                    Html::default()
                }
            }

            <p>
                {"Pas encore de compte ? "}
                <Link<Route> to={Route::Register}>{"S'inscrire"}</Link<Route>>
            </p>
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                             composant inscription                           */
/* -------------------------------------------------------------------------- */

const REGISTRABLE: [Role; 3] = [Role::Formateur, Role::Assistant, Role::Participant];

#[function_component(RegisterForm)]
pub fn register_form() -> Html {
    let session       = use_session();
    let navigator     = use_navigator();
    let username_ref  = use_node_ref();
    let email_ref     = use_node_ref();
    let password_ref  = use_node_ref();
    let first_ref     = use_node_ref();
    let last_ref      = use_node_ref();
    let role_ref      = use_node_ref();
    let message_state = use_state(String::new);
    let pending       = use_state(|| false);

    let onsubmit = {
        let refs = (
            username_ref.clone(),
            email_ref.clone(),
            password_ref.clone(),
            first_ref.clone(),
            last_ref.clone(),
            role_ref.clone(),
        );
        let message_state = message_state.clone();
        let pending       = pending.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();
            if *pending {
                return;
            }

            let (username, email, password, first, last, role) = &refs;
            let role = role
                .cast::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<Role>().ok())
                .unwrap_or(Role::Participant);

            let registration = Registration {
                username:   input_value(username),
                email:      input_value(email),
                password:   input_value(password),
                first_name: input_value(first),
                last_name:  input_value(last),
                role,
            };

            message_state.set(String::new());
            pending.set(true);

            spawn_local({
                let session       = session.clone();
                let navigator     = navigator.clone();
                let message_state = message_state.clone();
                let pending       = pending.clone();

                async move {
                    match session.register(&registration).await {
                        // l'inscription n'ouvre pas de session : retour au login
                        Ok(_) => {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Login);
                            }
                        }
                        Err(err) => message_state.set(err.message()),
                    }
                    pending.set(false);
                }
            });
        })
    };

    html! {
        <div class="register-container">
            <h2>{"Inscription"}</h2>

            <form {onsubmit}>
                <input ref={first_ref}    type="text"     placeholder="Prénom" required=true />
                <input ref={last_ref}     type="text"     placeholder="Nom" required=true />
                <input ref={username_ref} type="text"     placeholder="Nom d'utilisateur" required=true />
                <input ref={email_ref}    type="email"    placeholder="Email" required=true />
                <input ref={password_ref} type="password" placeholder="Mot de passe" required=true />
                <select ref={role_ref}>
                    { for REGISTRABLE.iter().map(|r| html! {
                        <option value={r.as_tag()}>{ r.label() }</option>
                    }) }
                </select>
                <button type="submit" disabled={*pending}>{"S'inscrire"}</button>
            </form>

            {
                if !message_state.is_empty() {
                    html!(<p class="error-message">{ &*message_state }</p>)
                } else {
                    Html::default()
                }
            }
        </div>
    }
}
